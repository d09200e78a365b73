//! Helper functions for building weighted edges among locations.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::error::{Error, Result};
use crate::haversine::{self, DistanceUnit};
use crate::location::CoordinateStore;

/// Explicit neighbor lists, keyed by source location name.
///
/// Connectivity may be asymmetric: listing `B` under `A` creates only
/// the `A -> B` edge.
pub type Adjacency = BTreeMap<String, Vec<String>>;

/// An edge in the format of (from, to, weight).
pub type WeightedEdge = (String, String, OrderedFloat<f64>);

/// Build one edge per listed neighbor.
///
/// Duplicate neighbors collapse into a single edge and a location that
/// lists itself is skipped, so the result never contains a self-loop.
///
/// # Arguments
/// * `coordinates` - The coordinates of every location.
/// * `adjacency` - The neighbor lists.
/// * `unit` - The unit for edge weights.
///
/// # Returns
/// A vector of edges in the format of (from, to, weight), ordered by
/// source name and then by neighbor list order.
///
/// # Errors
/// [`Error::MissingCoordinate`] if a source or a neighbor has no
/// coordinate.
pub fn build_edges_from_adjacency(
    coordinates: &CoordinateStore,
    adjacency: &Adjacency,
    unit: DistanceUnit,
) -> Result<Vec<WeightedEdge>> {
    let mut edges = Vec::new();
    for (from, neighbors) in adjacency {
        let from_location = coordinates
            .get(from)
            .ok_or_else(|| Error::missing_coordinate(from.as_str()))?;

        let mut seen: Vec<&str> = Vec::with_capacity(neighbors.len());
        for to in neighbors {
            let to_location = coordinates
                .get(to)
                .ok_or_else(|| Error::missing_coordinate(to.as_str()))?;
            if to == from {
                warn!("Skipping self-loop on location {}", from);
                continue;
            }
            if seen.contains(&to.as_str()) {
                debug!("Duplicate neighbor {} of {} ignored", to, from);
                continue;
            }
            seen.push(to);

            let cost = haversine::distance(from_location, to_location, unit);
            edges.push((from.clone(), to.clone(), OrderedFloat(cost)));
        }
    }
    Ok(edges)
}

/// Connect every location to every other location.
///
/// # Returns
/// A vector of edges in the format of (from, to, weight).
///
/// # Time Complexity
/// *O*(*n^2*), producing exactly *n*·(*n*−1) edges.
pub fn build_complete_edges(
    coordinates: &CoordinateStore,
    unit: DistanceUnit,
) -> Vec<WeightedEdge> {
    let mut edges = Vec::with_capacity(coordinates.len() * coordinates.len().saturating_sub(1));
    for (from, from_location) in coordinates.iter() {
        for (to, to_location) in coordinates.iter() {
            if from != to {
                let cost = haversine::distance(from_location, to_location, unit);
                edges.push((from.to_string(), to.to_string(), OrderedFloat(cost)));
            }
        }
    }
    edges
}
