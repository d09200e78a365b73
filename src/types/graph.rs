//! The weighted directed graph searched by the path finding algorithms.
//!
//! The graph is built once from a [`CoordinateStore`] and is immutable
//! afterwards. Every location in the store becomes a vertex, whether or
//! not any edge touches it.

use std::collections::{BTreeMap, HashMap};

use ordered_float::OrderedFloat;
use petgraph::{
    graph::NodeIndex,
    stable_graph::StableDiGraph,
    visit::{EdgeRef, IntoEdgeReferences},
};
use serde::{Serialize, Serializer};

use crate::{
    edge::Edge,
    error::{Error, Result},
    haversine::DistanceUnit,
    location::CoordinateStore,
    utils::graph::{build_complete_edges, build_edges_from_adjacency, Adjacency, WeightedEdge},
};

/// A Graph struct contains a petgraph graph of location names and also
/// a hashmap that maps a name to its index in the graph.
#[derive(Debug, Clone)]
pub struct Graph {
    graph: StableDiGraph<String, OrderedFloat<f64>>,
    node_indices: HashMap<String, NodeIndex>,
    unit: DistanceUnit,
}

/// Builds a graph whose edge weights are haversine distances.
///
/// # Arguments
/// * `coordinates` - The coordinates of every location.
/// * `adjacency` - Explicit neighbor lists. When [`None`], every
///   ordered pair of distinct locations is connected.
/// * `unit` - The unit for edge weights and later for search
///   heuristics.
///
/// # Errors
/// [`Error::MissingCoordinate`] if the adjacency references a location
/// that has no coordinate.
pub fn build_graph(
    coordinates: &CoordinateStore,
    adjacency: Option<&Adjacency>,
    unit: DistanceUnit,
) -> Result<Graph> {
    info!(
        "Building {} graph over {} locations",
        if adjacency.is_some() {
            "adjacency"
        } else {
            "complete"
        },
        coordinates.len()
    );
    let edges = match adjacency {
        Some(adjacency) => build_edges_from_adjacency(coordinates, adjacency, unit)?,
        None => build_complete_edges(coordinates, unit),
    };
    let graph = Graph::from_edges(coordinates, edges, unit);
    info!(
        "Graph ready: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

impl Graph {
    /// Creates a graph with one vertex per stored location and the
    /// given edges. Edges whose endpoints are not stored are ignored.
    fn from_edges(
        coordinates: &CoordinateStore,
        edges: Vec<WeightedEdge>,
        unit: DistanceUnit,
    ) -> Graph {
        let mut graph = StableDiGraph::with_capacity(coordinates.len(), edges.len());
        let mut node_indices = HashMap::with_capacity(coordinates.len());

        for name in coordinates.names() {
            let index = graph.add_node(name.to_string());
            node_indices.insert(name.to_string(), index);
        }

        for (from, to, cost) in edges {
            match (node_indices.get(&from), node_indices.get(&to)) {
                (Some(&from_index), Some(&to_index)) => {
                    graph.update_edge(from_index, to_index, cost);
                }
                _ => debug!("Dropping edge {} -> {} with unknown endpoint", from, to),
            }
        }

        Graph {
            graph,
            node_indices,
            unit,
        }
    }

    /// The unit every edge weight is expressed in.
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    /// The weight of the edge `from -> to`, if it exists.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        let from_index = self.node_index(from)?;
        let to_index = self.node_index(to)?;
        self.graph
            .find_edge(from_index, to_index)
            .and_then(|edge| self.graph.edge_weight(edge))
            .map(|cost| cost.into_inner())
    }

    /// Outgoing edges of `name` as `(neighbor, weight)` pairs.
    ///
    /// Empty if the location is unknown or isolated.
    pub fn neighbors<'a>(&'a self, name: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.node_index(name)
            .into_iter()
            .flat_map(move |index| self.outgoing(index))
            .map(move |(target, cost)| (self.graph[target].as_str(), cost))
    }

    /// Get all the edges in the graph, ordered by source then target
    /// name.
    pub fn edges(&self) -> Vec<Edge<'_>> {
        let mut edges: Vec<Edge<'_>> = self
            .graph
            .edge_references()
            .map(|edge| Edge {
                from: self.graph[edge.source()].as_str(),
                to: self.graph[edge.target()].as_str(),
                cost: *edge.weight(),
            })
            .collect();
        edges.sort_by(|a, b| (a.from, a.to).cmp(&(b.from, b.to)));
        edges
    }

    /// Source -> (destination -> weight), the plain mapping form of the
    /// graph. Isolated locations map to an empty inner map.
    pub fn to_adjacency_map(&self) -> BTreeMap<String, BTreeMap<String, f64>> {
        let mut map: BTreeMap<String, BTreeMap<String, f64>> = self
            .node_indices
            .keys()
            .map(|name| (name.clone(), BTreeMap::new()))
            .collect();
        for edge in self.graph.edge_references() {
            if let Some(targets) = map.get_mut(&self.graph[edge.source()]) {
                targets.insert(self.graph[edge.target()].clone(), edge.weight().into_inner());
            }
        }
        map
    }

    //---------------------------------------------------------------
    // Crate-internal accessors for the search engine
    //---------------------------------------------------------------

    /// Get the NodeIndex struct for a given location name. The
    /// NodeIndex struct is used to reference things in the graph.
    pub(crate) fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.node_indices.get(name).copied()
    }

    /// Fails with [`Error::UnknownLocation`] when `name` is not a
    /// vertex.
    pub(crate) fn require(&self, name: &str) -> Result<NodeIndex> {
        self.node_index(name)
            .ok_or_else(|| Error::unknown_location(name))
    }

    pub(crate) fn name(&self, index: NodeIndex) -> &str {
        &self.graph[index]
    }

    /// Outgoing `(target, weight)` pairs of a vertex, in the order the
    /// edges were inserted.
    pub(crate) fn outgoing(&self, index: NodeIndex) -> Vec<(NodeIndex, f64)> {
        let mut targets: Vec<(NodeIndex, f64)> = self
            .graph
            .edges(index)
            .map(|edge| (edge.target(), edge.weight().into_inner()))
            .collect();
        // petgraph walks a node's edge list newest first.
        targets.reverse();
        targets
    }

    pub(crate) fn inner(&self) -> &StableDiGraph<String, OrderedFloat<f64>> {
        &self.graph
    }
}

/// Serializes in the `graph.json` shape consumed by map renderers.
impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_adjacency_map().serialize(serializer)
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
