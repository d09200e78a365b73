//! Great-circle distance between two [`Location`]s.

use serde::{Deserialize, Serialize};

use crate::location::Location;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Unit in which distances, edge weights, and path costs are expressed.
///
/// A graph is built in exactly one unit and remembers it, so its edge
/// weights and its search heuristic always agree.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Meters,
}

impl DistanceUnit {
    /// Earth's mean radius in this unit.
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
            DistanceUnit::Meters => EARTH_RADIUS_M,
        }
    }

    /// Short suffix used when printing distances.
    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Meters => "m",
        }
    }
}

/// Computes the haversine distance between two locations.
///
/// The result is non-negative, symmetric, and zero for identical
/// locations. Inputs are assumed to be valid degrees; NaN is not
/// guarded against.
///
/// # Arguments
/// * `from` - One end of the arc.
/// * `to` - The other end of the arc.
/// * `unit` - Selects the Earth radius and thereby the output unit.
pub fn distance(from: &Location, to: &Location, unit: DistanceUnit) -> f64 {
    let lat1 = from.latitude.into_inner().to_radians();
    let lat2 = to.latitude.into_inner().to_radians();
    let dlat = lat2 - lat1;
    let dlon = to.longitude.into_inner().to_radians() - from.longitude.into_inner().to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    unit.earth_radius() * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
