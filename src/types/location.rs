//! Struct definitions and implementations for [`Location`] and the
//! [`CoordinateStore`] that maps location names to coordinates.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Location`] is a point on the Earth's surface, expressed in
/// degrees.
///
/// Serialized as a `[latitude, longitude]` pair, which is the shape
/// location files usually store coordinates in.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Location {
    /// The latitude of the location.
    pub latitude: OrderedFloat<f64>,

    /// The longitude of the location.
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Creates a location from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }
}

impl From<(f64, f64)> for Location {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Location::new(latitude, longitude)
    }
}

impl From<Location> for (f64, f64) {
    fn from(location: Location) -> Self {
        (location.latitude.into_inner(), location.longitude.into_inner())
    }
}

/// Maps each location name to exactly one [`Location`].
///
/// Names are case-sensitive and matched exactly. A [`BTreeMap`] is used
/// so that iteration order, and with it graph construction and search
/// tie-breaking, is the same on every run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateStore {
    locations: BTreeMap<String, Location>,
}

impl CoordinateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the coordinate of `name`.
    ///
    /// # Returns
    /// The previous coordinate, if the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, location: Location) -> Option<Location> {
        self.locations.insert(name.into(), location)
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterates over `(name, location)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Location)> {
        self.locations
            .iter()
            .map(|(name, location)| (name.as_str(), location))
    }

    /// Iterates over location names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    /// Mean latitude and longitude of all locations. Map renderers use
    /// it to centre their view.
    ///
    /// # Returns
    /// [`None`] if the store is empty.
    pub fn centroid(&self) -> Option<Location> {
        if self.locations.is_empty() {
            return None;
        }
        let count = self.locations.len() as f64;
        let (lat_sum, lon_sum) = self
            .locations
            .values()
            .fold((0.0, 0.0), |(lat, lon), location| {
                (
                    lat + location.latitude.into_inner(),
                    lon + location.longitude.into_inner(),
                )
            });
        Some(Location::new(lat_sum / count, lon_sum / count))
    }
}

impl<S: Into<String>> FromIterator<(S, Location)> for CoordinateStore {
    fn from_iter<I: IntoIterator<Item = (S, Location)>>(iter: I) -> Self {
        CoordinateStore {
            locations: iter
                .into_iter()
                .map(|(name, location)| (name.into(), location))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, Location>> for CoordinateStore {
    fn from(locations: BTreeMap<String, Location>) -> Self {
        CoordinateStore { locations }
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
