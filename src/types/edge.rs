//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::Serialize;

/// A directed edge between two named locations.
/// The cost represents the "weight" of the edge, which is the
/// great-circle distance between its endpoints.
#[derive(Debug, PartialEq, Hash, Eq, Clone, Serialize)]
pub struct Edge<'a> {
    /// The location the edge leaves from.
    pub from: &'a str,

    /// The location the edge arrives at.
    pub to: &'a str,

    /// The weight of the edge.
    pub cost: OrderedFloat<f64>,
}
