//! Error types for graph construction, search, and path evaluation.
//!
//! Every variant is an input error: it is raised synchronously where the
//! bad input is detected. Not finding a route is not an error, see
//! [`SearchResult::NotFound`](crate::path::SearchResult::NotFound).

use thiserror::Error;

/// Convenient result alias for the pathfinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raised when an adjacency entry, or a graph vertex used by the
    /// heuristic, has no coordinate in the store.
    #[error("missing coordinate for location: {name}")]
    MissingCoordinate { name: String },

    /// Raised when a start, goal, or path vertex is not a known location.
    #[error("unknown location: {name}")]
    UnknownLocation { name: String },

    /// Raised when two consecutive path vertices are not joined by an edge.
    #[error("disconnected path: no edge from {from} to {to}")]
    DisconnectedPath { from: String, to: String },

    /// Raised when an externally supplied path has no vertices.
    #[error("path is empty")]
    EmptyPath,
}

impl Error {
    pub(crate) fn missing_coordinate(name: impl Into<String>) -> Self {
        Error::MissingCoordinate { name: name.into() }
    }

    pub(crate) fn unknown_location(name: impl Into<String>) -> Self {
        Error::UnknownLocation { name: name.into() }
    }
}
