//! Search outputs: the [`Path`] through the graph and the
//! [`SearchResult`] of one algorithm invocation.

use std::fmt;

use serde::Serialize;

/// An ordered, non-empty sequence of location names.
///
/// Consecutive names are joined by a graph edge and no name repeats
/// when the path comes out of a search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path {
    vertices: Vec<String>,
}

impl Path {
    /// Wraps a vertex sequence.
    ///
    /// # Returns
    /// [`None`] if `vertices` is empty.
    pub fn new(vertices: Vec<String>) -> Option<Path> {
        if vertices.is_empty() {
            None
        } else {
            Some(Path { vertices })
        }
    }

    /// A path that begins at `start`, so it can never be empty.
    pub(crate) fn from_start(start: String, rest: impl Iterator<Item = String>) -> Path {
        let mut vertices = vec![start];
        vertices.extend(rest);
        Path { vertices }
    }

    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Number of vertices, always at least one.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false, a path holds at least its start.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of traversed edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn start(&self) -> &str {
        &self.vertices[0]
    }

    pub fn goal(&self) -> &str {
        &self.vertices[self.vertices.len() - 1]
    }

    pub fn into_vertices(self) -> Vec<String> {
        self.vertices
    }
}

impl AsRef<[String]> for Path {
    fn as_ref(&self) -> &[String] {
        &self.vertices
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices.join(" → "))
    }
}

/// Outcome of one search: a path with its accumulated cost, or an
/// explicit "not found". Not finding a path is a normal result, not an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResult {
    Found { path: Path, cost: f64 },
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Found { path, .. } => Some(path),
            SearchResult::NotFound => None,
        }
    }

    pub fn cost(&self) -> Option<f64> {
        match self {
            SearchResult::Found { cost, .. } => Some(*cost),
            SearchResult::NotFound => None,
        }
    }
}

/// Most decimals a cost is rounded to. f64 carries no more significant
/// digits than this.
pub const MAX_COST_DECIMALS: u32 = f64::DIGITS;

/// Rounds `value` to `decimals` places, the precision costs are
/// reported with. `decimals` is capped at [`MAX_COST_DECIMALS`].
pub fn round_cost(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_COST_DECIMALS) as i32);
    (value * factor).round() / factor
}
