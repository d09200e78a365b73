//! Great-circle Route Search Library.
//! Finds routes between named locations and compares A* with Greedy
//! Best-First Search on the same start and goal.
//!
//! The caller supplies coordinates (and optionally neighbor lists)
//! already parsed into memory, builds a [`Graph`] with [`build_graph`],
//! then runs [`search`] or [`compare_strategies`]. Nothing here reads
//! files, renders maps, or prints.
//!
//! ```
//! use pathfinder::{build_graph, search, Algorithm, CoordinateStore, DistanceUnit, Location};
//!
//! let coordinates: CoordinateStore = [
//!     ("Biratnagar", Location::new(26.4525, 87.2718)),
//!     ("Kathmandu", Location::new(27.7172, 85.3240)),
//!     ("Pokhara", Location::new(28.2096, 83.9856)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let graph = build_graph(&coordinates, None, DistanceUnit::Kilometers).unwrap();
//! let result = search(&graph, &coordinates, "Biratnagar", "Pokhara", Algorithm::AStar).unwrap();
//! assert_eq!(result.path().unwrap().to_string(), "Biratnagar → Pokhara");
//! ```
#[macro_use]
extern crate log;

pub mod config;
pub mod error;

mod types {
    pub mod edge;
    pub mod graph;
    pub mod location;
    pub mod path;
}

mod utils {
    pub mod generator;
    pub mod graph;
    pub mod haversine;
}

mod algorithms {
    pub mod evaluator;
    pub mod search;
}

pub use algorithms::*;
pub use types::*;
pub use utils::{generator, haversine};

pub use config::RouterConfig;
pub use edge::Edge;
pub use error::{Error, Result};
pub use evaluator::{
    compare_paths, compare_strategies, path_cost, ComparisonOutcome, StrategyComparison,
};
pub use generator::generate_locations_near;
pub use graph::{build_graph, Graph};
pub use haversine::DistanceUnit;
pub use location::{CoordinateStore, Location};
pub use path::{round_cost, Path, SearchResult};
pub use search::{search, Algorithm};
pub use utils::graph::{build_complete_edges, build_edges_from_adjacency, Adjacency};
