//! Best-first search over a [`Graph`], in two flavours: A* and Greedy
//! Best-First Search.
//!
//! Both algorithms share one state machine. A frontier (min-priority
//! queue) holds candidate partial paths and a visited set holds
//! finalized vertices. Each step pops the entry with the lowest
//! priority:
//!
//! * if its vertex is the goal, the search succeeds with that entry's
//!   path and accumulated cost;
//! * if its vertex was already visited, the entry is stale and dropped;
//! * otherwise the vertex is marked visited and one entry is pushed per
//!   outgoing edge to an unvisited neighbor.
//!
//! An empty frontier means the goal is unreachable.
//!
//! The first pop of a vertex wins. A vertex is never re-expanded, even
//! if a cheaper entry for it shows up later. With haversine edge
//! weights the haversine heuristic is consistent, so A* stays optimal
//! under this policy. Greedy orders by the heuristic alone and is not
//! optimal.
//!
//! # Queue growth
//! Every expansion pushes at most one entry per outgoing edge, and each
//! vertex is expanded at most once, so the frontier receives at most
//! *E* entries in total and a search costs *O*(*E* log *E*) queue work.
//! On a complete graph of *N* locations that is *N*·(*N*−1) entries.
//! Each entry owns its path, so memory is *O*(*E*·*V*) in the worst
//! case.

use std::{cmp::Ordering, collections::BinaryHeap, fmt, str::FromStr};

use ordered_float::OrderedFloat;
use petgraph::{
    graph::NodeIndex,
    visit::{VisitMap, Visitable},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    graph::Graph,
    haversine,
    location::{CoordinateStore, Location},
    path::{Path, SearchResult},
};

/// Path finding algorithms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Orders the frontier by accumulated cost plus heuristic.
    AStar,
    /// Orders the frontier by heuristic alone.
    Greedy,
}

impl Algorithm {
    /// Frontier priority of a neighbor reached with accumulated cost
    /// `cost` and heuristic estimate `estimate`.
    fn priority(self, cost: f64, estimate: f64) -> f64 {
        match self {
            Algorithm::AStar => cost + estimate,
            Algorithm::Greedy => estimate,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::AStar => write!(f, "A*"),
            Algorithm::Greedy => write!(f, "Greedy"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a_star" | "a-star" => Ok(Algorithm::AStar),
            "greedy" | "gbfs" | "best-first" => Ok(Algorithm::Greedy),
            other => Err(format!("unknown algorithm: {other}")),
        }
    }
}

/// One candidate partial path in the frontier.
#[derive(Debug, Clone)]
struct FrontierEntry {
    priority: OrderedFloat<f64>,
    /// Accumulated edge weight from the start.
    cost: f64,
    vertex: NodeIndex,
    path: Vec<NodeIndex>,
    /// Push order; breaks priority ties first-in first-out.
    sequence: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the lowest priority first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a path from `start` to `goal`.
///
/// The heuristic is the haversine distance to the goal, taken from
/// `coordinates` in the unit the graph was built with.
///
/// # Arguments
/// * `graph` - The graph to search. It is never mutated.
/// * `coordinates` - Coordinates for the heuristic.
/// * `start` - The location to start from.
/// * `goal` - The location to end at.
/// * `algorithm` - Selects the frontier priority.
///
/// # Returns
/// [`SearchResult::Found`] with the path and its accumulated cost, or
/// [`SearchResult::NotFound`] if the frontier runs dry. Identical
/// inputs always yield identical results.
///
/// # Errors
/// [`Error::UnknownLocation`] if `start` or `goal` is missing from the
/// coordinates or the graph, checked before the search begins.
/// [`Error::MissingCoordinate`] if a vertex reached during the search
/// has no coordinate.
pub fn search(
    graph: &Graph,
    coordinates: &CoordinateStore,
    start: &str,
    goal: &str,
    algorithm: Algorithm,
) -> Result<SearchResult> {
    for name in [start, goal] {
        if !coordinates.contains(name) {
            return Err(Error::unknown_location(name));
        }
    }
    let start_index = graph.require(start)?;
    let goal_index = graph.require(goal)?;

    let heuristic = Heuristic::new(graph, coordinates, goal)?;

    debug!("{} search from {} to {}", algorithm, start, goal);
    let mut frontier = BinaryHeap::new();
    let mut visited = graph.inner().visit_map();
    let mut sequence = 0_u64;

    frontier.push(FrontierEntry {
        priority: OrderedFloat(algorithm.priority(0.0, heuristic.estimate(start_index)?)),
        cost: 0.0,
        vertex: start_index,
        path: vec![start_index],
        sequence,
    });

    while let Some(entry) = frontier.pop() {
        trace!(
            "pop {} (priority {}, cost {})",
            graph.name(entry.vertex),
            entry.priority,
            entry.cost
        );
        if entry.vertex == goal_index {
            let path = to_path(graph, start_index, &entry.path[1..]);
            debug!("{} found {} with cost {}", algorithm, path, entry.cost);
            return Ok(SearchResult::Found {
                path,
                cost: entry.cost,
            });
        }
        if !visited.visit(entry.vertex) {
            continue;
        }

        for (neighbor, weight) in graph.outgoing(entry.vertex) {
            if visited.is_visited(&neighbor) {
                continue;
            }
            let cost = entry.cost + weight;
            let priority = algorithm.priority(cost, heuristic.estimate(neighbor)?);

            let mut path = Vec::with_capacity(entry.path.len() + 1);
            path.extend_from_slice(&entry.path);
            path.push(neighbor);

            sequence += 1;
            frontier.push(FrontierEntry {
                priority: OrderedFloat(priority),
                cost,
                vertex: neighbor,
                path,
                sequence,
            });
        }
    }

    debug!("{} found no path from {} to {}", algorithm, start, goal);
    Ok(SearchResult::NotFound)
}

/// Haversine distance from any vertex to a fixed goal.
struct Heuristic<'a> {
    graph: &'a Graph,
    coordinates: &'a CoordinateStore,
    goal: Location,
}

impl<'a> Heuristic<'a> {
    fn new(graph: &'a Graph, coordinates: &'a CoordinateStore, goal: &str) -> Result<Self> {
        let goal = *coordinates
            .get(goal)
            .ok_or_else(|| Error::unknown_location(goal))?;
        Ok(Heuristic {
            graph,
            coordinates,
            goal,
        })
    }

    fn estimate(&self, vertex: NodeIndex) -> Result<f64> {
        let name = self.graph.name(vertex);
        let location = self
            .coordinates
            .get(name)
            .ok_or_else(|| Error::missing_coordinate(name))?;
        Ok(haversine::distance(location, &self.goal, self.graph.unit()))
    }
}

fn to_path(graph: &Graph, start: NodeIndex, rest: &[NodeIndex]) -> Path {
    Path::from_start(
        graph.name(start).to_string(),
        rest.iter().map(|&index| graph.name(index).to_string()),
    )
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
