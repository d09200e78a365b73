//! Path costing and ranking of two search results.

use std::fmt;

use serde::Serialize;

use crate::{
    config::RouterConfig,
    error::{Error, Result},
    graph::Graph,
    haversine::DistanceUnit,
    location::CoordinateStore,
    path::{round_cost, SearchResult, MAX_COST_DECIMALS},
    search::{search, Algorithm},
};

/// How two search results rank against each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOutcome {
    /// Both found a path and the first is strictly cheaper.
    FirstBetter,
    /// Both found a path and the second is strictly cheaper.
    SecondBetter,
    /// Both found a path and the costs agree within epsilon.
    Tie,
    OnlyFirstFound,
    OnlySecondFound,
    NeitherFound,
}

/// Sum the edge weights along `path`.
///
/// Works on any sequence of names, not only on search output.
///
/// # Errors
/// * [`Error::EmptyPath`] if `path` has no vertices.
/// * [`Error::UnknownLocation`] if a vertex is not in the graph.
/// * [`Error::DisconnectedPath`] at the first consecutive pair without
///   an edge.
pub fn path_cost<S: AsRef<str>>(path: &[S], graph: &Graph) -> Result<f64> {
    let first = path.first().ok_or(Error::EmptyPath)?;
    if !graph.contains(first.as_ref()) {
        return Err(Error::unknown_location(first.as_ref()));
    }

    let mut total = 0.0;
    for pair in path.windows(2) {
        let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
        if !graph.contains(to) {
            return Err(Error::unknown_location(to));
        }
        total += graph
            .weight(from, to)
            .ok_or_else(|| Error::DisconnectedPath {
                from: from.to_string(),
                to: to.to_string(),
            })?;
    }
    Ok(total)
}

/// Rank two search results by cost.
///
/// Costs within `epsilon` of each other count as a tie, since two
/// accumulation orders can round differently.
pub fn compare_paths(
    first: &SearchResult,
    second: &SearchResult,
    epsilon: f64,
) -> ComparisonOutcome {
    match (first.cost(), second.cost()) {
        (Some(a), Some(b)) if (a - b).abs() <= epsilon => ComparisonOutcome::Tie,
        (Some(a), Some(b)) if a < b => ComparisonOutcome::FirstBetter,
        (Some(_), Some(_)) => ComparisonOutcome::SecondBetter,
        (Some(_), None) => ComparisonOutcome::OnlyFirstFound,
        (None, Some(_)) => ComparisonOutcome::OnlySecondFound,
        (None, None) => ComparisonOutcome::NeitherFound,
    }
}

/// Both strategies run on the same start and goal, and how they rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyComparison {
    pub astar: SearchResult,
    pub greedy: SearchResult,
    /// A* is the first result, Greedy the second.
    pub outcome: ComparisonOutcome,
    /// Unit of both costs, taken from the searched graph.
    pub unit: DistanceUnit,
    #[serde(skip)]
    config: RouterConfig,
}

/// Run A* then Greedy Best-First Search and rank the results.
///
/// Costs are ranked at `config.display_precision`: two costs that
/// round to the same value are a tie, as are costs within
/// `config.tie_epsilon`.
///
/// # Errors
/// The input errors of [`search`], raised before either search runs.
pub fn compare_strategies(
    graph: &Graph,
    coordinates: &CoordinateStore,
    start: &str,
    goal: &str,
    config: &RouterConfig,
) -> Result<StrategyComparison> {
    info!("Comparing A* and Greedy from {} to {}", start, goal);
    let astar = search(graph, coordinates, start, goal, Algorithm::AStar)?;
    let greedy = search(graph, coordinates, start, goal, Algorithm::Greedy)?;
    let outcome = rank(&astar, &greedy, config);
    info!("Comparison outcome: {:?}", outcome);

    Ok(StrategyComparison {
        astar,
        greedy,
        outcome,
        unit: graph.unit(),
        config: config.clone(),
    })
}

/// [`compare_paths`], except that costs equal at the display precision
/// are a tie.
fn rank(
    first: &SearchResult,
    second: &SearchResult,
    config: &RouterConfig,
) -> ComparisonOutcome {
    let decimals = config.display_precision;
    match (compare_paths(first, second, config.tie_epsilon), first.cost(), second.cost()) {
        (ComparisonOutcome::FirstBetter | ComparisonOutcome::SecondBetter, Some(a), Some(b))
            if round_cost(a, decimals) == round_cost(b, decimals) =>
        {
            ComparisonOutcome::Tie
        }
        (outcome, _, _) => outcome,
    }
}

impl StrategyComparison {
    fn distance(&self, cost: f64) -> String {
        let precision = self.config.display_precision.min(MAX_COST_DECIMALS);
        format!(
            "{:.*} {}",
            precision as usize,
            round_cost(cost, precision),
            self.unit.symbol()
        )
    }
}

impl fmt::Display for StrategyComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (algorithm, result) in [
            (Algorithm::AStar, &self.astar),
            (Algorithm::Greedy, &self.greedy),
        ] {
            writeln!(f, "{} Search:", algorithm)?;
            match result {
                SearchResult::Found { path, cost } => {
                    writeln!(f, " Path: {}", path)?;
                    writeln!(f, " Distance: {}", self.distance(*cost))?;
                }
                SearchResult::NotFound => writeln!(f, " No path found.")?,
            }
        }

        let (astar, greedy) = (
            self.astar.cost().unwrap_or_default(),
            self.greedy.cost().unwrap_or_default(),
        );
        match self.outcome {
            ComparisonOutcome::FirstBetter => write!(
                f,
                "A* found a shorter path ({}) than Greedy ({}). A* is better.",
                self.distance(astar),
                self.distance(greedy)
            ),
            ComparisonOutcome::SecondBetter => write!(
                f,
                "Greedy found a shorter path ({}) than A* ({}). Greedy is better.",
                self.distance(greedy),
                self.distance(astar)
            ),
            ComparisonOutcome::Tie => write!(f, "Both algorithms found equally optimal paths."),
            ComparisonOutcome::OnlyFirstFound => {
                write!(f, "Only A* found a valid path. A* is better.")
            }
            ComparisonOutcome::OnlySecondFound => {
                write!(f, "Only Greedy found a valid path. Greedy is better.")
            }
            ComparisonOutcome::NeitherFound => {
                write!(f, "No valid path found by either algorithm.")
            }
        }
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod evaluator_tests {
    use super::*;
    use crate::{graph::build_graph, location::Location, path::Path, utils::graph::Adjacency};

    fn found(names: &[&str], cost: f64) -> SearchResult {
        SearchResult::Found {
            path: Path::new(names.iter().map(|name| name.to_string()).collect()).unwrap(),
            cost,
        }
    }

    /// A line of three locations where only A -> B -> C is connected.
    fn line() -> (CoordinateStore, Graph) {
        let coordinates: CoordinateStore = [
            ("A", Location::new(0.0, 0.0)),
            ("B", Location::new(0.0, 1.0)),
            ("C", Location::new(0.0, 2.0)),
        ]
        .into_iter()
        .collect();
        let adjacency: Adjacency = [
            ("A".to_string(), vec!["B".to_string()]),
            ("B".to_string(), vec!["C".to_string()]),
        ]
        .into_iter()
        .collect();
        let graph = build_graph(&coordinates, Some(&adjacency), DistanceUnit::Kilometers).unwrap();
        (coordinates, graph)
    }

    #[test]
    fn test_path_cost_sums_edges() {
        let (_, graph) = line();

        let expected = graph.weight("A", "B").unwrap() + graph.weight("B", "C").unwrap();
        assert_eq!(path_cost(&["A", "B", "C"], &graph), Ok(expected));
        assert_eq!(path_cost(&["B"], &graph), Ok(0.0));
    }

    #[test]
    fn test_path_cost_disconnected() {
        let (_, graph) = line();

        assert_eq!(
            path_cost(&["A", "C"], &graph),
            Err(Error::DisconnectedPath {
                from: "A".to_string(),
                to: "C".to_string()
            })
        );
        // Edges are directed.
        assert!(matches!(
            path_cost(&["B", "A"], &graph),
            Err(Error::DisconnectedPath { .. })
        ));
    }

    #[test]
    fn test_path_cost_bad_input() {
        let (_, graph) = line();

        let empty: [&str; 0] = [];
        assert_eq!(path_cost(&empty, &graph), Err(Error::EmptyPath));
        assert_eq!(
            path_cost(&["A", "Q"], &graph),
            Err(Error::UnknownLocation {
                name: "Q".to_string()
            })
        );
        assert_eq!(
            path_cost(&["Q"], &graph),
            Err(Error::UnknownLocation {
                name: "Q".to_string()
            })
        );
    }

    #[test]
    fn test_path_cost_agrees_with_search() {
        let (coordinates, graph) = line();

        let result = search(&graph, &coordinates, "A", "C", Algorithm::Greedy).unwrap();
        let path = result.path().unwrap();
        assert_eq!(path_cost(path.vertices(), &graph).ok(), result.cost());
    }

    #[test]
    fn test_compare_paths_all_outcomes() {
        let short = found(&["A", "C"], 10.0);
        let long = found(&["A", "B", "C"], 12.0);
        let nearly_short = found(&["A", "D", "C"], 10.0 + 1e-9);

        assert_eq!(
            compare_paths(&short, &long, 1e-6),
            ComparisonOutcome::FirstBetter
        );
        assert_eq!(
            compare_paths(&long, &short, 1e-6),
            ComparisonOutcome::SecondBetter
        );
        assert_eq!(
            compare_paths(&short, &nearly_short, 1e-6),
            ComparisonOutcome::Tie
        );
        assert_eq!(
            compare_paths(&short, &SearchResult::NotFound, 1e-6),
            ComparisonOutcome::OnlyFirstFound
        );
        assert_eq!(
            compare_paths(&SearchResult::NotFound, &long, 1e-6),
            ComparisonOutcome::OnlySecondFound
        );
        assert_eq!(
            compare_paths(&SearchResult::NotFound, &SearchResult::NotFound, 1e-6),
            ComparisonOutcome::NeitherFound
        );
    }

    #[test]
    fn test_compare_strategies_tie_on_a_line() {
        let (coordinates, graph) = line();

        let comparison =
            compare_strategies(&graph, &coordinates, "A", "C", &RouterConfig::default()).unwrap();
        assert_eq!(comparison.outcome, ComparisonOutcome::Tie);

        let report = comparison.to_string();
        assert!(report.starts_with("A* Search:\n Path: A → B → C\n Distance: "));
        assert!(report.contains("Greedy Search:"));
        assert!(report.ends_with("Both algorithms found equally optimal paths."));
    }

    #[test]
    fn test_compare_strategies_neither_found() {
        let (coordinates, graph) = line();

        let comparison =
            compare_strategies(&graph, &coordinates, "C", "A", &RouterConfig::default()).unwrap();
        assert_eq!(comparison.outcome, ComparisonOutcome::NeitherFound);
        assert!(comparison.to_string().contains(" No path found."));
    }

    #[test]
    fn test_compare_strategies_unknown_location() {
        let (coordinates, graph) = line();

        let result = compare_strategies(&graph, &coordinates, "A", "Z", &RouterConfig::default());
        assert!(matches!(result, Err(Error::UnknownLocation { .. })));
    }

    /// Greedy commits to the spur A(3,8) and A* takes B(0,4).
    #[test]
    fn test_compare_strategies_astar_better_report() {
        let coordinates: CoordinateStore = [
            ("S", Location::new(0.0, 0.0)),
            ("A", Location::new(3.0, 8.0)),
            ("B", Location::new(0.0, 4.0)),
            ("G", Location::new(0.0, 10.0)),
        ]
        .into_iter()
        .collect();
        let adjacency: Adjacency = [
            ("S", vec!["A", "B"]),
            ("A", vec!["G"]),
            ("B", vec!["G"]),
        ]
        .into_iter()
        .map(|(from, to)| {
            (
                from.to_string(),
                to.into_iter().map(str::to_string).collect(),
            )
        })
        .collect();
        let graph = build_graph(&coordinates, Some(&adjacency), DistanceUnit::Kilometers).unwrap();

        let comparison =
            compare_strategies(&graph, &coordinates, "S", "G", &RouterConfig::default()).unwrap();
        assert_eq!(comparison.outcome, ComparisonOutcome::FirstBetter);

        let astar = format!("{:.2}", comparison.astar.cost().unwrap());
        let greedy = format!("{:.2}", comparison.greedy.cost().unwrap());
        let verdict = format!(
            "A* found a shorter path ({astar} km) than Greedy ({greedy} km). A* is better."
        );
        assert!(comparison.to_string().ends_with(&verdict));
    }

    /// 100.001 and 100.003 both print as 100.00 at two decimals.
    #[test]
    fn test_costs_equal_at_display_precision_tie() {
        let astar = found(&["A", "C"], 100.001);
        let greedy = found(&["A", "B", "C"], 100.003);
        let config = RouterConfig::default();

        assert_eq!(
            compare_paths(&astar, &greedy, config.tie_epsilon),
            ComparisonOutcome::FirstBetter
        );
        assert_eq!(rank(&astar, &greedy, &config), ComparisonOutcome::Tie);

        let comparison = StrategyComparison {
            outcome: rank(&astar, &greedy, &config),
            astar,
            greedy,
            unit: DistanceUnit::Kilometers,
            config,
        };
        let report = comparison.to_string();
        assert!(report.contains(" Distance: 100.00 km\n"));
        assert!(report.ends_with("Both algorithms found equally optimal paths."));
    }

    #[test]
    fn test_finer_precision_separates_costs() {
        let astar = found(&["A", "C"], 100.001);
        let greedy = found(&["A", "B", "C"], 100.003);
        let config = RouterConfig {
            display_precision: 3,
            ..RouterConfig::default()
        };

        let comparison = StrategyComparison {
            outcome: rank(&astar, &greedy, &config),
            astar,
            greedy,
            unit: DistanceUnit::Kilometers,
            config,
        };
        assert_eq!(comparison.outcome, ComparisonOutcome::FirstBetter);
        assert!(comparison.to_string().ends_with(
            "A* found a shorter path (100.001 km) than Greedy (100.003 km). A* is better."
        ));
    }

    #[test]
    fn test_whole_costs_keep_their_decimals() {
        let astar = found(&["A", "C"], 100.0);
        let comparison = StrategyComparison {
            outcome: ComparisonOutcome::OnlyFirstFound,
            astar,
            greedy: SearchResult::NotFound,
            unit: DistanceUnit::Kilometers,
            config: RouterConfig::default(),
        };

        assert!(comparison.to_string().contains(" Distance: 100.00 km\n"));
    }

    /// The report uses the unit the graph was built with.
    #[test]
    fn test_report_unit_follows_graph() {
        let (coordinates, _) = line();
        let graph = build_graph(&coordinates, None, DistanceUnit::Meters).unwrap();

        let comparison =
            compare_strategies(&graph, &coordinates, "A", "C", &RouterConfig::default()).unwrap();
        assert_eq!(comparison.unit, DistanceUnit::Meters);

        let cost = format!("{:.2}", comparison.astar.cost().unwrap());
        assert!(comparison.to_string().contains(&format!(" Distance: {cost} m\n")));
        assert!(!comparison.to_string().contains(" km"));
    }

    #[test]
    fn test_huge_display_precision_still_prints_numbers() {
        let (coordinates, graph) = line();
        let config = RouterConfig {
            display_precision: u32::MAX,
            ..RouterConfig::default()
        };

        let report = compare_strategies(&graph, &coordinates, "A", "C", &config)
            .unwrap()
            .to_string();
        assert!(!report.contains("NaN"));
        assert!(report.ends_with("Both algorithms found equally optimal paths."));
    }
}
