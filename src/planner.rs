//! Shortest paths on a navigation graph
//!
//! `PathPlanner` validates the endpoints, runs the configured strategy over
//! the graph and turns the explored tree into a `PathResult`. An unreachable
//! destination is a normal outcome (`PathResult::Unreachable`), an off-grid or
//! blocked endpoint is an error.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::collections::FxIndexSet;
use crate::errors::{InvalidReason, PathPlannerError};
use crate::geometry::Coordinate;
use crate::graph_algos::{SearchTree, a_star::AStar, dijkstra::dijkstra_tree};
use crate::nav_graph::NavGraph;
use crate::store::SpatialMap;


/// Search strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Dijkstra, no knowledge of where the goal is
    #[default]
    Uniform,
    /// A* guided by Manhattan distance to the goal
    Heuristic,
}


/// Planner configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub strategy: Strategy,
}

impl PlannerConfig {

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}


/// Walkable route between two cells
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    /// Source first, destination last, consecutive cells are grid neighbors
    pub coordinates: Vec<Coordinate>,
    /// Total edge cost (number of steps on the unit grid)
    pub cost: u32,
}

impl Path {

    pub fn source(&self) -> Option<Coordinate> {
        self.coordinates.first().copied()
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.coordinates.last().copied()
    }

    /// Number of cells on the path, one more than the number of steps
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}


/// Outcome of a search with valid endpoints
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathResult {
    Found(Path),
    /// Both endpoints are walkable but no walkable route connects them
    Unreachable,
}

impl PathResult {

    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::Unreachable => None,
        }
    }

    pub fn cost(&self) -> Option<u32> {
        self.path().map(|p| p.cost)
    }

    /// Path cells, empty when unreachable
    pub fn into_coordinates(self) -> Vec<Coordinate> {
        match self {
            PathResult::Found(path) => path.coordinates,
            PathResult::Unreachable => Vec::new(),
        }
    }

    fn from_tree(tree: &SearchTree<Coordinate, u32>) -> Self {
        match (tree.path(), tree.goal_cost()) {
            (Some(coordinates), Some(cost)) => PathResult::Found(Path { coordinates, cost }),
            _ => PathResult::Unreachable,
        }
    }
}


/// What a search looked at, for diagnostics
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTrace {
    pub strategy: Strategy,
    /// Cells in the order they were expanded
    pub expanded: Vec<Coordinate>,
    /// Cells that reached the frontier, expanded or not
    pub discovered: usize,
}


/// Runs searches over one graph
/// Holds no mutable state, so one planner can serve any number of calls
#[derive(Clone, Debug)]
pub struct PathPlanner<'g> {
    graph: &'g NavGraph,
    config: PlannerConfig,
}

impl<'g> PathPlanner<'g> {

    pub fn new(graph: &'g NavGraph, config: PlannerConfig) -> Self {
        Self { graph, config }
    }

    pub fn with_defaults(graph: &'g NavGraph) -> Self {
        Self::new(graph, PlannerConfig::default())
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Shortest path from `source` to `destination`
    pub fn plan(&self, source: Coordinate, destination: Coordinate) -> Result<PathResult, PathPlannerError> {
        let tree = self.search(source, destination)?;
        Ok(self.finish(&tree, destination))
    }

    /// Same as `plan`, also returning the expansion order
    pub fn plan_traced(&self, source: Coordinate, destination: Coordinate) -> Result<(PathResult, SearchTrace), PathPlannerError> {
        let tree = self.search(source, destination)?;
        let trace = SearchTrace {
            strategy: self.config.strategy,
            expanded: tree.expanded().copied().collect(),
            discovered: tree.discovered_count(),
        };
        Ok((self.finish(&tree, destination), trace))
    }

    /// Shortest path to a cell from which `shelf` can be reached
    ///
    /// Items sit on shelving, which is blocked. The destination is the shelf
    /// itself when it is walkable, otherwise the closest walkable cell next to
    /// it. A shelf boxed in on all four sides is unreachable.
    pub fn plan_to_adjacent(&self, source: Coordinate, shelf: Coordinate) -> Result<PathResult, PathPlannerError> {
        self.graph.check_endpoint(source)?;
        if !self.graph.contains(&shelf) {
            return Err(PathPlannerError::InvalidCoordinate { coordinate: shelf, reason: InvalidReason::OutOfRange });
        }

        let shelf_walkable = self.graph.is_walkable(&shelf);
        let goals: FxIndexSet<Coordinate> = if shelf_walkable {
            std::iter::once(shelf).collect()
        } else {
            shelf.neighbors_4().into_iter().filter(|n| self.graph.is_walkable(n)).collect()
        };
        if goals.is_empty() {
            debug!("no walkable cell next to shelf {}", shelf);
            return Ok(PathResult::Unreachable);
        }

        let neighbors = |c: &Coordinate| self.graph.successors(*c);
        let goal = |c: &Coordinate| goals.contains(c);
        let tree = match self.config.strategy {
            Strategy::Uniform => dijkstra_tree(source, neighbors, goal),
            Strategy::Heuristic => {
                // goals are at least manhattan - 1 away when the shelf itself is blocked
                let slack = if shelf_walkable { 0 } else { 1 };
                let heuristic = |c: &Coordinate| c.manhattan(&shelf).saturating_sub(slack);
                AStar{}.search_tree(source, neighbors, heuristic, goal)
            }
        };
        Ok(self.finish(&tree, shelf))
    }

    fn search(&self, source: Coordinate, destination: Coordinate) -> Result<SearchTree<Coordinate, u32>, PathPlannerError> {
        self.graph.check_endpoint(source)?;
        self.graph.check_endpoint(destination)?;
        trace!("{:?} search {} -> {}", self.config.strategy, source, destination);

        let neighbors = |c: &Coordinate| self.graph.successors(*c);
        let goal = |c: &Coordinate| *c == destination;
        let tree = match self.config.strategy {
            Strategy::Uniform => dijkstra_tree(source, neighbors, goal),
            Strategy::Heuristic => {
                AStar{}.search_tree(source, neighbors, |c: &Coordinate| c.manhattan(&destination), goal)
            }
        };
        Ok(tree)
    }

    fn finish(&self, tree: &SearchTree<Coordinate, u32>, target: Coordinate) -> PathResult {
        let result = PathResult::from_tree(tree);
        if !result.is_found() {
            debug!(
                "{:?} search found no path to {} after expanding {} cells",
                self.config.strategy,
                target,
                tree.expanded_count()
            );
        }
        result
    }
}


/// Uniform-cost (Dijkstra) shortest path
pub fn dijkstra_path(graph: &NavGraph, source: Coordinate, destination: Coordinate) -> Result<PathResult, PathPlannerError> {
    PathPlanner::new(graph, PlannerConfig::default().with_strategy(Strategy::Uniform)).plan(source, destination)
}

/// Heuristic (A*) shortest path
pub fn a_star_path(graph: &NavGraph, source: Coordinate, destination: Coordinate) -> Result<PathResult, PathPlannerError> {
    PathPlanner::new(graph, PlannerConfig::default().with_strategy(Strategy::Heuristic)).plan(source, destination)
}

/// Build the graph for `map` and search it with `strategy`
/// Callers that plan repeatedly on one map should build a `NavGraph` once and reuse it
pub fn compute_shortest_path(
    map: &SpatialMap,
    source: Coordinate,
    destination: Coordinate,
    strategy: Strategy,
) -> crate::errors::Result<PathResult> {
    let graph = NavGraph::from_map(map)?;
    let planner = PathPlanner::new(&graph, PlannerConfig::default().with_strategy(strategy));
    Ok(planner.plan(source, destination)?)
}
