//! Grid navigation graph
//!
//! One node per cell of the map, walkable or blocked, with edges only between
//! walkable 4-neighbors. Built once per map version and read-only afterwards,
//! so a single instance can serve any number of concurrent searches.

mod builder;
mod slot;

pub use builder::GraphBuilder;
pub use slot::GraphSlot;

use crate::collections::FxIndexMap;
use crate::errors::{InvalidReason, PathPlannerError, ValidationError};
use crate::geometry::Coordinate;
use crate::graph_algos::dijkstra::dijkstra_nodes_full;
use crate::store::SpatialMap;


/// Cost of one step between neighboring cells
pub const STEP_COST: u32 = 1;


/// Single grid cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavNode {
    coordinate: Coordinate,
    walkable: bool,
    neighbors: Vec<Coordinate>, // walkable in-range 4-neighbors, empty when blocked
}

impl NavNode {

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn is_walkable(&self) -> bool {
        self.walkable
    }

    pub fn neighbors(&self) -> &[Coordinate] {
        &self.neighbors
    }
}


/// Navigation graph over a width x length grid
#[derive(Clone, Debug)]
pub struct NavGraph {
    width: i32,
    length: i32,
    // row-major insertion: index = y * width + x
    nodes: FxIndexMap<Coordinate, NavNode>,
}

impl NavGraph {

    /// Validate the map and build its graph
    pub fn from_map(map: &SpatialMap) -> Result<Self, ValidationError> {
        GraphBuilder::new(map).build()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    /// Number of nodes, always width * length
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Coordinate lies on the grid
    pub fn contains(&self, c: &Coordinate) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.length
    }

    pub fn node(&self, c: &Coordinate) -> Option<&NavNode> {
        if !self.contains(c) {
            return None;
        }
        self.nodes.get_index((c.y * self.width + c.x) as usize).map(|(_, node)| node)
    }

    pub fn is_walkable(&self, c: &Coordinate) -> bool {
        self.node(c).is_some_and(NavNode::is_walkable)
    }

    /// Walkable neighbors, empty for blocked or off-grid cells
    pub fn neighbors(&self, c: &Coordinate) -> &[Coordinate] {
        self.node(c).map(NavNode::neighbors).unwrap_or(&[])
    }

    /// Neighbors with their edge cost, the shape the search algorithms consume
    pub fn successors(&self, c: Coordinate) -> impl Iterator<Item = (Coordinate, u32)> + '_ {
        self.neighbors(&c).iter().map(|&n| (n, STEP_COST))
    }

    /// All nodes in row-major order
    pub fn nodes(&self) -> impl Iterator<Item = &NavNode> {
        self.nodes.values()
    }

    pub fn walkable_count(&self) -> usize {
        self.nodes().filter(|n| n.is_walkable()).count()
    }

    /// Reject endpoints that are off the grid or blocked
    pub fn check_endpoint(&self, c: Coordinate) -> Result<(), PathPlannerError> {
        let reason = match self.node(&c) {
            None => InvalidReason::OutOfRange,
            Some(node) if !node.is_walkable() => InvalidReason::Blocked,
            Some(_) => return Ok(()),
        };
        Err(PathPlannerError::InvalidCoordinate { coordinate: c, reason })
    }

    /// Step distance from `source` to every cell reachable from it, in discovery order
    pub fn distances_from(&self, source: Coordinate) -> Result<Vec<(Coordinate, u32)>, PathPlannerError> {
        self.check_endpoint(source)?;
        let tree = dijkstra_nodes_full(source, |c: &Coordinate| self.successors(*c));
        Ok(tree.costs().map(|(c, cost)| (*c, cost)).collect())
    }

    pub(crate) fn from_nodes(width: i32, length: i32, nodes: FxIndexMap<Coordinate, NavNode>) -> Self {
        debug_assert_eq!(nodes.len(), (width as usize) * (length as usize));
        Self { width, length, nodes }
    }
}
