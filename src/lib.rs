//! In-store navigation
//!
//! Turns a store floor plan (aisles and checkout lanes as obstacles, doors as
//! entrances) into a 4-connected grid graph and finds shortest walking paths
//! on it with Dijkstra or A*.
//!
//! ```
//! use aislenav::{compute_shortest_path, Coordinate, Region, SpatialMap, Strategy};
//!
//! let map = SpatialMap::new(5, 5).with_obstacle(Region::new(1, 3, 1, 1));
//! let result = compute_shortest_path(&map, Coordinate::new(0, 0), Coordinate::new(4, 0), Strategy::Heuristic)?;
//! assert_eq!(result.cost(), Some(4));
//! # Ok::<(), aislenav::NavError>(())
//! ```

mod collections;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod nav_graph;
pub mod planner;
pub mod store;

pub use errors::{InvalidReason, NavError, PathPlannerError, RegionKind, ValidationError};
pub use geometry::{Coordinate, Region};
pub use nav_graph::{GraphBuilder, GraphSlot, NavGraph, NavNode, STEP_COST};
pub use planner::{
    Path, PathPlanner, PathResult, PlannerConfig, SearchTrace, Strategy,
    a_star_path, compute_shortest_path, dijkstra_path,
};
pub use store::{Aisle, CheckoutLane, Door, SpatialMap, StoreMap};
