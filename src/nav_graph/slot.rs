use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::errors::ValidationError;
use crate::store::SpatialMap;
use super::NavGraph;


/// Shared handle to the current graph of a map
///
/// Searches take a snapshot with `load` and keep using it even if the map is
/// rebuilt meanwhile. A rebuild constructs the new graph before taking the
/// write lock and only swaps on success, so readers see either the old graph
/// or the new one, never a partial grid.
#[derive(Debug)]
pub struct GraphSlot {
    current: RwLock<Arc<NavGraph>>,
}

impl GraphSlot {

    pub fn new(graph: NavGraph) -> Self {
        Self { current: RwLock::new(Arc::new(graph)) }
    }

    /// Build the first graph for `map`
    pub fn from_map(map: &SpatialMap) -> Result<Self, ValidationError> {
        Ok(Self::new(NavGraph::from_map(map)?))
    }

    /// Snapshot of the current graph
    pub fn load(&self) -> Arc<NavGraph> {
        Arc::clone(&self.current.read())
    }

    /// Swap in a new graph, returning the previous one
    pub fn replace(&self, graph: NavGraph) -> Arc<NavGraph> {
        let next = Arc::new(graph);
        std::mem::replace(&mut *self.current.write(), next)
    }

    /// Rebuild from an edited map
    /// On a validation error the current graph is kept
    pub fn rebuild(&self, map: &SpatialMap) -> Result<Arc<NavGraph>, ValidationError> {
        let graph = NavGraph::from_map(map)?;
        debug!("replacing nav graph with {}x{} rebuild", graph.width(), graph.length());
        Ok(self.replace(graph))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Coordinate, Region};

    #[test]
    fn test_snapshot_survives_rebuild() {
        let slot = GraphSlot::from_map(&SpatialMap::new(3, 3)).unwrap();
        let before = slot.load();

        let edited = SpatialMap::new(3, 3).with_obstacle(Region::new(1, 1, 1, 1));
        let previous = slot.rebuild(&edited).unwrap();

        assert!(Arc::ptr_eq(&before, &previous));
        assert!(before.is_walkable(&Coordinate::new(1, 1)));
        assert!(!slot.load().is_walkable(&Coordinate::new(1, 1)));
    }

    #[test]
    fn test_failed_rebuild_keeps_current_graph() {
        let slot = GraphSlot::from_map(&SpatialMap::new(3, 3)).unwrap();
        let before = slot.load();

        let broken = SpatialMap::new(3, 3).with_obstacle(Region::new(0, 3, 0, 0));
        assert!(slot.rebuild(&broken).is_err());
        assert!(Arc::ptr_eq(&before, &slot.load()));
    }

    #[test]
    fn test_concurrent_loads_during_replace() {
        let slot = GraphSlot::from_map(&SpatialMap::new(4, 4)).unwrap();
        let blocked = SpatialMap::new(4, 4).with_obstacle(Region::new(1, 2, 1, 2));

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..100 {
                        // every snapshot is one of the two complete graphs
                        let graph = slot.load();
                        assert_eq!(graph.len(), 16);
                        assert!(graph.walkable_count() == 16 || graph.walkable_count() == 12);
                    }
                });
            }
            for _ in 0..10 {
                slot.rebuild(&blocked).unwrap();
                slot.replace(NavGraph::from_map(&SpatialMap::new(4, 4)).unwrap());
            }
        });

        assert_eq!(slot.load().walkable_count(), 16);
    }
}
