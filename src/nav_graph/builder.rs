use log::debug;

use crate::collections::FxIndexMap;
use crate::errors::ValidationError;
use crate::geometry::Coordinate;
use crate::store::SpatialMap;
use super::{NavGraph, NavNode};


/// Turns a store layout into a navigation graph
///
/// Cells start walkable. Every obstacle region blocks the cells it covers,
/// overlapping obstacles simply stay blocked. Entrance regions are applied
/// last and force their cells walkable again, so an aisle drawn over a door
/// never seals it. Edges connect walkable cells to their walkable
/// 4-neighbors.
pub struct GraphBuilder<'a> {
    map: &'a SpatialMap,
}

impl<'a> GraphBuilder<'a> {

    pub fn new(map: &'a SpatialMap) -> Self {
        Self { map }
    }

    /// Validate the map, then build the graph
    /// A map that fails validation produces no graph at all
    pub fn build(&self) -> Result<NavGraph, ValidationError> {
        self.map.validate()?;

        let width = self.map.width;
        let length = self.map.length;
        let open_cells = self.walkability();

        let is_walkable = |c: &Coordinate| {
            c.x >= 0 && c.y >= 0 && c.x < width && c.y < length && open_cells[cell_index(width, c)]
        };

        let mut nodes: FxIndexMap<Coordinate, NavNode> = FxIndexMap::default();
        nodes.reserve((width as usize) * (length as usize));

        for y in 0..length {
            for x in 0..width {
                let coordinate = Coordinate::new(x, y);
                let walkable = is_walkable(&coordinate);
                let neighbors = if walkable {
                    coordinate.neighbors_4().into_iter().filter(|n| is_walkable(n)).collect()
                } else {
                    Vec::new()
                };
                nodes.insert(coordinate, NavNode { coordinate, walkable, neighbors });
            }
        }

        let graph = NavGraph::from_nodes(width, length, nodes);
        debug!(
            "built nav graph {}x{}: {} walkable of {} cells ({} obstacles, {} entrances)",
            width,
            length,
            graph.walkable_count(),
            graph.len(),
            self.map.obstacles.len(),
            self.map.entrances.len()
        );
        Ok(graph)
    }

    /// Row-major walkable flags after obstacles and entrances are applied
    fn walkability(&self) -> Vec<bool> {
        let width = self.map.width;
        let mut walkable = vec![true; (width as usize) * (self.map.length as usize)];

        for region in &self.map.obstacles {
            for c in region.cells() {
                walkable[cell_index(width, &c)] = false;
            }
        }

        // entrances override obstacles
        for region in &self.map.entrances {
            for c in region.cells() {
                walkable[cell_index(width, &c)] = true;
            }
        }

        walkable
    }
}


/// Row-major index of an in-range cell
fn cell_index(width: i32, c: &Coordinate) -> usize {
    (c.y * width + c.x) as usize
}
