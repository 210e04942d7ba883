use std::sync::Arc;
use std::thread;

use aislenav::{Coordinate, GraphSlot, NavGraph, PathPlanner, PathResult, PlannerConfig, Region, SpatialMap, Strategy};


fn aisle_map() -> SpatialMap {
    let mut map = SpatialMap::new(30, 20);
    for x in (3..27).step_by(4) {
        map = map.with_obstacle(Region::new(x, x + 1, 2, 17));
    }
    map
}

#[test]
fn one_graph_serves_parallel_searches() {
    let graph = Arc::new(NavGraph::from_map(&aisle_map()).unwrap());
    let source = Coordinate::new(0, 0);
    let destination = Coordinate::new(29, 10);

    let expected = PathPlanner::with_defaults(&graph).plan(source, destination).unwrap();
    assert!(expected.is_found());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                let strategy = if i % 2 == 0 { Strategy::Uniform } else { Strategy::Heuristic };
                let planner = PathPlanner::new(&graph, PlannerConfig::default().with_strategy(strategy));
                (strategy, planner.plan(source, destination).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (strategy, result) = handle.join().unwrap();
        assert_eq!(result.cost(), expected.cost());
        if strategy == Strategy::Uniform {
            assert_eq!(result, expected);
        }
    }
}

#[test]
fn searches_keep_their_snapshot_across_rebuilds() {
    let open = SpatialMap::new(10, 3);
    let walled = SpatialMap::new(10, 3).with_obstacle(Region::new(5, 5, 0, 2));
    let slot = GraphSlot::from_map(&open).unwrap();

    let source = Coordinate::new(0, 1);
    let destination = Coordinate::new(9, 1);

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..50 {
                    let graph = slot.load();
                    let result = PathPlanner::with_defaults(&graph).plan(source, destination).unwrap();
                    // each snapshot is either the open floor or the fully walled one
                    let walled_snapshot = !graph.is_walkable(&Coordinate::new(5, 1));
                    if walled_snapshot {
                        assert_eq!(result, PathResult::Unreachable);
                    } else {
                        assert_eq!(result.cost(), Some(9));
                    }
                }
            });
        }
        s.spawn(|| {
            for i in 0..50 {
                let map = if i % 2 == 0 { &walled } else { &open };
                slot.rebuild(map).unwrap();
            }
        });
    });
}
