use std::collections::{HashMap, HashSet};

use aislenav::{
    Coordinate, NavGraph, Path, PathPlanner, PathResult, PlannerConfig, Region, SpatialMap, Strategy,
    a_star_path, dijkstra_path,
};
use rand::{Rng, SeedableRng, rngs::StdRng};


fn random_region(rng: &mut StdRng, width: i32, length: i32, max_side: i32) -> Region {
    let x_start = rng.random_range(0..width);
    let y_start = rng.random_range(0..length);
    let x_end = (x_start + rng.random_range(0..max_side)).min(width - 1);
    let y_end = (y_start + rng.random_range(0..max_side)).min(length - 1);
    Region::new(x_start, x_end, y_start, y_end)
}

fn random_map(rng: &mut StdRng) -> SpatialMap {
    let width = rng.random_range(2..16);
    let length = rng.random_range(2..16);
    let mut map = SpatialMap::new(width, length);
    for _ in 0..rng.random_range(0..8) {
        map = map.with_obstacle(random_region(rng, width, length, 6));
    }
    for _ in 0..rng.random_range(0..3) {
        map = map.with_entrance(random_region(rng, width, length, 2));
    }
    map
}

fn walkable_cells(graph: &NavGraph) -> Vec<Coordinate> {
    graph.nodes().filter(|n| n.is_walkable()).map(|n| n.coordinate()).collect()
}

/// Consecutive cells adjacent, every cell walkable, no cell visited twice, cost matches length
fn assert_valid_path(graph: &NavGraph, path: &Path, source: Coordinate, destination: Coordinate) {
    assert_eq!(path.source(), Some(source));
    assert_eq!(path.destination(), Some(destination));
    assert_eq!(path.cost as usize, path.len() - 1);

    for pair in path.coordinates.windows(2) {
        assert!(pair[0].is_adjacent(&pair[1]), "{} -> {} is not a unit step", pair[0], pair[1]);
    }
    for c in &path.coordinates {
        assert!(graph.is_walkable(c), "{} is blocked", c);
    }
    let unique: HashSet<_> = path.coordinates.iter().collect();
    assert_eq!(unique.len(), path.len(), "path repeats a cell");
}


#[test]
fn open_floor_cost_is_manhattan_distance() {
    let graph = NavGraph::from_map(&SpatialMap::new(9, 6)).unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..50 {
        let source = Coordinate::new(rng.random_range(0..9), rng.random_range(0..6));
        let destination = Coordinate::new(rng.random_range(0..9), rng.random_range(0..6));
        let expected = source.manhattan(&destination);

        let uniform = dijkstra_path(&graph, source, destination).unwrap();
        let heuristic = a_star_path(&graph, source, destination).unwrap();
        assert_eq!(uniform.cost(), Some(expected));
        assert_eq!(heuristic.cost(), Some(expected));
    }
}

#[test]
fn strategies_agree_on_random_maps() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..300 {
        let map = random_map(&mut rng);
        let graph = NavGraph::from_map(&map).unwrap();
        let cells = walkable_cells(&graph);
        if cells.is_empty() {
            continue;
        }
        let source = cells[rng.random_range(0..cells.len())];
        let destination = cells[rng.random_range(0..cells.len())];

        let uniform = dijkstra_path(&graph, source, destination).unwrap();
        let heuristic = a_star_path(&graph, source, destination).unwrap();
        assert_eq!(uniform.cost(), heuristic.cost(), "{:?} {} -> {}", map, source, destination);

        // costs also match an exhaustive sweep from the source
        let distances: HashMap<_, _> = graph.distances_from(source).unwrap().into_iter().collect();
        assert_eq!(uniform.cost(), distances.get(&destination).copied());

        match (&uniform, &heuristic) {
            (PathResult::Found(a), PathResult::Found(b)) => {
                assert_valid_path(&graph, a, source, destination);
                assert_valid_path(&graph, b, source, destination);
            }
            (PathResult::Unreachable, PathResult::Unreachable) => {}
            _ => panic!("strategies disagree on reachability"),
        }
    }
}

#[test]
fn repeated_searches_return_identical_paths() {
    let mut rng = StdRng::seed_from_u64(5);
    let map = SpatialMap::new(12, 12)
        .with_obstacle(Region::new(2, 2, 0, 8))
        .with_obstacle(Region::new(5, 5, 3, 11))
        .with_obstacle(Region::new(8, 8, 0, 8))
        .with_entrance(Region::new(5, 5, 6, 6));
    let graph = NavGraph::from_map(&map).unwrap();
    let cells = walkable_cells(&graph);

    for strategy in [Strategy::Uniform, Strategy::Heuristic] {
        let planner = PathPlanner::new(&graph, PlannerConfig::default().with_strategy(strategy));
        for _ in 0..20 {
            let source = cells[rng.random_range(0..cells.len())];
            let destination = cells[rng.random_range(0..cells.len())];
            let first = planner.plan(source, destination).unwrap();
            for _ in 0..3 {
                assert_eq!(planner.plan(source, destination).unwrap(), first);
            }
        }
    }
}

#[test]
fn enclosed_destination_is_unreachable() {
    // ring of obstacles around (3,3)
    let map = SpatialMap::new(7, 7)
        .with_obstacle(Region::new(2, 4, 2, 2))
        .with_obstacle(Region::new(2, 4, 4, 4))
        .with_obstacle(Region::new(2, 2, 3, 3))
        .with_obstacle(Region::new(4, 4, 3, 3));
    let graph = NavGraph::from_map(&map).unwrap();

    assert_eq!(dijkstra_path(&graph, Coordinate::new(0, 0), Coordinate::new(3, 3)).unwrap(), PathResult::Unreachable);
    assert_eq!(a_star_path(&graph, Coordinate::new(0, 0), Coordinate::new(3, 3)).unwrap(), PathResult::Unreachable);
    // and the other way round
    assert_eq!(a_star_path(&graph, Coordinate::new(3, 3), Coordinate::new(6, 6)).unwrap(), PathResult::Unreachable);
}

#[test]
fn door_in_aisle_opens_a_route() {
    // aisle splits the floor, the door inside it is the only way through
    let walled = SpatialMap::new(6, 4).with_obstacle(Region::new(0, 5, 1, 2));
    let with_door = walled.clone().with_entrance(Region::new(3, 3, 1, 2));

    let source = Coordinate::new(0, 0);
    let destination = Coordinate::new(0, 3);

    let graph = NavGraph::from_map(&walled).unwrap();
    assert_eq!(dijkstra_path(&graph, source, destination).unwrap(), PathResult::Unreachable);

    let graph = NavGraph::from_map(&with_door).unwrap();
    let result = a_star_path(&graph, source, destination).unwrap();
    let path = result.path().unwrap();
    assert_eq!(path.cost, 3 + 3 + 3);
    assert_valid_path(&graph, path, source, destination);
}
