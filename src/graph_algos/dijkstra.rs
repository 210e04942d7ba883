use super::{Frontier, SearchTree};

use std::{hash::Hash, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use log::trace;




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
/// Returns the path from start to goal and its total cost, None if no node meets the goal
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let tree = build_dijkstra_graph(start, neighbors, goal);

    let path = tree.path()?;
    let cost = tree.goal_cost()?;
    Some((path, cost))
}


/// Return the explored tree up to the goal node
/// Nodes with lower cost than the goal node will be included
pub fn dijkstra_tree<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> SearchTree<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool,
    {

    build_dijkstra_graph(start, neighbors, goal)
}

/// Returns the full tree, includes all (reachable) nodes and costs
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> SearchTree<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    {

    build_dijkstra_graph(start, neighbors, |_| false)
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns the tree of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> SearchTree<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Dijkstra's algorithm always expands the least costly node first
    // Priority is the cost from the starting node, ties go to the node pushed first
    let mut frontier: Frontier<C> = Frontier::new();

    // Discovered nodes - the start node has no parent (NO_PARENT)
    let mut tree = SearchTree::rooted_at(start);
    frontier.push(0, Zero::zero(), Zero::zero());

    // Loop over each node to visit, removing the smallest node
    while let Some((index, cost)) = frontier.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = tree.nodes.get_index(index) else {
            continue;
        };

        // If cost of the entry is higher than the best cost, skip it
        // This implies we've already expanded this node through a better path
        if cost > c {
            continue;
        }
        tree.expanded.push(index);

        // Check if we've reached the goal
        if goal_fn(node) {
            trace!("dijkstra: reached {:?} at cost {:?} after {} expansions", node, c, tree.expanded.len());
            tree.goal_index = Some(index);
            return tree;
        }

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(node) {

            // new cost to reach this node = edge cost + node cost
            let new_cost = edge_cost + c;

            // Check if we've found a better path to this neighbor
            let neighbor_index;

            match tree.nodes.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    neighbor_index = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // We've found a better path to this neighbor
                        neighbor_index = e.index();
                        e.insert((index, new_cost));
                    } else {
                        // The existing path is better, do nothing
                        continue;
                    }
                }
            }

            // Only add to the queue if we've found a better path
            frontier.push(neighbor_index, new_cost, new_cost);
        }
    }

    trace!("dijkstra: frontier exhausted after {} expansions", tree.expanded.len());
    tree
}
