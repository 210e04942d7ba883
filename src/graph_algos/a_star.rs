use super::{Frontier, SearchTree};

use std::{
    hash::Hash,
    fmt::Debug,
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use log::trace;



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar {}

impl AStar{

    /// From start Node, traverse through graph until node meets goal criteria
    /// The heuristic must be admissible (never overestimates the true cost to reach the goal)
    /// for the returned path to be optimal. A consistent heuristic also means every node
    /// is expanded at most once.
    /// Returns the path from start to goal and its total cost, None if no node meets the goal
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Option<(Vec<N>, C)>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> C, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        G: Fn(&N) -> bool, // node qualifier for goal
        {

        let tree = self.search_tree(start, neighbors, heuristic_fn, goal_fn);

        let path = tree.path()?;
        let cost = tree.goal_cost()?;
        Some((path, cost))
    }


    /// Traverses the graph using A* algorithm
    /// Returns the tree of nodes with their smallest costs along with the index of the goal node
    pub fn search_tree<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> SearchTree<N, C>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        H: Fn(&N) -> C, // heuristic function
        G: Fn(&N) -> bool // Returns true if goal is met
    {
        // Open List
        // Nodes that need to be evaluated, implemented as priority queue
        // Sorting is done by f_cost (cost + heuristic), ties go to the node pushed first
        let mut open_list: Frontier<C> = Frontier::new();

        // Closed list - every discovered node with its best cost and parent
        // Avoids re-evaluating nodes, used to find the final path
        let start_h = heuristic_fn(&start);
        let mut closed_list = SearchTree::rooted_at(start);
        open_list.push(0, Zero::zero(), start_h);

        while let Some((index, cost)) = open_list.pop() {

            // fetch current best cost for node
            let Some((node, &(_, c))) = closed_list.nodes.get_index(index) else {
                continue;
            };

            // If cost of the entry is higher than the best cost, skip it
            // This implies we've already found a better path to this node
            if cost > c {
                continue;
            }
            closed_list.expanded.push(index);

            // Check if we've reached the goal
            if goal_fn(node) {
                trace!("a*: reached {:?} at cost {:?} after {} expansions", node, c, closed_list.expanded.len());
                closed_list.goal_index = Some(index);
                return closed_list;
            }

            // loop over neighbors
            for (neighbor, edge_cost) in neighbors(node) {

                // new cost to reach this node = edge cost + node cost
                // This is confirmed cost, not heuristic
                let new_cost = edge_cost + c;

                let neighbor_index: usize;
                // calculate heuristic cost
                let h_cost: C = heuristic_fn(&neighbor);

                match closed_list.nodes.entry(neighbor) {
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
                open_list.push(neighbor_index, new_cost, new_cost + h_cost);
            }
        }

        trace!("a*: open list exhausted after {} expansions", closed_list.expanded.len());
        closed_list
    }
}
