use std::hash::Hash;

use num_traits::Zero;

use super::GraphNodeMap;


/// Sentinel parent index of the start node
pub(crate) const NO_PARENT: usize = usize::MAX;


/// Nodes explored by one search call
/// Owns the best known cost and parent of every discovered node, the goal (if reached)
/// and the order nodes were expanded in. Dropped with the call unless the caller keeps it.
#[derive(Debug, Clone)]
pub struct SearchTree<N, C> {
    pub(crate) nodes: GraphNodeMap<N, C>,
    pub(crate) goal_index: Option<usize>,
    pub(crate) expanded: Vec<usize>,
}

impl<N, C> SearchTree<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Copy,
{

    /// Tree holding only the start node at cost zero
    pub(crate) fn rooted_at(start: N) -> Self {
        let mut nodes = GraphNodeMap::default();
        nodes.insert(start, (NO_PARENT, Zero::zero()));
        Self { nodes, goal_index: None, expanded: Vec::new() }
    }

    /// Goal node, if the search reached one
    pub fn goal(&self) -> Option<&N> {
        let index = self.goal_index?;
        self.nodes.get_index(index).map(|(node, _)| node)
    }

    /// Cost of the path to the goal
    pub fn goal_cost(&self) -> Option<C> {
        let index = self.goal_index?;
        self.nodes.get_index(index).map(|(_, &(_, cost))| cost)
    }

    /// Ordered path from start to goal
    pub fn path(&self) -> Option<Vec<N>> {
        shortest_path(&self.nodes, self.goal_index?)
    }

    /// Best known cost to a discovered node
    /// Final for expanded nodes, tentative for nodes still on the frontier
    pub fn cost_of(&self, node: &N) -> Option<C> {
        self.nodes.get(node).map(|&(_, cost)| cost)
    }

    /// Every discovered node with its best known cost, in discovery order
    pub fn costs(&self) -> impl Iterator<Item = (&N, C)> {
        self.nodes.iter().map(|(node, &(_, cost))| (node, cost))
    }

    /// Expanded nodes in the order they left the frontier
    pub fn expanded(&self) -> impl Iterator<Item = &N> {
        self.expanded.iter().filter_map(|&i| self.nodes.get_index(i).map(|(node, _)| node))
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn discovered_count(&self) -> usize {
        self.nodes.len()
    }
}


/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
/// None if an index in the chain does not exist
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Option<Vec<N>>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        let (node, &(parent_index, _)) = node_map.get_index(current_index)?;
        path.push(node.clone());
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return None;
    }

    Some(path)
}
