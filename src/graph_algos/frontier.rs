use std::{collections::BinaryHeap, cmp::Ordering};


/// Frontier entry
/// - index: position of the node in the search tree
/// - cost: cost from the start when the entry was pushed, used to detect stale entries
/// - priority: what the queue orders by (cost for Dijkstra, cost + h(n) for A*)
/// - seq: push order, breaks priority ties in favor of the earliest entry
#[derive(Debug)]
struct Entry<C> {
    index: usize,
    cost: C,
    priority: C,
    seq: usize,
}

impl<C: Ord> Ord for Entry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // binary heap pops the greatest, so both keys are reversed
        other.priority.cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<C: Ord> PartialOrd for Entry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialEq> PartialEq for Entry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}
impl<C: PartialEq> Eq for Entry<C> {}


/// Min-priority queue of search tree indices
/// Equal priorities come out in insertion order, which keeps paths deterministic
#[derive(Debug)]
pub(crate) struct Frontier<C> {
    heap: BinaryHeap<Entry<C>>,
    next_seq: usize,
}

impl<C: Ord + Copy> Frontier<C> {

    pub(crate) fn new() -> Self {
        Self { heap: BinaryHeap::new(), next_seq: 0 }
    }

    pub(crate) fn push(&mut self, index: usize, cost: C, priority: C) {
        self.heap.push(Entry { index, cost, priority, seq: self.next_seq });
        self.next_seq += 1;
    }

    /// Lowest priority entry as (index, cost)
    pub(crate) fn pop(&mut self) -> Option<(usize, C)> {
        self.heap.pop().map(|Entry { index, cost, .. }| (index, cost))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
