//! Best-first frontier.
//!
//! A min-priority queue over search nodes keyed by `(priority, insertion order)`.
//! Equal priorities pop first-in first-out, so a run is fully reproducible.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::board::State;

/// A search node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Ordering key: `g` for uniform-cost, `g + h` for informed search.
    pub priority: u32,
    /// Heuristic estimate `h` (0 until a strategy fills it in).
    pub heuristic: u32,
    /// Moves from the initial state, `g`.
    pub path_cost: u32,
    pub state: State,
}

impl Node {
    /// The starting node: priority, heuristic and path cost all zero.
    pub fn root(state: State) -> Self {
        Self {
            priority: 0,
            heuristic: 0,
            path_cost: 0,
            state,
        }
    }
}

/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse`.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<(u32, u64)>,
    node: Node,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority queue of nodes awaiting goal test, tracking its peak size.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
    peak: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node and updates the peak size.
    pub fn put(&mut self, node: Node) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse((node.priority, sequence)),
            node,
        });
        self.peak = self.peak.max(self.heap.len());
    }

    /// Removes the lowest-priority node, oldest first among equals.
    ///
    /// Returns `None` once the frontier is exhausted.
    pub fn pop_min(&mut self) -> Option<Node> {
        self.heap.pop().map(|entry| entry.node)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size the frontier has ever reached.
    #[inline]
    pub fn peak(&self) -> usize {
        self.peak
    }
}
