//! Frontier containers that decide which node the solver expands next.
//!
//! Both strategies share one expansion loop and differ only in the frontier they
//! hand it: a FIFO queue for breadth-first search and a min-score heap for
//! best-first search.

use crate::engine::Board;
use crate::heuristics::score_node;
use crate::node::SearchNode;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::rc::Rc;

/// Nodes waiting to be expanded.
pub trait Frontier {
    fn push(&mut self, node: Rc<SearchNode>);

    /// Removes the next node to expand.
    fn pop(&mut self) -> Option<Rc<SearchNode>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in, first-out frontier for breadth-first search.
///
/// New nodes enter at the front and leave from the back.
#[derive(Default)]
pub struct FifoFrontier {
    queue: VecDeque<Rc<SearchNode>>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: Rc<SearchNode>) {
        self.queue.push_front(node);
    }

    fn pop(&mut self) -> Option<Rc<SearchNode>> {
        self.queue.pop_back()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// A node paired with the heuristic score it had when it entered the frontier.
#[derive(Debug)]
pub struct ScoredNode {
    pub node: Rc<SearchNode>,
    pub score: u32,
}

impl PartialEq for ScoredNode {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for ScoredNode {}

impl PartialOrd for ScoredNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredNode {
    // Reversed so that `BinaryHeap`, a max-heap, yields the lowest score first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.score.cmp(&self.score)
    }
}

/// Frontier ordered by ascending heuristic score against a fixed goal.
///
/// Scores are computed once on insertion and never revisited. The order among
/// equal scores is whatever the heap yields.
pub struct ScoredFrontier {
    goal: Board,
    heap: BinaryHeap<ScoredNode>,
}

impl ScoredFrontier {
    pub fn new(goal: Board) -> Self {
        ScoredFrontier {
            goal,
            heap: BinaryHeap::new(),
        }
    }

    /// Score of the node that `pop` would return next.
    pub fn peek_score(&self) -> Option<u32> {
        self.heap.peek().map(|entry| entry.score)
    }
}

impl Frontier for ScoredFrontier {
    fn push(&mut self, node: Rc<SearchNode>) {
        let score = score_node(&node, &self.goal);
        self.heap.push(ScoredNode { node, score });
    }

    fn pop(&mut self) -> Option<Rc<SearchNode>> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
