use std::collections::BinaryHeap;
use std::rc::Rc;

use super::search_node::{QueuedNode, SearchNode};
use crate::board::Board;

/// One A* search over the boards reachable from a root board.
///
/// The search is advanced one node at a time with [Search::step], so that two searches can be run in lockstep.
pub struct Search {
    queue: BinaryHeap<QueuedNode>,
    expanded: usize,
    enqueued: usize,
}

impl Search {
    pub fn new(root: Board) -> Self {
        let mut queue = BinaryHeap::new();
        queue.push(QueuedNode(Rc::new(SearchNode::root(root))));
        Self {
            queue,
            expanded: 0,
            enqueued: 1,
        }
    }

    /// Pops the node with the lowest priority. Returns it if its board is the goal, otherwise
    /// queues its neighbors and returns `None`.
    ///
    /// A neighbor equal to the board of the popped node's predecessor is skipped, since it only undoes the last
    /// move. Older ancestors are not checked.
    pub fn step(&mut self) -> Option<Rc<SearchNode>> {
        // Every board has at least two neighbors and at most one of them is skipped, so the queue never drains.
        let QueuedNode(current) = self
            .queue
            .pop()
            .expect("search queue is never empty");

        if current.board().is_goal() {
            return Some(current);
        }

        self.expanded += 1;
        let previous_board = current.previous().map(SearchNode::board);
        for neighbor in current.board().neighbors() {
            if previous_board != Some(&neighbor) {
                self.queue
                    .push(QueuedNode(Rc::new(SearchNode::successor(&current, neighbor))));
                self.enqueued += 1;
            }
        }
        None
    }

    /// Number of nodes popped and expanded so far. A popped goal node is not counted.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of nodes pushed so far, including the root.
    pub fn enqueued(&self) -> usize {
        self.enqueued
    }
}
