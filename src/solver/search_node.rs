use std::cmp::Ordering;
use std::rc::Rc;

use crate::board::Board;

/// A board reached by the search, together with the path that led to it.
pub struct SearchNode {
    board: Board,
    moves: usize,
    manhattan: usize,

    // Invariant: `previous` always points to a node created before this one, so the chain is acyclic
    // and ends at the root, whose `previous` is `None`.
    previous: Option<Rc<SearchNode>>,
}

impl SearchNode {
    pub fn root(board: Board) -> Self {
        Self::new(board, 0, None)
    }

    pub fn successor(previous: &Rc<SearchNode>, board: Board) -> Self {
        Self::new(board, previous.moves + 1, Some(Rc::clone(previous)))
    }

    fn new(board: Board, moves: usize, previous: Option<Rc<SearchNode>>) -> Self {
        let manhattan = board.manhattan();
        Self {
            board,
            moves,
            manhattan,
            previous,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn previous(&self) -> Option<&SearchNode> {
        self.previous.as_deref()
    }

    /// A* cost estimate: moves so far plus the Manhattan distance of the board.
    pub fn priority(&self) -> usize {
        self.moves + self.manhattan
    }

    /// The boards from the root to this node, both included.
    pub fn path(&self) -> Vec<Board> {
        let mut path: Vec<Board> = std::iter::successors(Some(self), |node| node.previous())
            .map(|node| node.board.clone())
            .collect();
        path.reverse();
        path
    }
}

/// Heap entry for a [SearchNode].
///
/// [std::collections::BinaryHeap] pops the greatest element, so the ordering is reversed: the node with the lowest
/// priority is the greatest. Among equal priorities the node closer to the goal wins. Any further ties are
/// broken arbitrarily by the heap.
pub struct QueuedNode(pub Rc<SearchNode>);

impl Ord for QueuedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .priority()
            .cmp(&self.0.priority())
            .then_with(|| other.0.manhattan.cmp(&self.0.manhattan))
    }
}

impl PartialOrd for QueuedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedNode {}
