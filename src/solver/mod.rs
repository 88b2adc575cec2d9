use std::rc::Rc;

use thiserror::Error;

use super::board::Board;

mod search;
mod search_node;
use search::Search;
use search_node::SearchNode;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolverError {
    #[error("Initial board is missing")]
    MissingInitialBoard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Unsolvable,
}

/// Work done by both searches together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of lockstep rounds, including the one in which a goal was found.
    pub rounds: usize,
    /// Number of nodes popped and expanded.
    pub expanded: usize,
    /// Number of nodes pushed, including both roots.
    pub enqueued: usize,
}

/// Solves a sliding puzzle with A*, or proves that it cannot be solved.
///
/// Exactly one of a board and its [twin](Board::twin) is solvable. The solver runs one search from the initial
/// board and one from its twin, advancing them one step each per round. If the twin search reaches the goal first,
/// the initial board is unsolvable.
pub struct Solver {
    // Invariant: `goal` is `Some` iff the initial board is solvable, and then its board is the goal board
    // and its predecessor chain is a shortest path from the initial board.
    goal: Option<Rc<SearchNode>>,
    stats: SearchStats,
}

impl Solver {
    pub fn new(initial: Board) -> Self {
        let mut twin = Search::new(initial.twin());
        let mut primary = Search::new(initial);

        let mut rounds = 0;
        let goal = loop {
            rounds += 1;
            if let Some(goal) = primary.step() {
                break Some(goal);
            }
            if twin.step().is_some() {
                // The twin is solvable, so the initial board isn't.
                break None;
            }
        };

        let stats = SearchStats {
            rounds,
            expanded: primary.expanded() + twin.expanded(),
            enqueued: primary.enqueued() + twin.enqueued(),
        };
        Self { goal, stats }
    }

    pub fn outcome(&self) -> Outcome {
        if self.goal.is_some() {
            Outcome::Solved
        } else {
            Outcome::Unsolvable
        }
    }

    pub fn is_solvable(&self) -> bool {
        self.outcome() == Outcome::Solved
    }

    /// Minimum number of moves to solve the initial board, or `None` if it is unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.goal.as_ref().map(|goal| goal.moves())
    }

    /// The boards of a shortest solution, from the initial board to the goal board, or `None` if the initial
    /// board is unsolvable.
    pub fn solution(&self) -> Option<Vec<Board>> {
        self.goal.as_ref().map(|goal| goal.path())
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl TryFrom<Option<Board>> for Solver {
    type Error = SolverError;

    fn try_from(initial: Option<Board>) -> Result<Self, Self::Error> {
        let initial = initial.ok_or(SolverError::MissingInitialBoard)?;
        Ok(Self::new(initial))
    }
}
