mod board;
mod generator;
mod solver;

pub use board::{Board, BoardError};
pub use generator::{generate, generate_with_rng, scramble, scramble_with_rng};
pub use solver::{Outcome, SearchStats, Solver, SolverError};
