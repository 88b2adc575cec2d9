use rand::seq::SliceRandom;
use rand::Rng;

use super::board::{Board, BoardError};

/// Generates a board with a uniformly random arrangement of tiles. Half of all such boards are unsolvable.
pub fn generate(dimension: usize) -> Result<Board, BoardError> {
    generate_with_rng(dimension, &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Result<Board, BoardError> {
    let mut tiles = Board::goal(dimension)?.to_grid().concat();
    tiles.shuffle(rng);
    let grid = tiles.chunks(dimension).map(<[u32]>::to_vec).collect();
    Board::new(grid)
}

/// Generates a solvable board by making `steps` random moves starting from the goal board.
/// A move never directly undoes the previous one, but the walk may still return to earlier boards,
/// so the board can be solved in at most `steps` moves.
pub fn scramble(dimension: usize, steps: usize) -> Result<Board, BoardError> {
    scramble_with_rng(dimension, steps, &mut rand::thread_rng())
}

pub fn scramble_with_rng<R: Rng + ?Sized>(
    dimension: usize,
    steps: usize,
    rng: &mut R,
) -> Result<Board, BoardError> {
    let mut board = Board::goal(dimension)?;
    let mut previous: Option<Board> = None;
    for _ in 0..steps {
        let candidates: Vec<Board> = board
            .neighbors()
            .filter(|neighbor| previous.as_ref() != Some(neighbor))
            .collect();
        // Every blank position has at least two neighbors, so there is always a candidate left.
        let next = candidates
            .choose(rng)
            .expect("every board has a neighbor other than its predecessor")
            .clone();
        previous = Some(std::mem::replace(&mut board, next));
    }
    Ok(board)
}
