use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board must be at least 2x2, got dimension {dimension}")]
    TooSmall { dimension: usize },

    #[error("Board of dimension {dimension} has more tiles than fit in a u32")]
    TooLarge { dimension: usize },

    #[error("Board is not square: row {row} has {len} tiles, expected {dimension}")]
    NotSquare {
        row: usize,
        len: usize,
        dimension: usize,
    },

    #[error("Tile {tile} is out of range, tiles must be in 0..={max}")]
    TileOutOfRange { tile: u32, max: usize },

    #[error("Tile {tile} appears more than once")]
    DuplicateTile { tile: u32 },

    #[error("Missing board dimension")]
    MissingDimension,

    #[error("Invalid token {token:?}")]
    InvalidToken { token: String },

    #[error("Expected {expected} tiles, got {actual}")]
    WrongTileCount { expected: usize, actual: usize },
}

/// Returns the number of cells of a board with the given dimension, if such a board can be represented.
fn check_dimension(dimension: usize) -> Result<u32, BoardError> {
    if dimension < 2 {
        return Err(BoardError::TooSmall { dimension });
    }
    dimension
        .checked_mul(dimension)
        .and_then(|num_tiles| u32::try_from(num_tiles).ok())
        .ok_or(BoardError::TooLarge { dimension })
}

// Blank moves in the order up, down, left, right.
const MOVES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A [Board] is an immutable n x n sliding puzzle.
/// Each cell contains a value in 0..n*n, where 0 is the blank.
/// The goal board has the tiles 1..n*n in row-major order, followed by the blank.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,

    // Invariant: `tiles` is a permutation of 0..dimension*dimension, stored row by row.
    tiles: Box<[u32]>,

    // Index of the blank in `tiles`.
    blank: usize,
}

impl Board {
    /// Creates a board from a grid of rows.
    ///
    /// The grid must be square with dimension at least 2 and contain every value in 0..n*n exactly once.
    pub fn new(grid: Vec<Vec<u32>>) -> Result<Self, BoardError> {
        let dimension = grid.len();
        check_dimension(dimension)?;
        if let Some((row, cells)) = grid.iter().find_position(|cells| cells.len() != dimension) {
            return Err(BoardError::NotSquare {
                row,
                len: cells.len(),
                dimension,
            });
        }
        Self::from_tiles(dimension, grid.into_iter().flatten().collect())
    }

    /// Returns the solved board of the given dimension.
    pub fn goal(dimension: usize) -> Result<Self, BoardError> {
        let num_tiles = check_dimension(dimension)?;
        let tiles = (1..num_tiles).chain(std::iter::once(0)).collect();
        Self::from_tiles(dimension, tiles)
    }

    fn from_tiles(dimension: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        debug_assert_eq!(dimension * dimension, tiles.len());
        let max = tiles.len() - 1;
        let mut seen = vec![false; tiles.len()];
        for &tile in &tiles {
            let index = tile as usize;
            if index > max {
                return Err(BoardError::TileOutOfRange { tile, max });
            }
            if std::mem::replace(&mut seen[index], true) {
                return Err(BoardError::DuplicateTile { tile });
            }
        }
        // n*n distinct values from 0..n*n, so the blank is present exactly once.
        let blank = tiles
            .iter()
            .position(|&tile| tile == 0)
            .expect("a permutation of 0..n*n contains the blank");
        Ok(Self {
            dimension,
            tiles: tiles.into_boxed_slice(),
            blank,
        })
    }

    /// Returns a copy of this board with the tiles at the two indices exchanged.
    fn with_swapped(&self, first: usize, second: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(first, second);
        let blank = if self.blank == first {
            second
        } else if self.blank == second {
            first
        } else {
            self.blank
        };
        Self {
            dimension: self.dimension,
            tiles,
            blank,
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        assert!(row < self.dimension && col < self.dimension);
        self.tiles[row * self.dimension + col]
    }

    /// Returns the (row, col) position of the blank.
    #[inline]
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.dimension, self.blank % self.dimension)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.tiles.chunks(self.dimension)
    }

    /// Returns the grid of rows this board was built from, so that `Board::new(board.to_grid())` gives back an equal board.
    pub fn to_grid(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Number of tiles that are not in their goal position. The blank is not counted.
    pub fn hamming(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(index, &tile)| tile != 0 && tile as usize != index + 1)
            .count()
    }

    /// Sum of the vertical and horizontal distances of each tile from its goal position. The blank is not counted.
    pub fn manhattan(&self) -> usize {
        let n = self.dimension;
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(index, &tile)| {
                let (row, col) = (index / n, index % n);
                let goal = tile as usize - 1;
                let (goal_row, goal_col) = (goal / n, goal % n);
                row.abs_diff(goal_row) + col.abs_diff(goal_col)
            })
            .sum()
    }

    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    /// All boards reachable by sliding one tile into the blank, in the order
    /// blank up, down, left, right.
    pub fn neighbors(&self) -> impl Iterator<Item = Board> + '_ {
        let n = self.dimension;
        let (row, col) = self.blank();
        MOVES.into_iter().filter_map(move |(delta_row, delta_col)| {
            let new_row = row.checked_add_signed(delta_row).filter(|&r| r < n)?;
            let new_col = col.checked_add_signed(delta_col).filter(|&c| c < n)?;
            Some(self.with_swapped(self.blank, new_row * n + new_col))
        })
    }

    /// A board obtained by exchanging two non-blank tiles in the first two rows.
    ///
    /// Exactly one of a board and its twin is solvable.
    pub fn twin(&self) -> Self {
        let n = self.dimension;
        if self.tiles[0] != 0 && self.tiles[1] != 0 {
            self.with_swapped(0, 1)
        } else {
            self.with_swapped(n, n + 1)
        }
    }

    /// Decides solvability from the permutation parity.
    ///
    /// For odd dimensions a board is solvable iff the number of inversions among the non-blank tiles is even.
    /// For even dimensions every blank move between rows also flips the inversion parity, so the row of the blank
    /// is added in.
    pub fn is_solvable(&self) -> bool {
        let inversions = self
            .tiles
            .iter()
            .filter(|&&tile| tile != 0)
            .tuple_combinations()
            .filter(|(first, second)| first > second)
            .count();
        if self.dimension % 2 == 1 {
            inversions % 2 == 0
        } else {
            let (blank_row, _) = self.blank();
            (inversions + blank_row) % 2 == 1
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dimension)?;
        for row in self.rows() {
            for tile in row {
                write!(f, "{:2} ", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses whitespace separated tokens: the dimension n followed by n*n tiles in row-major order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn parse_token<T: FromStr>(token: &str) -> Result<T, BoardError> {
            token.parse().map_err(|_| BoardError::InvalidToken {
                token: token.to_string(),
            })
        }

        let mut tokens = s.split_whitespace();
        let dimension: usize = parse_token(tokens.next().ok_or(BoardError::MissingDimension)?)?;
        let num_tiles = check_dimension(dimension)? as usize;
        let tiles = tokens.map(parse_token::<u32>).collect::<Result<Vec<u32>, _>>()?;
        if tiles.len() != num_tiles {
            return Err(BoardError::WrongTileCount {
                expected: num_tiles,
                actual: tiles.len(),
            });
        }
        Self::from_tiles(dimension, tiles)
    }
}
