//! Puzzle-size configuration.
//!
//! Every size-dependent computation (move legality, heuristics, the goal state)
//! takes a `PuzzleConfig` instead of reading a process-wide constant, so boards
//! of different sizes can be searched side by side.

use crate::board::{State, Tile, BLANK};
use crate::error::ConfigError;

/// Smallest supported side length (the 3-puzzle).
pub const MIN_SIDE: usize = 2;

/// Largest supported side length; the highest tile must fit in a `Tile`.
pub const MAX_SIDE: usize = 15;

/// Number of numbered tiles in the default puzzle (the 8-puzzle).
pub const DEFAULT_TILE_COUNT: usize = 8;

/// The built-in 8-puzzle, twenty moves from the goal.
pub const DEFAULT_PUZZLE: [Tile; 9] = [3, 1, 2, 4, BLANK, 5, 6, 7, 8];

/// A 2-D grid cell as (row, column).
pub type Cell = (usize, usize);

/// Board geometry for one puzzle size.
///
/// The goal state is computed once at construction and borrowed from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    side: usize,
    goal: State,
}

impl PuzzleConfig {
    /// Creates a configuration for a `side` x `side` board.
    pub fn new(side: usize) -> Result<Self, ConfigError> {
        if side < MIN_SIDE {
            return Err(ConfigError::TooSmall(side));
        }
        if side > MAX_SIDE {
            return Err(ConfigError::TooLarge(side));
        }
        Ok(Self {
            side,
            goal: build_goal(side * side),
        })
    }

    /// Creates a configuration from the number of numbered tiles (8 for the 8-puzzle).
    pub fn from_tile_count(tiles: usize) -> Result<Self, ConfigError> {
        Self::from_cells(tiles + 1)
    }

    /// Creates a configuration from the total number of cells, blank included.
    pub fn from_cells(cells: usize) -> Result<Self, ConfigError> {
        let side = integer_sqrt(cells);
        if side * side != cells {
            return Err(ConfigError::NotSquare(cells));
        }
        Self::new(side)
    }

    /// Board side length.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells, N = side².
    #[inline]
    pub fn cells(&self) -> usize {
        self.side * self.side
    }

    /// Highest numbered tile, N - 1.
    #[inline]
    pub fn max_tile(&self) -> Tile {
        (self.cells() - 1) as Tile
    }

    /// The goal arrangement: 1..N-1 followed by the blank.
    #[inline]
    pub fn goal(&self) -> &State {
        &self.goal
    }

    /// Index at which `tile` sits in the goal state.
    #[inline]
    pub fn goal_index(&self, tile: Tile) -> usize {
        if tile == BLANK {
            self.cells() - 1
        } else {
            tile as usize - 1
        }
    }

    /// Converts a row-major linear index to (row, column).
    #[inline(always)]
    pub fn idx_to_cell(&self, index: usize) -> Cell {
        (index / self.side, index % self.side)
    }

    /// Converts (row, column) to a row-major linear index.
    #[inline(always)]
    pub fn cell_to_idx(&self, (row, col): Cell) -> usize {
        row * self.side + col
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            side: 3,
            goal: build_goal(DEFAULT_TILE_COUNT + 1),
        }
    }
}

fn build_goal(cells: usize) -> State {
    let tiles: Vec<Tile> = (1..cells)
        .map(|tile| tile as Tile)
        .chain(std::iter::once(BLANK))
        .collect();
    State::from_tiles_unchecked(tiles)
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = 0;
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_eight_puzzle() {
        let config = PuzzleConfig::default();
        assert_eq!(config.side(), 3);
        assert_eq!(config.cells(), 9);
        assert_eq!(config, PuzzleConfig::from_tile_count(8).unwrap());
    }

    #[test]
    fn test_goal_layout() {
        let config = PuzzleConfig::new(3).unwrap();
        assert_eq!(config.goal().tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, BLANK]);
        assert_eq!(config.goal().blank_index(), 8);

        let fifteen = PuzzleConfig::from_tile_count(15).unwrap();
        assert_eq!(fifteen.side(), 4);
        assert_eq!(fifteen.goal().tiles()[14], 15);
        assert_eq!(fifteen.goal().blank_index(), 15);
    }

    #[test]
    fn test_rejects_non_square_sizes() {
        assert_eq!(
            PuzzleConfig::from_tile_count(7),
            Err(ConfigError::NotSquare(8))
        );
        assert_eq!(PuzzleConfig::from_cells(1), Err(ConfigError::TooSmall(1)));
        assert_eq!(PuzzleConfig::new(16), Err(ConfigError::TooLarge(16)));
    }

    #[test]
    fn test_goal_index_matches_goal_state() {
        let config = PuzzleConfig::new(4).unwrap();
        for (index, &tile) in config.goal().tiles().iter().enumerate() {
            assert_eq!(config.goal_index(tile), index, "tile {tile}");
        }
    }

    #[test]
    fn test_cell_conversion_roundtrip() {
        let config = PuzzleConfig::new(4).unwrap();
        for idx in 0..config.cells() {
            let cell = config.idx_to_cell(idx);
            assert!(cell.0 < 4 && cell.1 < 4);
            assert_eq!(config.cell_to_idx(cell), idx, "Roundtrip failed for index {idx}");
        }
    }
}
