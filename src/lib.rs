//! Sliding N-puzzle solver library.
//!
//! Best-first graph search over tile arrangements, with uniform-cost search and
//! two A* heuristics (misplaced tiles, Manhattan distance) as interchangeable
//! strategies.

pub mod board;
pub mod config;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod problem;
pub mod solver;
pub mod strategy;

use board::{State, Tile};
use config::PuzzleConfig;
use error::SearchError;
use problem::Problem;
use solver::{general_search, SearchLimits, SearchOutcome};
use strategy::Strategy;

/// Solves a flat row-major board, inferring the puzzle size from its length.
///
/// `tiles` must contain `1..N` and one [`board::BLANK`]. Runs without limits.
pub fn solve(tiles: &[Tile], strategy: Strategy) -> Result<SearchOutcome, SearchError> {
    let config = PuzzleConfig::from_cells(tiles.len())?;
    let initial = State::new(&config, tiles.to_vec())?;
    Ok(solve_with(&config, initial, strategy, &SearchLimits::default()))
}

/// Solves `initial` under an explicit configuration and limits.
pub fn solve_with(
    config: &PuzzleConfig,
    initial: State,
    strategy: Strategy,
    limits: &SearchLimits,
) -> SearchOutcome {
    let mut problem = Problem::new(config, initial);
    general_search(&mut problem, strategy, limits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, StateError};

    #[test]
    fn test_solve_infers_size() {
        let outcome = solve(&[1, 2, 0, 3], Strategy::Manhattan).unwrap();
        assert_eq!(outcome.path_cost(), Some(1));

        let outcome = solve(&[1, 2, 3, 4, 5, 6, 0, 7, 8], Strategy::UniformCost).unwrap();
        assert_eq!(outcome.path_cost(), Some(2));
    }

    #[test]
    fn test_solve_rejects_bad_input() {
        assert_eq!(
            solve(&[1, 2, 0], Strategy::Manhattan),
            Err(SearchError::Config(ConfigError::NotSquare(3)))
        );
        assert_eq!(
            solve(&[1, 1, 2, 0], Strategy::Manhattan),
            Err(SearchError::InvalidState(StateError::DuplicateTile(1)))
        );
    }
}
