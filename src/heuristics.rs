//! Heuristic evaluators.
//!
//! Both estimates are admissible and consistent: a single move changes either
//! value by at most one, and neither is ever positive at the goal.

use crate::board::{State, BLANK};
use crate::config::PuzzleConfig;

/// Counts numbered tiles that are not on their goal cell.
///
/// The blank's position is not counted.
pub fn misplaced_tiles(config: &PuzzleConfig, state: &State) -> u32 {
    state
        .tiles()
        .iter()
        .zip(config.goal().tiles())
        .filter(|&(&tile, &goal)| tile != BLANK && tile != goal)
        .count() as u32
}

/// Sums the grid distance of every numbered tile from its goal cell.
pub fn manhattan_distance(config: &PuzzleConfig, state: &State) -> u32 {
    state
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(|(index, &tile)| {
            let (row, col) = config.idx_to_cell(index);
            let (goal_row, goal_col) = config.idx_to_cell(config.goal_index(tile));
            (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
        })
        .sum()
}
