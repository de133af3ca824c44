//! Board state and move operators.
//!
//! A state is a flat row-major arrangement of `N = side²` tiles with exactly one
//! [`BLANK`]. Moves are named after the direction the blank travels.

use std::fmt;

use crate::config::PuzzleConfig;
use crate::error::StateError;

/// A tile value. Numbered tiles are `1..N`; the blank is [`BLANK`].
pub type Tile = u8;

/// Sentinel for the empty cell.
pub const BLANK: Tile = 0;

/// A tile arrangement.
///
/// The blank's index is cached alongside the tiles since every move and
/// legality check starts from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    tiles: Vec<Tile>,
    blank: usize,
}

impl State {
    /// Validates `tiles` against `config` and builds a state.
    ///
    /// The tiles must be a permutation of `1..N` plus one [`BLANK`].
    pub fn new(config: &PuzzleConfig, tiles: Vec<Tile>) -> Result<Self, StateError> {
        if tiles.len() != config.cells() {
            return Err(StateError::WrongLength {
                expected: config.cells(),
                found: tiles.len(),
            });
        }

        let mut blanks = tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile == BLANK)
            .map(|(index, _)| index);
        let blank = blanks.next().ok_or(StateError::MissingBlank)?;
        if blanks.next().is_some() {
            return Err(StateError::MultipleBlanks);
        }

        let max = config.max_tile();
        let mut seen = vec![false; config.cells()];
        for &tile in tiles.iter().filter(|&&tile| tile != BLANK) {
            if tile > max {
                return Err(StateError::TileOutOfRange {
                    tile: i64::from(tile),
                    max,
                });
            }
            if std::mem::replace(&mut seen[tile as usize], true) {
                return Err(StateError::DuplicateTile(tile));
            }
        }

        Ok(Self { tiles, blank })
    }

    /// Builds a state from tiles already known to be valid.
    pub(crate) fn from_tiles_unchecked(tiles: Vec<Tile>) -> Self {
        let blank = tiles.iter().position(|&tile| tile == BLANK).unwrap_or(0);
        Self { tiles, blank }
    }

    /// Parses whitespace- or comma-separated tiles in row-major order.
    ///
    /// The blank may be written as `x`, `_`, `0` or `-1`.
    pub fn parse(config: &PuzzleConfig, text: &str) -> Result<Self, StateError> {
        let tiles = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| parse_tile(config, token))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(config, tiles)
    }

    /// Tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Linear index of the blank.
    #[inline]
    pub fn blank_index(&self) -> usize {
        self.blank
    }
}

fn parse_tile(config: &PuzzleConfig, token: &str) -> Result<Tile, StateError> {
    match token {
        "x" | "X" | "_" | "-1" => return Ok(BLANK),
        _ => {}
    }
    let value: i64 = token
        .parse()
        .map_err(|_| StateError::InvalidToken(token.to_string()))?;
    let max = config.max_tile();
    if value < 0 || value > i64::from(max) {
        return Err(StateError::TileOutOfRange { tile: value, max });
    }
    Ok(value as Tile)
}

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The move that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Returns whether the blank can move in `direction`.
///
/// Depends only on the blank's index and the side length.
#[inline]
pub fn can_move(config: &PuzzleConfig, direction: Direction, state: &State) -> bool {
    let side = config.side();
    let index = state.blank;
    match direction {
        Direction::Up => index >= side,
        Direction::Down => index < config.cells() - side,
        Direction::Left => index % side != 0,
        Direction::Right => index % side != side - 1,
    }
}

/// Returns a new state with the blank swapped toward `direction`.
///
/// Returns `None` if the move would leave the board. `state` is never touched.
pub fn apply_move(config: &PuzzleConfig, direction: Direction, state: &State) -> Option<State> {
    if !can_move(config, direction, state) {
        return None;
    }

    let side = config.side();
    let from = state.blank;
    let to = match direction {
        Direction::Up => from - side,
        Direction::Down => from + side,
        Direction::Left => from - 1,
        Direction::Right => from + 1,
    };

    let mut next = state.clone();
    next.tiles.swap(from, to);
    next.blank = to;
    Some(next)
}

/// Whether `state` can reach the goal at all.
///
/// Uses the permutation-parity argument: on odd-width boards the inversion
/// count must be even; on even-width boards the inversion count plus the
/// blank's row (counted from the bottom, starting at 1) must be odd.
pub fn is_solvable(config: &PuzzleConfig, state: &State) -> bool {
    let numbered: Vec<Tile> = state
        .tiles
        .iter()
        .copied()
        .filter(|&tile| tile != BLANK)
        .collect();

    let mut inversions = 0usize;
    for (i, &a) in numbered.iter().enumerate() {
        inversions += numbered[i + 1..].iter().filter(|&&b| b < a).count();
    }

    let side = config.side();
    if side % 2 == 1 {
        inversions % 2 == 0
    } else {
        let (row, _) = config.idx_to_cell(state.blank);
        let row_from_bottom = side - row;
        (inversions + row_from_bottom) % 2 == 1
    }
}

/// Formats a state as a grid, one row per line.
///
/// Tiles are right-aligned to the widest tile; the blank shows as 'x'.
pub fn format_board(config: &PuzzleConfig, state: &State) -> String {
    let width = config.max_tile().to_string().len();
    let mut output = String::new();

    for row in state.tiles.chunks(config.side()) {
        let cells: Vec<String> = row
            .iter()
            .map(|&tile| {
                if tile == BLANK {
                    format!("{:>width$}", "x")
                } else {
                    format!("{tile:>width$}")
                }
            })
            .collect();
        output.push_str(&cells.join(" "));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eight() -> PuzzleConfig {
        PuzzleConfig::default()
    }

    fn state(tiles: &[Tile]) -> State {
        State::new(&eight(), tiles.to_vec()).unwrap()
    }

    #[test]
    fn test_can_move_from_center() {
        let config = eight();
        let center = state(&[3, 1, 2, 4, 0, 5, 6, 7, 8]);
        for direction in Direction::ALL {
            assert!(can_move(&config, direction, &center), "{direction}");
        }
    }

    #[test]
    fn test_can_move_from_corners() {
        let config = eight();
        let top_left = state(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(!can_move(&config, Direction::Up, &top_left));
        assert!(!can_move(&config, Direction::Left, &top_left));
        assert!(can_move(&config, Direction::Down, &top_left));
        assert!(can_move(&config, Direction::Right, &top_left));

        let goal = config.goal().clone();
        assert!(can_move(&config, Direction::Up, &goal));
        assert!(can_move(&config, Direction::Left, &goal));
        assert!(!can_move(&config, Direction::Down, &goal));
        assert!(!can_move(&config, Direction::Right, &goal));
    }

    #[test]
    fn test_apply_move_swaps_blank() {
        let config = eight();
        let start = state(&[3, 1, 2, 4, 0, 5, 6, 7, 8]);

        let up = apply_move(&config, Direction::Up, &start).unwrap();
        assert_eq!(up.tiles(), &[3, 0, 2, 4, 1, 5, 6, 7, 8]);
        assert_eq!(up.blank_index(), 1);

        let right = apply_move(&config, Direction::Right, &start).unwrap();
        assert_eq!(right.tiles(), &[3, 1, 2, 4, 5, 0, 6, 7, 8]);

        // input untouched
        assert_eq!(start.tiles(), &[3, 1, 2, 4, 0, 5, 6, 7, 8]);
    }

    #[test]
    fn test_illegal_move_returns_none() {
        let config = eight();
        let goal = config.goal().clone();
        assert_eq!(apply_move(&config, Direction::Down, &goal), None);
        assert_eq!(apply_move(&config, Direction::Right, &goal), None);
    }

    #[test]
    fn test_inverse_move_restores_state() {
        let config = PuzzleConfig::new(4).unwrap();
        let mut current = config.goal().clone();
        // walk the blank around so every row and column position is covered
        let walk = [
            Direction::Up,
            Direction::Left,
            Direction::Up,
            Direction::Left,
            Direction::Up,
            Direction::Left,
            Direction::Down,
        ];
        for step in walk {
            for direction in Direction::ALL {
                if let Some(next) = apply_move(&config, direction, &current) {
                    let back = apply_move(&config, direction.inverse(), &next).unwrap();
                    assert_eq!(back, current, "{direction} then {}", direction.inverse());
                }
            }
            current = apply_move(&config, step, &current).unwrap();
        }
    }

    #[test]
    fn test_new_rejects_malformed_states() {
        let config = eight();
        assert_eq!(
            State::new(&config, vec![1, 2, 3]),
            Err(StateError::WrongLength {
                expected: 9,
                found: 3
            })
        );
        assert_eq!(
            State::new(&config, vec![1, 2, 3, 4, 5, 6, 7, 8, 8]),
            Err(StateError::MissingBlank)
        );
        assert_eq!(
            State::new(&config, vec![1, 2, 3, 4, 5, 6, 7, 0, 0]),
            Err(StateError::MultipleBlanks)
        );
        assert_eq!(
            State::new(&config, vec![1, 2, 3, 4, 5, 6, 7, 9, 0]),
            Err(StateError::TileOutOfRange { tile: 9, max: 8 })
        );
        assert_eq!(
            State::new(&config, vec![1, 2, 3, 4, 5, 6, 7, 7, 0]),
            Err(StateError::DuplicateTile(7))
        );
    }

    #[test]
    fn test_parse_accepts_blank_markers() {
        let config = eight();
        let expected = state(&[3, 1, 2, 4, 0, 5, 6, 7, 8]);
        assert_eq!(State::parse(&config, "3 1 2 4 x 5 6 7 8").unwrap(), expected);
        assert_eq!(State::parse(&config, "3,1,2,4,-1,5,6,7,8").unwrap(), expected);
        assert_eq!(
            State::parse(&config, "3 1 2\n4 _ 5\n6 7 8\n").unwrap(),
            expected
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let config = eight();
        assert_eq!(
            State::parse(&config, "3 1 2 4 y 5 6 7 8"),
            Err(StateError::InvalidToken("y".to_string()))
        );
        assert_eq!(
            State::parse(&config, "3 1 2 4 x 5 6 7 -8"),
            Err(StateError::TileOutOfRange { tile: -8, max: 8 })
        );
    }

    #[test]
    fn test_solvability_parity() {
        let config = eight();
        assert!(is_solvable(&config, config.goal()));
        assert!(is_solvable(&config, &state(&[3, 1, 2, 4, 0, 5, 6, 7, 8])));
        assert!(!is_solvable(&config, &state(&[2, 1, 3, 4, 5, 6, 7, 8, 0])));

        let three = PuzzleConfig::new(2).unwrap();
        assert!(is_solvable(&three, three.goal()));
        let swapped = State::new(&three, vec![2, 1, 3, 0]).unwrap();
        assert!(!is_solvable(&three, &swapped));
        let one_move = State::new(&three, vec![1, 2, 0, 3]).unwrap();
        assert!(is_solvable(&three, &one_move));
    }

    #[test]
    fn test_format_board() {
        let config = eight();
        let start = state(&[3, 1, 2, 4, 0, 5, 6, 7, 8]);
        insta::assert_snapshot!(format_board(&config, &start), @r"
        3 1 2
        4 x 5
        6 7 8
        ");
    }

    #[test]
    fn test_format_board_pads_wide_tiles() {
        let config = PuzzleConfig::new(4).unwrap();
        assert_eq!(
            format_board(&config, config.goal()),
            " 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15  x\n"
        );
    }
}
