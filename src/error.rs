//! Typed errors.
//!
//! These cover boundary validation only. A search that runs out of frontier or
//! hits a budget is not an error: it terminates normally and says so through
//! [`crate::solver::Termination`].

use std::fmt;

use crate::board::Tile;

/// Invalid puzzle dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The cell count is not a perfect square.
    NotSquare(usize),
    /// Side length below the smallest playable board.
    TooSmall(usize),
    /// Side length whose tiles would not fit in a `Tile`.
    TooLarge(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare(cells) => {
                write!(f, "{cells} cells cannot form a square board")
            }
            Self::TooSmall(side) => write!(f, "board side {side} is too small"),
            Self::TooLarge(side) => write!(f, "board side {side} is too large"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A state whose tiles are not a valid arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    WrongLength { expected: usize, found: usize },
    MissingBlank,
    MultipleBlanks,
    TileOutOfRange { tile: i64, max: Tile },
    DuplicateTile(Tile),
    /// A token in textual input that is neither a number nor a blank marker.
    InvalidToken(String),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, found } => {
                write!(f, "expected {expected} tiles, found {found}")
            }
            Self::MissingBlank => write!(f, "state has no blank"),
            Self::MultipleBlanks => write!(f, "state has more than one blank"),
            Self::TileOutOfRange { tile, max } => {
                write!(f, "tile {tile} is outside 1..={max}")
            }
            Self::DuplicateTile(tile) => write!(f, "tile {tile} appears more than once"),
            Self::InvalidToken(token) => write!(f, "cannot read {token:?} as a tile"),
        }
    }
}

impl std::error::Error for StateError {}

/// Failure to start a search.
///
/// Returned before any node is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    InvalidState(StateError),
    Config(ConfigError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState(_) => write!(f, "initial state is malformed"),
            Self::Config(_) => write!(f, "invalid puzzle size"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidState(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<StateError> for SearchError {
    fn from(err: StateError) -> Self {
        Self::InvalidState(err)
    }
}

impl From<ConfigError> for SearchError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
