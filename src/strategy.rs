//! Queueing strategies.
//!
//! A strategy decides how freshly generated children are scored before they
//! join the frontier. The driver never computes `h` itself, so swapping the
//! strategy is all it takes to turn uniform-cost search into A*.

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::board::State;
use crate::config::PuzzleConfig;
use crate::frontier::{Frontier, Node};
use crate::heuristics::{manhattan_distance, misplaced_tiles};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `h = 0`, priority `g`.
    UniformCost,
    /// A* with `h = misplaced_tiles`.
    MisplacedTiles,
    /// A* with `h = manhattan_distance`.
    Manhattan,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::UniformCost,
        Strategy::MisplacedTiles,
        Strategy::Manhattan,
    ];

    /// Heuristic estimate this strategy assigns to `state`.
    pub fn heuristic(self, config: &PuzzleConfig, state: &State) -> u32 {
        match self {
            Self::UniformCost => 0,
            Self::MisplacedTiles => misplaced_tiles(config, state),
            Self::Manhattan => manhattan_distance(config, state),
        }
    }

    /// Scores each candidate and merges it into the frontier, in candidate order.
    pub fn enqueue(
        self,
        config: &PuzzleConfig,
        frontier: &mut Frontier,
        candidates: impl IntoIterator<Item = Node>,
    ) {
        for mut child in candidates {
            child.heuristic = self.heuristic(config, &child.state);
            child.priority = child.path_cost + child.heuristic;
            trace!(
                "enqueue g={} h={} f={} {:?}",
                child.path_cost,
                child.heuristic,
                child.priority,
                child.state.tiles()
            );
            frontier.put(child);
        }
    }

    /// Human-readable algorithm name.
    pub fn description(self) -> &'static str {
        match self {
            Self::UniformCost => "Uniform Cost Search",
            Self::MisplacedTiles => "A* with the Misplaced Tile heuristic",
            Self::Manhattan => "A* with the Manhattan distance heuristic",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UniformCost => "uniform-cost",
            Self::MisplacedTiles => "misplaced",
            Self::Manhattan => "manhattan",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uniform-cost" | "uniform" | "ucs" | "1" => Ok(Self::UniformCost),
            "misplaced" | "misplaced-tiles" | "2" => Ok(Self::MisplacedTiles),
            "manhattan" | "3" => Ok(Self::Manhattan),
            other => Err(format!(
                "unknown strategy {other:?} (expected uniform-cost, misplaced or manhattan)"
            )),
        }
    }
}
