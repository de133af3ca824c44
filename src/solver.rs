//! General best-first search.
//!
//! The driver pops the cheapest node, goal-tests it, and otherwise expands it
//! and hands the children to the active [`Strategy`]. It runs to completion in
//! a single call.
//!
//! Key points:
//! - Children are filtered against the explored record only (states already
//!   goal-tested), so a state waiting in the frontier may be queued again.
//!   [`Dedup::Generated`] opts into the classical generated-set check.
//! - Without limits an unsolvable board searches until the reachable half of
//!   the state space is exhausted. [`SearchLimits`] bounds that.

use log::{debug, info, warn};
use rustc_hash::FxHashSet;

use crate::board::{apply_move, Direction, State};
use crate::frontier::{Frontier, Node};
use crate::problem::Problem;
use crate::strategy::Strategy;

/// Duplicate-state policy for generated children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dedup {
    /// Drop children that have already been goal-tested.
    #[default]
    Explored,
    /// Drop children that have ever been generated.
    Generated,
}

/// Budgets and dedup policy for one search run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchLimits {
    /// Stop after this many goal tests.
    pub max_expansions: Option<usize>,
    /// Never queue children deeper than this path cost.
    pub max_depth: Option<u32>,
    pub dedup: Dedup,
}

impl SearchLimits {
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_dedup(mut self, dedup: Dedup) -> Self {
        self.dedup = dedup;
        self
    }
}

/// Why a search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    GoalFound { state: State, path_cost: u32 },
    /// The frontier emptied with no goal found and nothing cut by a limit.
    FrontierExhausted,
    /// The frontier emptied, but children past `max_depth` were discarded.
    DepthLimitReached,
    ExpansionLimitReached,
}

/// Result of a search run, with statistics for every termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub strategy: Strategy,
    pub termination: Termination,
    /// Total goal tests performed (size of the explored record).
    pub nodes_expanded: usize,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

impl SearchOutcome {
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, Termination::GoalFound { .. })
    }

    /// Path cost of the goal node, if one was found.
    pub fn path_cost(&self) -> Option<u32> {
        match &self.termination {
            Termination::GoalFound { path_cost, .. } => Some(*path_cost),
            _ => None,
        }
    }

    /// The goal state, if one was found.
    pub fn goal(&self) -> Option<&State> {
        match &self.termination {
            Termination::GoalFound { state, .. } => Some(state),
            _ => None,
        }
    }
}

/// Generates the legal, not-yet-explored children of `node`.
///
/// Directions are tried in [`Direction::ALL`] order. Each child has path cost
/// `g + 1` and heuristic 0; the strategy scores it later.
pub fn expand(node: &Node, problem: &Problem<'_>) -> Vec<Node> {
    let config = problem.config();
    Direction::ALL
        .iter()
        .filter_map(|&direction| apply_move(config, direction, &node.state))
        .filter(|child| !problem.is_explored(child))
        .map(|state| Node {
            priority: 0,
            heuristic: 0,
            path_cost: node.path_cost + 1,
            state,
        })
        .collect()
}

/// Runs best-first search from the problem's initial state.
pub fn general_search(
    problem: &mut Problem<'_>,
    strategy: Strategy,
    limits: &SearchLimits,
) -> SearchOutcome {
    let mut frontier = Frontier::new();
    let mut generated: FxHashSet<State> = FxHashSet::default();
    let mut depth_cut = false;

    if limits.dedup == Dedup::Generated {
        generated.insert(problem.initial_state().clone());
    }
    frontier.put(Node::root(problem.initial_state().clone()));

    let termination = loop {
        if let Some(max) = limits.max_expansions {
            if problem.expansion_count() >= max {
                warn!("expansion budget of {max} nodes spent without reaching the goal");
                break Termination::ExpansionLimitReached;
            }
        }

        let Some(node) = frontier.pop_min() else {
            break if depth_cut {
                Termination::DepthLimitReached
            } else {
                Termination::FrontierExhausted
            };
        };

        if node.path_cost > 0 || node.heuristic > 0 {
            debug!(
                "best state to expand has g(n) = {} and h(n) = {}: {:?}",
                node.path_cost,
                node.heuristic,
                node.state.tiles()
            );
        }

        if problem.goal_test(&node.state) {
            break Termination::GoalFound {
                path_cost: node.path_cost,
                state: node.state,
            };
        }

        let mut children = expand(&node, problem);
        if let Some(max_depth) = limits.max_depth {
            let before = children.len();
            children.retain(|child| child.path_cost <= max_depth);
            depth_cut |= children.len() < before;
        }
        if limits.dedup == Dedup::Generated {
            children.retain(|child| generated.insert(child.state.clone()));
        }

        strategy.enqueue(problem.config(), &mut frontier, children);
    };

    let outcome = SearchOutcome {
        strategy,
        termination,
        nodes_expanded: problem.expansion_count(),
        peak_frontier: frontier.peak(),
    };

    match outcome.path_cost() {
        Some(depth) => info!(
            "{strategy}: goal at depth {depth} after {} expansions (peak frontier {})",
            outcome.nodes_expanded, outcome.peak_frontier
        ),
        None => info!(
            "{strategy}: stopped with {:?} after {} expansions (peak frontier {})",
            outcome.termination, outcome.nodes_expanded, outcome.peak_frontier
        ),
    }

    outcome
}
