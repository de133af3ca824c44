//! Search problem: initial state, goal, and the explored record.

use rustc_hash::FxHashSet;

use crate::board::State;
use crate::config::PuzzleConfig;

/// One search run's problem definition and explored record.
///
/// The explored record holds every state that has been goal-tested, in test
/// order, duplicates included. Its length is the reported expansion count.
/// A hash set mirrors it for membership checks.
#[derive(Debug)]
pub struct Problem<'a> {
    config: &'a PuzzleConfig,
    initial: State,
    explored: Vec<State>,
    explored_set: FxHashSet<State>,
}

impl<'a> Problem<'a> {
    pub fn new(config: &'a PuzzleConfig, initial: State) -> Self {
        Self {
            config,
            initial,
            explored: Vec::new(),
            explored_set: FxHashSet::default(),
        }
    }

    pub fn config(&self) -> &'a PuzzleConfig {
        self.config
    }

    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    pub fn goal_state(&self) -> &'a State {
        self.config.goal()
    }

    /// Records `state` as explored and returns whether it is the goal.
    pub fn goal_test(&mut self, state: &State) -> bool {
        self.explored.push(state.clone());
        self.explored_set.insert(state.clone());
        state == self.config.goal()
    }

    /// Whether `state` has already been goal-tested.
    #[inline]
    pub fn is_explored(&self, state: &State) -> bool {
        self.explored_set.contains(state)
    }

    /// Number of goal tests performed so far.
    #[inline]
    pub fn expansion_count(&self) -> usize {
        self.explored.len()
    }

    /// Every goal-tested state in test order.
    pub fn explored(&self) -> &[State] {
        &self.explored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{apply_move, Direction};

    #[test]
    fn test_goal_test_records_every_call() {
        let config = PuzzleConfig::default();
        let start = State::parse(&config, "1 2 3 4 5 6 7 x 8").unwrap();
        let mut problem = Problem::new(&config, start.clone());

        assert!(!problem.is_explored(&start));
        assert!(!problem.goal_test(&start));
        assert!(!problem.goal_test(&start));
        assert!(problem.is_explored(&start));
        assert_eq!(problem.expansion_count(), 2, "repeat tests are recorded too");

        let goal = apply_move(&config, Direction::Right, &start).unwrap();
        assert!(problem.goal_test(&goal));
        assert_eq!(problem.explored(), &[start.clone(), start, goal]);
    }

    #[test]
    fn test_untested_states_are_not_explored() {
        let config = PuzzleConfig::default();
        let problem = Problem::new(&config, config.goal().clone());
        assert_eq!(problem.goal_state(), config.goal());
        assert_eq!(problem.initial_state(), config.goal());
        assert!(!problem.is_explored(config.goal()));
        assert_eq!(problem.expansion_count(), 0);
    }
}
