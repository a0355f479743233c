//! A plan is a sequence of actions leading from a start state to a goal
//! state. This module provides the [`Plan`] struct, which represents a plan
//! together with the states it visits.

use crate::mdp::Action;
use itertools::Itertools;
use std::fmt::{self, Debug, Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub struct Plan<S> {
    /// Visited states, from the start state to the goal state inclusive.
    states: Vec<S>,
    /// `actions[i]` leads from `states[i]` to `states[i + 1]`.
    actions: Vec<Action>,
    /// Reward accumulated when reaching `states[i]`.
    cumulated_rewards: Vec<f64>,
}

impl<S> Plan<S> {
    pub fn new(states: Vec<S>, actions: Vec<Action>, cumulated_rewards: Vec<f64>) -> Self {
        debug_assert!(!states.is_empty(), "A plan visits at least its start state");
        debug_assert_eq!(states.len(), actions.len() + 1);
        debug_assert_eq!(states.len(), cumulated_rewards.len());
        Self {
            states,
            actions,
            cumulated_rewards,
        }
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn cumulated_rewards(&self) -> &[f64] {
        &self.cumulated_rewards
    }

    /// The (state, action) pairs of the plan in execution order. The goal
    /// state has no action and is not included.
    pub fn steps(&self) -> impl Iterator<Item = (&S, &Action)> {
        self.states.iter().zip(self.actions.iter())
    }

    pub fn start_state(&self) -> &S {
        &self.states[0]
    }

    pub fn goal_state(&self) -> &S {
        &self.states[self.states.len() - 1]
    }

    /// Reward accumulated over the whole plan.
    pub fn total_reward(&self) -> f64 {
        self.cumulated_rewards.last().copied().unwrap_or(0.)
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<S: Debug> Display for Plan<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            self.steps()
                .map(|(state, action)| format!("{:?} {}", state, action))
                .chain(std::iter::once(format!("{:?}", self.goal_state())))
                .join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> Plan<char> {
        Plan::new(
            vec!['s', 'a', 'g'],
            vec![Action::new("east"), Action::new("north")],
            vec![0., -1., -3.],
        )
    }

    #[test]
    fn accessors() {
        let plan = plan();
        assert_eq!(plan.len(), 2);
        assert!(!plan.is_empty());
        assert_eq!(*plan.start_state(), 's');
        assert_eq!(*plan.goal_state(), 'g');
        assert_eq!(plan.total_reward(), -3.);
        assert_eq!(
            plan.steps().map(|(s, a)| (*s, a.name())).collect::<Vec<_>>(),
            vec![('s', "east"), ('a', "north")]
        );
    }

    #[test]
    fn display_lists_steps_then_goal() {
        assert_eq!(plan().to_string(), "'s' east\n'a' north\n'g'");
    }

    #[test]
    fn single_state_plan_is_empty() {
        let plan = Plan::new(vec!['g'], vec![], vec![0.]);
        assert!(plan.is_empty());
        assert_eq!(plan.total_reward(), 0.);
        assert_eq!(plan.to_string(), "'g'");
    }
}
