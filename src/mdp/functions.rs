//! Reward and terminal functions of single-agent MDPs.

use crate::mdp::{Action, StateConditionTest};
use std::fmt::{self, Debug, Formatter};

/// Reward received for the transition `state --action--> next_state`. Costs
/// are expressed as negative rewards.
pub trait RewardFunction<S> {
    fn reward(&self, state: &S, action: &Action, next_state: &S) -> f64;
}

impl<S, F> RewardFunction<S> for F
where
    F: Fn(&S, &Action, &S) -> f64,
{
    fn reward(&self, state: &S, action: &Action, next_state: &S) -> f64 {
        self(state, action, next_state)
    }
}

/// Whether the agent can no longer act in a state.
pub trait TerminalFunction<S> {
    fn is_terminal(&self, state: &S) -> bool;
}

impl<S, F> TerminalFunction<S> for F
where
    F: Fn(&S) -> bool,
{
    fn is_terminal(&self, state: &S) -> bool {
        self(state)
    }
}

/// The same reward for every transition, -1 unless configured otherwise.
#[derive(Debug, Clone, Copy)]
pub struct UniformCostRf {
    reward: f64,
}

impl Default for UniformCostRf {
    fn default() -> Self {
        Self { reward: -1. }
    }
}

impl UniformCostRf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cost(cost: f64) -> Self {
        Self { reward: -cost }
    }
}

impl<S> RewardFunction<S> for UniformCostRf {
    fn reward(&self, _state: &S, _action: &Action, _next_state: &S) -> f64 {
        self.reward
    }
}

/// Returns `goal_reward` for transitions into a goal state and
/// `default_reward` for every other transition.
pub struct GoalBasedRf<S> {
    goal: Box<dyn StateConditionTest<S>>,
    goal_reward: f64,
    default_reward: f64,
}

impl<S> GoalBasedRf<S> {
    pub fn new(goal: Box<dyn StateConditionTest<S>>, goal_reward: f64, default_reward: f64) -> Self {
        Self {
            goal,
            goal_reward,
            default_reward,
        }
    }
}

impl<S> Debug for GoalBasedRf<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("GoalBasedRf")
            .field("goal_reward", &self.goal_reward)
            .field("default_reward", &self.default_reward)
            .finish_non_exhaustive()
    }
}

impl<S> RewardFunction<S> for GoalBasedRf<S> {
    fn reward(&self, _state: &S, _action: &Action, next_state: &S) -> f64 {
        if self.goal.satisfies(next_state) {
            self.goal_reward
        } else {
            self.default_reward
        }
    }
}

/// No state is terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTermination;

impl<S> TerminalFunction<S> for NullTermination {
    fn is_terminal(&self, _state: &S) -> bool {
        false
    }
}

/// Terminal exactly in the states satisfying a condition.
pub struct GoalConditionTf<S> {
    goal: Box<dyn StateConditionTest<S>>,
}

impl<S> GoalConditionTf<S> {
    pub fn new(goal: Box<dyn StateConditionTest<S>>) -> Self {
        Self { goal }
    }
}

impl<S> Debug for GoalConditionTf<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("GoalConditionTf").finish_non_exhaustive()
    }
}

impl<S> TerminalFunction<S> for GoalConditionTf<S> {
    fn is_terminal(&self, state: &S) -> bool {
        self.goal.satisfies(state)
    }
}
