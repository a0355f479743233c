//! Transition models. A [`FactoredModel`] is composed of a state model,
//! which only knows how states change, and separate reward and terminal
//! functions that label the transitions.

use crate::{
    mdp::{Action, RewardFunction, TerminalFunction},
    Error, Result,
};
use std::fmt::{self, Debug, Formatter};

/// A successor state together with its probability.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTransitionProb<S> {
    pub state: S,
    pub probability: f64,
}

impl<S> StateTransitionProb<S> {
    pub fn new(state: S, probability: f64) -> Self {
        Self { state, probability }
    }
}

/// The full outcome of one transition: `state --action--> next_state`, the
/// reward received and whether `next_state` is terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentOutcome<S> {
    pub state: S,
    pub action: Action,
    pub next_state: S,
    pub reward: f64,
    pub terminated: bool,
}

/// An [`EnvironmentOutcome`] and its probability.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionProb<S> {
    pub probability: f64,
    pub outcome: EnvironmentOutcome<S>,
}

/// A state model that can only sample successors.
pub trait SampleStateModel<S> {
    fn sample_state_transition(&self, state: &S, action: &Action) -> Result<S>;

    /// The enumerating view of this model, if it has one.
    fn as_full(&self) -> Option<&dyn FullStateModel<S>> {
        None
    }
}

/// A state model that can also enumerate the successor distribution. The
/// returned list only needs to contain successors with non-zero
/// probability.
pub trait FullStateModel<S>: SampleStateModel<S> {
    fn state_transitions(&self, state: &S, action: &Action)
        -> Result<Vec<StateTransitionProb<S>>>;
}

/// Enumerate the distribution of a deterministic model by sampling it once.
pub fn deterministic_transition<S>(
    model: &dyn SampleStateModel<S>,
    state: &S,
    action: &Action,
) -> Result<Vec<StateTransitionProb<S>>> {
    let next_state = model.sample_state_transition(state, action)?;
    Ok(vec![StateTransitionProb::new(next_state, 1.)])
}

pub struct FactoredModel<S> {
    state_model: Box<dyn SampleStateModel<S>>,
    reward_function: Box<dyn RewardFunction<S>>,
    terminal_function: Box<dyn TerminalFunction<S>>,
}

impl<S> FactoredModel<S> {
    pub fn new(
        state_model: Box<dyn SampleStateModel<S>>,
        reward_function: Box<dyn RewardFunction<S>>,
        terminal_function: Box<dyn TerminalFunction<S>>,
    ) -> Self {
        Self {
            state_model,
            reward_function,
            terminal_function,
        }
    }

    pub fn use_reward_function(&mut self, reward_function: Box<dyn RewardFunction<S>>) {
        self.reward_function = reward_function;
    }

    pub fn use_terminal_function(&mut self, terminal_function: Box<dyn TerminalFunction<S>>) {
        self.terminal_function = terminal_function;
    }

    pub fn state_model(&self) -> &dyn SampleStateModel<S> {
        self.state_model.as_ref()
    }

    pub fn reward_function(&self) -> &dyn RewardFunction<S> {
        self.reward_function.as_ref()
    }

    pub fn terminal_function(&self) -> &dyn TerminalFunction<S> {
        self.terminal_function.as_ref()
    }

    pub fn terminal_state(&self, state: &S) -> bool {
        self.terminal_function.is_terminal(state)
    }
}

impl<S: Clone> FactoredModel<S> {
    /// Sample a successor and label it with reward and terminal flag.
    pub fn sample_transition(&self, state: &S, action: &Action) -> Result<EnvironmentOutcome<S>> {
        let next_state = self.state_model.sample_state_transition(state, action)?;
        Ok(self.outcome(state, action, next_state))
    }

    /// Enumerate all outcomes of executing `action` in `state`. Fails with
    /// [`Error::ModelCapability`] if the state model can only sample.
    pub fn transitions(&self, state: &S, action: &Action) -> Result<Vec<TransitionProb<S>>> {
        let full_model = self.state_model.as_full().ok_or_else(|| {
            Error::model_capability(
                "cannot enumerate the transition distribution, the state model can only sample",
            )
        })?;

        Ok(full_model
            .state_transitions(state, action)?
            .into_iter()
            .map(|stp| TransitionProb {
                probability: stp.probability,
                outcome: self.outcome(state, action, stp.state),
            })
            .collect())
    }

    fn outcome(&self, state: &S, action: &Action, next_state: S) -> EnvironmentOutcome<S> {
        let reward = self.reward_function.reward(state, action, &next_state);
        let terminated = self.terminal_function.is_terminal(&next_state);
        EnvironmentOutcome {
            state: state.clone(),
            action: action.clone(),
            next_state,
            reward,
            terminated,
        }
    }
}

impl<S> Debug for FactoredModel<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("FactoredModel").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdp::{NullTermination, UniformCostRf};

    /// Counter that moves up by one, sample-only.
    struct Increment;

    impl SampleStateModel<i32> for Increment {
        fn sample_state_transition(&self, state: &i32, _action: &Action) -> Result<i32> {
            Ok(state + 1)
        }
    }

    /// Counter that moves up or down with equal probability.
    struct Drift;

    impl SampleStateModel<i32> for Drift {
        fn sample_state_transition(&self, state: &i32, _action: &Action) -> Result<i32> {
            Ok(state + 1)
        }

        fn as_full(&self) -> Option<&dyn FullStateModel<i32>> {
            Some(self)
        }
    }

    impl FullStateModel<i32> for Drift {
        fn state_transitions(
            &self,
            state: &i32,
            _action: &Action,
        ) -> Result<Vec<StateTransitionProb<i32>>> {
            Ok(vec![
                StateTransitionProb::new(state + 1, 0.5),
                StateTransitionProb::new(state - 1, 0.5),
            ])
        }
    }

    fn model(state_model: Box<dyn SampleStateModel<i32>>) -> FactoredModel<i32> {
        FactoredModel::new(
            state_model,
            Box::new(UniformCostRf::new()),
            Box::new(|s: &i32| *s >= 3),
        )
    }

    #[test]
    fn sample_transition_labels_outcome() {
        let model = model(Box::new(Increment));
        let step = Action::new("step");
        let outcome = model.sample_transition(&1, &step).unwrap();
        assert_eq!(outcome.next_state, 2);
        assert_eq!(outcome.reward, -1.);
        assert!(!outcome.terminated);

        let outcome = model.sample_transition(&2, &step).unwrap();
        assert!(outcome.terminated);
        assert!(model.terminal_state(&3));
    }

    #[test]
    fn enumeration_requires_full_model() {
        let model = model(Box::new(Increment));
        let err = model.transitions(&0, &Action::new("step")).unwrap_err();
        assert!(matches!(err, Error::ModelCapability { .. }));
    }

    #[test]
    fn enumeration_labels_every_outcome() {
        let model = model(Box::new(Drift));
        let transitions = model.transitions(&2, &Action::new("step")).unwrap();
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].outcome.next_state, 3);
        assert!(transitions[0].outcome.terminated);
        assert_eq!(transitions[1].outcome.next_state, 1);
        assert!(!transitions[1].outcome.terminated);
        let total: f64 = transitions.iter().map(|t| t.probability).sum();
        assert_eq!(total, 1.);
    }

    #[test]
    fn reward_and_terminal_functions_can_be_swapped() {
        let mut model = model(Box::new(Increment));
        model.use_reward_function(Box::new(UniformCostRf::with_cost(3.)));
        model.use_terminal_function(Box::new(NullTermination));
        let outcome = model.sample_transition(&5, &Action::new("step")).unwrap();
        assert_eq!(outcome.reward, -3.);
        assert!(!outcome.terminated);
    }

    #[test]
    fn deterministic_helper_samples_once() {
        let transitions = deterministic_transition(&Increment, &4, &Action::new("step")).unwrap();
        assert_eq!(transitions, vec![StateTransitionProb::new(5, 1.)]);
    }
}
