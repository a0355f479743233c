use crate::{
    learning::{
        actor_critic::{Critic, CritiqueResult},
        ConstantValueFunction, ValueFunction, ValueFunctionInitialization,
    },
    mdp::{Action, ActionType, RewardFunction, StateEquivalence, StateMap, TerminalFunction},
    Error, Result,
};
use std::{
    fmt::{self, Debug, Formatter},
    rc::Rc,
};
use tracing::trace;

/// Tabular TD(lambda) critic over state values. The critique of a
/// transition is its TD error `r + gamma * V(s') - V(s)`, with `V(s') = 0`
/// for terminal `s'`. Eligibility traces are replacing traces and are
/// cleared at the start and end of every episode.
pub struct TdLambdaCritic<S> {
    reward_function: Box<dyn RewardFunction<S>>,
    terminal_function: Box<dyn TerminalFunction<S>>,
    discount: f64,
    learning_rate: f64,
    lambda: f64,
    value_initialization: Box<dyn ValueFunctionInitialization<S>>,
    values: StateMap<S, f64>,
    traces: StateMap<S, f64>,
    non_domain_action_types: Vec<Box<dyn ActionType<S>>>,
}

impl<S> TdLambdaCritic<S> {
    /// # Errors
    ///
    /// Fails with [`Error::Configuration`] unless `discount` and `lambda`
    /// are within `[0, 1]` and `learning_rate` is within `(0, 1]`.
    pub fn new(
        reward_function: Box<dyn RewardFunction<S>>,
        terminal_function: Box<dyn TerminalFunction<S>>,
        discount: f64,
        learning_rate: f64,
        lambda: f64,
        equivalence: Rc<dyn StateEquivalence<S>>,
    ) -> Result<Self> {
        if !(0. ..=1.).contains(&discount) {
            return Err(Error::configuration(format!(
                "discount must be within [0, 1], got {}",
                discount
            )));
        }
        if !(learning_rate > 0. && learning_rate <= 1.) {
            return Err(Error::configuration(format!(
                "learning rate must be within (0, 1], got {}",
                learning_rate
            )));
        }
        if !(0. ..=1.).contains(&lambda) {
            return Err(Error::configuration(format!(
                "lambda must be within [0, 1], got {}",
                lambda
            )));
        }
        Ok(Self {
            reward_function,
            terminal_function,
            discount,
            learning_rate,
            lambda,
            value_initialization: Box::new(ConstantValueFunction::default()),
            values: StateMap::new(equivalence.clone()),
            traces: StateMap::new(equivalence),
            non_domain_action_types: Vec::new(),
        })
    }

    /// Value of states the critic has not updated yet, 0 by default.
    pub fn with_value_initialization(
        mut self,
        value_initialization: Box<dyn ValueFunctionInitialization<S>>,
    ) -> Self {
        self.value_initialization = value_initialization;
        self
    }

    pub fn non_domain_action_types(&self) -> &[Box<dyn ActionType<S>>] {
        &self.non_domain_action_types
    }

    /// Number of states with a learned value.
    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    /// Current eligibility of `state`, 0 if it has no trace.
    pub fn eligibility(&self, state: &S) -> f64 {
        self.traces.get(state).copied().unwrap_or(0.)
    }
}

impl<S> ValueFunction<S> for TdLambdaCritic<S> {
    fn value(&self, state: &S) -> f64 {
        match self.values.get(state) {
            Some(&value) => value,
            None => self.value_initialization.value(state),
        }
    }
}

impl<S: Clone> Critic<S> for TdLambdaCritic<S> {
    fn add_non_domain_referenced_action(&mut self, action_type: Box<dyn ActionType<S>>) {
        self.non_domain_action_types.push(action_type);
    }

    fn initialize_episode(&mut self, _state: &S) {
        self.traces.clear();
    }

    fn end_episode(&mut self) {
        self.traces.clear();
    }

    fn critique_and_update(
        &mut self,
        state: &S,
        action: &Action,
        next_state: &S,
    ) -> CritiqueResult<S> {
        let reward = self.reward_function.reward(state, action, next_state);
        let next_value = if self.terminal_function.is_terminal(next_state) {
            0.
        } else {
            self.value(next_state)
        };
        let td_error = reward + self.discount * next_value - self.value(state);
        trace!(reward, td_error);

        *self.traces.get_or_insert_with(state.clone(), || 0.) = 1.;

        let decay = self.discount * self.lambda;
        for (traced_state, eligibility) in self.traces.iter_mut() {
            let initial_value = self.value_initialization.value(traced_state);
            *self
                .values
                .get_or_insert_with(traced_state.clone(), || initial_value) +=
                self.learning_rate * td_error * *eligibility;
            *eligibility *= decay;
        }

        CritiqueResult::new(state.clone(), action.clone(), next_state.clone(), td_error)
    }

    fn reset_data(&mut self) {
        self.values.clear();
        self.traces.clear();
    }
}

impl<S> Debug for TdLambdaCritic<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("TdLambdaCritic")
            .field("discount", &self.discount)
            .field("learning_rate", &self.learning_rate)
            .field("lambda", &self.lambda)
            .field("num_values", &self.values.len())
            .field("non_domain_action_types", &self.non_domain_action_types)
            .finish_non_exhaustive()
    }
}
