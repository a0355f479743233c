//! Transition dynamics of stochastic games, where every agent picks an action
//! and the world reacts to the joint choice.

use crate::{
    mdp::{Action, StateTransitionProb},
    Result,
};
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};

/// One action per agent, indexed by agent position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JointAction {
    actions: SmallVec<[Action; 4]>,
}

impl JointAction {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn action(&self, agent: usize) -> Option<&Action> {
        self.actions.get(agent)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn num_agents(&self) -> usize {
        self.actions.len()
    }
}

impl Display for JointAction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.actions.iter().join(";"))
    }
}

pub trait JointActionModel<S> {
    /// Sample the state reached by executing `joint_action` in `state`.
    fn sample(&self, state: &S, joint_action: &JointAction) -> Result<S>;

    /// The distribution over successor states. Only successors with non-zero
    /// probability need to be listed.
    fn state_transitions(
        &self,
        state: &S,
        joint_action: &JointAction,
    ) -> Result<Vec<StateTransitionProb<S>>>;
}

/// The distribution of a deterministic joint-action model: one successor,
/// obtained from [`JointActionModel::sample`], with probability 1.
pub fn deterministic_joint_transition<S>(
    model: &dyn JointActionModel<S>,
    state: &S,
    joint_action: &JointAction,
) -> Result<Vec<StateTransitionProb<S>>> {
    let next_state = model.sample(state, joint_action)?;
    Ok(vec![StateTransitionProb::new(next_state, 1.)])
}
