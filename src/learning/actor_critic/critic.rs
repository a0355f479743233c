use crate::mdp::{Action, ActionType};

/// The critique of one transition `state --action--> next_state`. Positive
/// critiques mean the transition went better than expected.
#[derive(Debug, Clone, PartialEq)]
pub struct CritiqueResult<S> {
    pub state: S,
    pub action: Action,
    pub next_state: S,
    pub critique: f64,
}

impl<S> CritiqueResult<S> {
    pub fn new(state: S, action: Action, next_state: S, critique: f64) -> Self {
        Self {
            state,
            action,
            next_state,
            critique,
        }
    }
}

pub trait Critic<S> {
    /// Make the critic aware of actions that are not declared by the domain
    /// but may show up in the transitions it is asked to critique.
    fn add_non_domain_referenced_action(&mut self, action_type: Box<dyn ActionType<S>>);

    fn initialize_episode(&mut self, state: &S);

    fn end_episode(&mut self);

    /// Critique the transition and update the critic's estimates with it.
    fn critique_and_update(&mut self, state: &S, action: &Action, next_state: &S)
        -> CritiqueResult<S>;

    /// Forget everything learned so far.
    fn reset_data(&mut self);
}
