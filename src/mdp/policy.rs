use crate::mdp::Action;

/// A (deterministic) policy that may only be defined on part of the state
/// space.
pub trait Policy<S> {
    /// The action to take in `state`, or `None` if the policy has no
    /// information about it.
    fn action(&self, state: &S) -> Option<Action>;

    fn is_defined_for(&self, state: &S) -> bool {
        self.action(state).is_some()
    }
}
