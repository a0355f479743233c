use crate::{mdp::Action, Result};

/// The planner's view of a domain. It only ever needs one successor per
/// action, sampled or deterministic, never a full distribution.
///
/// Implementations must not rely on being called in any particular order
/// and must leave the states they are given untouched.
pub trait TransitionSource<S> {
    /// The domain actions that can be executed in `state`.
    fn applicable_actions(&self, state: &S) -> Vec<Action>;

    /// The successor of executing `action` in `state` and the reward
    /// received. An error aborts the search in progress.
    fn successor(&self, state: &S, action: &Action) -> Result<(S, f64)>;

    /// Terminal states are treated as if no action were executable in them.
    fn is_terminal(&self, state: &S) -> bool;
}
