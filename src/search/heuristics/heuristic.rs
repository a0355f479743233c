/// Heuristic values share the reward scale of the search: they estimate the
/// reward still to be collected before reaching a goal, so with costs given
/// as negative rewards they are non-positive.
pub type HeuristicValue = f64;

/// A heuristic is a pure function of the state. It must not depend on the
/// search history; an inadmissible heuristic (one that overestimates the
/// reward still obtainable) costs optimality but is otherwise harmless.
pub trait Heuristic<S> {
    /// Evaluate the given state.
    fn evaluate(&self, state: &S) -> HeuristicValue;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> HeuristicValue,
{
    fn evaluate(&self, state: &S) -> HeuristicValue {
        self(state)
    }
}
