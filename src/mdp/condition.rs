/// A predicate over states, used as a goal test by the planners and as the
/// basis of goal-shaped reward and terminal functions.
pub trait StateConditionTest<S> {
    fn satisfies(&self, state: &S) -> bool;
}

impl<S, F> StateConditionTest<S> for F
where
    F: Fn(&S) -> bool,
{
    fn satisfies(&self, state: &S) -> bool {
        self(state)
    }
}

/// Satisfied by every state equal to one fixed state.
#[derive(Debug, Clone)]
pub struct EqualsCondition<S> {
    target: S,
}

impl<S> EqualsCondition<S> {
    pub fn new(target: S) -> Self {
        Self { target }
    }
}

impl<S: PartialEq> StateConditionTest<S> for EqualsCondition<S> {
    fn satisfies(&self, state: &S) -> bool {
        *state == self.target
    }
}
