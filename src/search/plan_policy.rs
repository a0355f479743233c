use crate::{
    mdp::{Action, Policy, StateEquivalence, StateMap},
    search::Plan,
};
use std::rc::Rc;

/// Follows a plan: in a state visited by the plan it returns the action the
/// plan takes there, elsewhere (including the goal state) it is undefined.
#[derive(Debug)]
pub struct PlanPolicy<S> {
    actions: StateMap<S, Action>,
}

impl<S: Clone> PlanPolicy<S> {
    pub fn new(plan: &Plan<S>, equivalence: Rc<dyn StateEquivalence<S>>) -> Self {
        let mut actions = StateMap::new(equivalence);
        for (state, action) in plan.steps() {
            // keep the first action if the plan revisits a state
            actions.get_or_insert_with(state.clone(), || action.clone());
        }
        Self { actions }
    }
}

impl<S> Policy<S> for PlanPolicy<S> {
    fn action(&self, state: &S) -> Option<Action> {
        self.actions.get(state).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdp::StructuralEquivalence;

    #[test]
    fn defined_on_plan_states_only() {
        let plan = Plan::new(
            vec![0, 1, 2],
            vec![Action::new("inc"), Action::new("inc")],
            vec![0., -1., -2.],
        );
        let policy = PlanPolicy::new(&plan, Rc::new(StructuralEquivalence::new()));
        assert_eq!(policy.action(&0), Some(Action::new("inc")));
        assert_eq!(policy.action(&1), Some(Action::new("inc")));
        assert!(!policy.is_defined_for(&2));
        assert!(!policy.is_defined_for(&7));
    }
}
