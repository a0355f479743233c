use crate::{
    mdp::{Action, ActionType, FactoredModel},
    search::TransitionSource,
    Result,
};
use std::fmt::{self, Debug, Formatter};

/// A single-agent domain: the declared action types and the model that
/// defines what executing them does.
pub struct SADomain<S> {
    action_types: Vec<Box<dyn ActionType<S>>>,
    model: FactoredModel<S>,
}

impl<S> SADomain<S> {
    pub fn new(model: FactoredModel<S>) -> Self {
        Self {
            action_types: Vec::new(),
            model,
        }
    }

    pub fn add_action_type(&mut self, action_type: Box<dyn ActionType<S>>) -> &mut Self {
        self.action_types.push(action_type);
        self
    }

    pub fn with_action_type(mut self, action_type: Box<dyn ActionType<S>>) -> Self {
        self.action_types.push(action_type);
        self
    }

    pub fn action_types(&self) -> &[Box<dyn ActionType<S>>] {
        &self.action_types
    }

    pub fn action_type(&self, name: &str) -> Option<&dyn ActionType<S>> {
        self.action_types
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    pub fn model(&self) -> &FactoredModel<S> {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut FactoredModel<S> {
        &mut self.model
    }
}

impl<S: 'static> Debug for SADomain<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("SADomain")
            .field("action_types", &self.action_types)
            .field("model", &self.model)
            .finish()
    }
}

impl<S: Clone> TransitionSource<S> for SADomain<S> {
    fn applicable_actions(&self, state: &S) -> Vec<Action> {
        self.action_types
            .iter()
            .flat_map(|t| t.applicable_actions(state))
            .collect()
    }

    fn successor(&self, state: &S, action: &Action) -> Result<(S, f64)> {
        let outcome = self.model.sample_transition(state, action)?;
        Ok((outcome.next_state, outcome.reward))
    }

    fn is_terminal(&self, state: &S) -> bool {
        self.model.terminal_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdp::{SampleStateModel, UniformCostRf, UniversalActionType};

    struct Walk;

    impl SampleStateModel<i32> for Walk {
        fn sample_state_transition(&self, state: &i32, action: &Action) -> Result<i32> {
            match action.name() {
                "left" => Ok(state - 1),
                "right" => Ok(state + 1),
                other => Err(crate::Error::transition(format!("unknown action {other}"))),
            }
        }
    }

    fn domain() -> SADomain<i32> {
        SADomain::new(FactoredModel::new(
            Box::new(Walk),
            Box::new(UniformCostRf::new()),
            Box::new(|s: &i32| s.abs() >= 2),
        ))
        .with_action_type(Box::new(UniversalActionType::new("left")))
        .with_action_type(Box::new(UniversalActionType::new("right")))
    }

    #[test]
    fn actions_come_from_all_action_types() {
        let domain = domain();
        assert_eq!(
            domain.applicable_actions(&0),
            vec![Action::new("left"), Action::new("right")]
        );
        assert!(domain.action_type("left").is_some());
        assert!(domain.action_type("up").is_none());
    }

    #[test]
    fn successor_and_terminal_go_through_the_model() {
        let domain = domain();
        assert_eq!(
            domain.successor(&0, &Action::new("right")).unwrap(),
            (1, -1.)
        );
        assert!(domain.is_terminal(&-2));
        assert!(!domain.is_terminal(&1));
        assert!(domain.successor(&0, &Action::new("up")).is_err());
    }
}
