use crate::mdp::Action;

/// An estimate of the expected return from a state.
pub trait ValueFunction<S> {
    fn value(&self, state: &S) -> f64;
}

/// Initial values for learners that estimate state and action values.
pub trait ValueFunctionInitialization<S>: ValueFunction<S> {
    fn q_value(&self, state: &S, action: &Action) -> f64;
}

/// The same value for every state and action, 0 by default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConstantValueFunction {
    value: f64,
}

impl ConstantValueFunction {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl<S> ValueFunction<S> for ConstantValueFunction {
    fn value(&self, _state: &S) -> f64 {
        self.value
    }
}

impl<S> ValueFunctionInitialization<S> for ConstantValueFunction {
    fn q_value(&self, _state: &S, _action: &Action) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_everywhere() {
        let init = ConstantValueFunction::new(2.5);
        assert_eq!(init.value(&"s"), 2.5);
        assert_eq!(init.q_value(&"s", &Action::new("a")), 2.5);
        assert_eq!(ValueFunction::<i32>::value(&ConstantValueFunction::default(), &1), 0.);
    }
}
