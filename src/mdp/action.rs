use internment::Intern;
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{self, Debug, Display, Formatter};

/// An [`Action`] is an action identifier together with its parameters, e.g.
/// `(move north)` or `(stack b1 b2)`. Names and parameters are interned, so
/// cloning and comparing actions is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    name: Intern<String>,
    parameters: SmallVec<[Intern<String>; 2]>,
}

impl Action {
    /// Create a parameterless action.
    pub fn new(name: &str) -> Self {
        Self {
            name: Intern::from_ref(name),
            parameters: SmallVec::new(),
        }
    }

    pub fn with_parameters<I, P>(name: &str, parameters: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Self {
            name: Intern::from_ref(name),
            parameters: parameters
                .into_iter()
                .map(|p| Intern::from_ref(p.as_ref()))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> impl Iterator<Item = &str> + '_ {
        self.parameters.iter().map(|p| p.as_str())
    }

    pub fn num_parameters(&self) -> usize {
        self.parameters.len()
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.parameters.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(
                f,
                "({} {})",
                self.name,
                self.parameters.iter().map(|p| p.as_str()).join(" ")
            )
        }
    }
}

/// An [`ActionType`] is a family of actions sharing a name, e.g. `stack`
/// with all its groundings. It is responsible for enumerating the actions
/// applicable in a state.
pub trait ActionType<S> {
    fn name(&self) -> &str;

    /// All the actions of this type that can be executed in the state.
    fn applicable_actions(&self, state: &S) -> Vec<Action>;
}

/// An action type with a single parameterless action that is applicable
/// everywhere.
#[derive(Debug, Clone)]
pub struct UniversalActionType {
    action: Action,
}

impl UniversalActionType {
    pub fn new(name: &str) -> Self {
        Self {
            action: Action::new(name),
        }
    }

    pub fn action(&self) -> &Action {
        &self.action
    }
}

impl<S> ActionType<S> for UniversalActionType {
    fn name(&self) -> &str {
        self.action.name()
    }

    fn applicable_actions(&self, _state: &S) -> Vec<Action> {
        vec![self.action.clone()]
    }
}

impl<S> Debug for dyn ActionType<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "ActionType({})", self.name())
    }
}
