//! The MDP model layer: actions, state equivalence, reward and terminal
//! functions, transition models and domains.

mod action;
mod condition;
mod domain;
mod functions;
mod model;
mod policy;
pub mod state_hashing;
pub mod stochastic_games;

pub use action::{Action, ActionType, UniversalActionType};
pub use condition::{EqualsCondition, StateConditionTest};
pub use domain::SADomain;
pub use functions::{
    GoalBasedRf, GoalConditionTf, NullTermination, RewardFunction, TerminalFunction,
    UniformCostRf,
};
pub use model::{
    deterministic_transition, EnvironmentOutcome, FactoredModel, FullStateModel,
    SampleStateModel, StateTransitionProb, TransitionProb,
};
pub use policy::Policy;
pub use state_hashing::{
    ProjectedEquivalence, StateEquivalence, StateIndex, StateMap, StructuralEquivalence,
};
