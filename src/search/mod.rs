mod evaluation;
mod frontier;
pub mod heuristics;
mod plan;
mod plan_policy;
mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod termination_condition;
mod transition_source;
mod value_table;

pub use evaluation::{Evaluation, NodeEvaluation, WeightedGreedy};
pub use frontier::Frontier;
pub use heuristics::{Heuristic, HeuristicValue, ZeroHeuristic};
pub use plan::Plan;
pub use plan_policy::PlanPolicy;
pub use search_engines::{
    BestFirstSearch, PlannerBuilder, SearchEngineName, SearchResult,
};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use termination_condition::{SearchLimits, TerminationCondition};
pub use transition_source::TransitionSource;
pub use value_table::ValueTable;
