mod best_first_search;
mod planner_builder;
mod search_engine;

pub use best_first_search::BestFirstSearch;
pub use planner_builder::PlannerBuilder;
pub use search_engine::{SearchEngineName, SearchResult};
