use crate::{
    search::{Plan, WeightedGreedy},
    Result,
};

/// Outcome of one search. Only construction problems and failing transition
/// sources are errors; every way a well-formed search can end is a variant
/// here.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<S> {
    /// The search reached a goal state. The plan is empty if the start
    /// state already is a goal.
    Success(Plan<S>),
    /// The frontier ran empty without reaching a goal, no goal state is
    /// reachable from the start state.
    Exhausted,
    /// The search ran out of time
    TimeLimitExceeded,
    /// The search expanded as many nodes as it was allowed to
    ExpansionLimitExceeded,
    /// The search ran out of memory
    MemoryLimitExceeded,
}

impl<S> SearchResult<S> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn plan(&self) -> Option<&Plan<S>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn into_plan(self) -> Option<Plan<S>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            _ => None,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "A*, optimal for admissible heuristics.")]
    Astar,
    #[clap(help = "Greedy best-first search, ordered by the heuristic only.")]
    Greedy,
    #[clap(
        help = "Weighted greedy search, the accumulated reward is scaled by \
        the configured cost weight."
    )]
    WeightedGreedy,
}

impl SearchEngineName {
    /// The evaluation used by this engine. `cost_weight` is only used by
    /// [`SearchEngineName::WeightedGreedy`].
    pub fn evaluation(&self, cost_weight: f64) -> Result<WeightedGreedy> {
        match self {
            SearchEngineName::Astar => Ok(WeightedGreedy::astar()),
            SearchEngineName::Greedy => Ok(WeightedGreedy::greedy()),
            SearchEngineName::WeightedGreedy => WeightedGreedy::new(cost_weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdp::Action;

    #[test]
    fn plan_accessors() {
        let plan = Plan::new(vec![0, 1], vec![Action::new("inc")], vec![0., -1.]);
        let result = SearchResult::Success(plan.clone());
        assert!(result.is_success());
        assert_eq!(result.plan(), Some(&plan));
        assert_eq!(result.into_plan(), Some(plan));

        let result: SearchResult<i32> = SearchResult::Exhausted;
        assert!(!result.is_success());
        assert_eq!(result.plan(), None);
    }

    #[test]
    fn engine_names_pick_the_weight() {
        assert_eq!(
            SearchEngineName::Astar.evaluation(0.3).unwrap().cost_weight(),
            1.
        );
        assert_eq!(
            SearchEngineName::Greedy.evaluation(0.3).unwrap().cost_weight(),
            0.
        );
        assert_eq!(
            SearchEngineName::WeightedGreedy
                .evaluation(0.3)
                .unwrap()
                .cost_weight(),
            0.3
        );
        assert!(SearchEngineName::WeightedGreedy.evaluation(2.).is_err());
    }
}
