use crate::{
    config::PlannerConfig,
    mdp::{StateConditionTest, StateEquivalence, StructuralEquivalence},
    search::{
        BestFirstSearch, Evaluation, Heuristic, SearchLimits, TransitionSource, WeightedGreedy,
    },
    Error, Result,
};
use std::{
    fmt::{self, Debug, Formatter},
    hash::Hash,
    rc::Rc,
};

/// Assembles a [`BestFirstSearch`]. The transition source, goal test,
/// heuristic and state equivalence are mandatory; there are no defaults for
/// them. Without an explicit evaluation or cost weight the planner runs A*.
pub struct PlannerBuilder<S> {
    source: Option<Box<dyn TransitionSource<S>>>,
    goal: Option<Box<dyn StateConditionTest<S>>>,
    heuristic: Option<Box<dyn Heuristic<S>>>,
    evaluation: Option<Box<dyn Evaluation<S>>>,
    cost_weight: Option<f64>,
    equivalence: Option<Rc<dyn StateEquivalence<S>>>,
    limits: SearchLimits,
}

impl<S> Default for PlannerBuilder<S> {
    fn default() -> Self {
        Self {
            source: None,
            goal: None,
            heuristic: None,
            evaluation: None,
            cost_weight: None,
            equivalence: None,
            limits: SearchLimits::unlimited(),
        }
    }
}

impl<S: 'static> PlannerBuilder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transition_source(mut self, source: impl TransitionSource<S> + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn goal(mut self, goal: impl StateConditionTest<S> + 'static) -> Self {
        self.goal = Some(Box::new(goal));
        self
    }

    pub fn heuristic(mut self, heuristic: impl Heuristic<S> + 'static) -> Self {
        self.heuristic = Some(Box::new(heuristic));
        self
    }

    /// Use a custom evaluation. Cannot be combined with
    /// [`PlannerBuilder::cost_weight`].
    pub fn evaluation(mut self, evaluation: impl Evaluation<S> + 'static) -> Self {
        self.evaluation = Some(Box::new(evaluation));
        self
    }

    /// Use [`WeightedGreedy`] with the given weight, validated on build.
    pub fn cost_weight(mut self, cost_weight: f64) -> Self {
        self.cost_weight = Some(cost_weight);
        self
    }

    pub fn equivalence(mut self, equivalence: impl StateEquivalence<S> + 'static) -> Self {
        self.equivalence = Some(Rc::new(equivalence));
        self
    }

    /// Share an equivalence strategy with other components, e.g. a critic.
    pub fn shared_equivalence(mut self, equivalence: Rc<dyn StateEquivalence<S>>) -> Self {
        self.equivalence = Some(equivalence);
        self
    }

    pub fn limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Take the cost weight and search limits from a configuration.
    pub fn config(self, config: &PlannerConfig) -> Result<Self> {
        let limits = config.limits()?;
        Ok(self.cost_weight(config.cost_weight).limits(limits))
    }

    pub fn build(self) -> Result<BestFirstSearch<S>> {
        let source = self
            .source
            .ok_or_else(|| Error::configuration("no transition source given"))?;
        let goal = self
            .goal
            .ok_or_else(|| Error::configuration("no goal test given"))?;
        let heuristic = self
            .heuristic
            .ok_or_else(|| Error::configuration("no heuristic given"))?;
        let equivalence = self
            .equivalence
            .ok_or_else(|| Error::configuration("no state equivalence given"))?;
        let evaluation: Box<dyn Evaluation<S>> = match (self.evaluation, self.cost_weight) {
            (Some(_), Some(_)) => {
                return Err(Error::configuration(
                    "both an evaluation and a cost weight were given",
                ))
            }
            (Some(evaluation), None) => evaluation,
            (None, Some(cost_weight)) => Box::new(WeightedGreedy::new(cost_weight)?),
            (None, None) => Box::new(WeightedGreedy::astar()),
        };

        Ok(BestFirstSearch::new(
            source,
            goal,
            heuristic,
            evaluation,
            equivalence,
            self.limits,
        ))
    }
}

impl<S: Hash + Eq + 'static> PlannerBuilder<S> {
    /// Deduplicate states with their own `Hash` and `Eq` implementations.
    pub fn structural_equivalence(self) -> Self {
        self.equivalence(StructuralEquivalence::new())
    }
}

impl<S> Debug for PlannerBuilder<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("PlannerBuilder")
            .field("has_source", &self.source.is_some())
            .field("has_goal", &self.goal.is_some())
            .field("has_heuristic", &self.heuristic.is_some())
            .field("has_evaluation", &self.evaluation.is_some())
            .field("cost_weight", &self.cost_weight)
            .field("has_equivalence", &self.equivalence.is_some())
            .field("limits", &self.limits)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domains::{GraphDomain, GraphNode},
        search::ZeroHeuristic,
        test_utils::line_graph,
    };
    use std::time::Duration;

    fn complete() -> PlannerBuilder<GraphNode> {
        PlannerBuilder::new()
            .transition_source(line_graph())
            .goal(GraphDomain::goal("goal"))
            .heuristic(ZeroHeuristic::new())
            .structural_equivalence()
    }

    fn configuration_error(builder: PlannerBuilder<GraphNode>) -> String {
        match builder.build() {
            Err(Error::Configuration { message }) => message,
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }

    #[test]
    fn complete_builder_builds() {
        let planner = complete().build().unwrap();
        assert_eq!(planner.limits(), SearchLimits::unlimited());
    }

    #[test]
    fn missing_parts_are_configuration_errors() {
        let builder = PlannerBuilder::<GraphNode>::new()
            .goal(GraphDomain::goal("goal"))
            .heuristic(ZeroHeuristic::new())
            .structural_equivalence();
        assert_eq!(configuration_error(builder), "no transition source given");

        let builder = PlannerBuilder::new()
            .transition_source(line_graph())
            .heuristic(ZeroHeuristic::new())
            .structural_equivalence();
        assert_eq!(configuration_error(builder), "no goal test given");

        let builder = PlannerBuilder::new()
            .transition_source(line_graph())
            .goal(GraphDomain::goal("goal"))
            .structural_equivalence();
        assert_eq!(configuration_error(builder), "no heuristic given");

        let builder = PlannerBuilder::new()
            .transition_source(line_graph())
            .goal(GraphDomain::goal("goal"))
            .heuristic(ZeroHeuristic::new());
        assert_eq!(configuration_error(builder), "no state equivalence given");
    }

    #[test]
    fn invalid_cost_weight() {
        configuration_error(complete().cost_weight(1.5));
        configuration_error(complete().cost_weight(-0.1));
        configuration_error(complete().cost_weight(f64::NAN));
    }

    #[test]
    fn evaluation_and_cost_weight_exclude_each_other() {
        let builder = complete()
            .cost_weight(0.5)
            .evaluation(WeightedGreedy::greedy());
        assert_eq!(
            configuration_error(builder),
            "both an evaluation and a cost weight were given"
        );
    }

    #[test]
    fn config_sets_weight_and_limits() {
        let config = PlannerConfig::from_toml_str(
            r#"
            cost-weight = 0.5
            time-limit = "10s"
            max-expansions = 7
            "#,
        )
        .unwrap();
        let planner = complete().config(&config).unwrap().build().unwrap();
        assert_eq!(planner.limits().time_limit, Some(Duration::from_secs(10)));
        assert_eq!(planner.limits().max_expansions, Some(7));

        let config = config.with_cost_weight(3.);
        assert!(complete().config(&config).unwrap().build().is_err());
    }
}
