//! This module implements deterministic best-first search. The order of
//! expansion is given by a pluggable [`Evaluation`], so the same engine runs
//! A*, greedy best-first search and everything in between.
//!
//! All values are rewards: accumulated rewards (g), heuristic estimates (h)
//! and F-values are larger for better nodes, and the node with the largest
//! F-value is expanded first. A better accumulated reward for a known state
//! replaces its back pointer unless the state is an ancestor of the node
//! being expanded, and puts it back on the open list only if its F-value
//! improved.

use crate::{
    mdp::{StateConditionTest, StateEquivalence},
    search::{
        Evaluation, Frontier, Heuristic, NodeEvaluation, NodeId, PlanPolicy, Plan,
        SearchLimits, SearchNode, SearchNodeStatus, SearchResult, SearchSpace, SearchStatistics,
        TerminationCondition, TransitionSource, ValueTable,
    },
    Result,
};
use std::{
    fmt::{self, Debug, Formatter},
    rc::Rc,
};
use tracing::{debug, info, trace};

/// Data kept from the last search until the next one or a call to
/// [`BestFirstSearch::reset_data`].
struct SearchData<S> {
    search_space: SearchSpace<S>,
    statistics: SearchStatistics,
    open_nodes: usize,
}

/// Deterministic best-first search planner. Build one with
/// [`crate::search::PlannerBuilder`].
pub struct BestFirstSearch<S> {
    source: Box<dyn TransitionSource<S>>,
    goal: Box<dyn StateConditionTest<S>>,
    heuristic: Box<dyn Heuristic<S>>,
    evaluation: Box<dyn Evaluation<S>>,
    equivalence: Rc<dyn StateEquivalence<S>>,
    limits: SearchLimits,
    last_search: Option<SearchData<S>>,
}

impl<S> BestFirstSearch<S> {
    pub(crate) fn new(
        source: Box<dyn TransitionSource<S>>,
        goal: Box<dyn StateConditionTest<S>>,
        heuristic: Box<dyn Heuristic<S>>,
        evaluation: Box<dyn Evaluation<S>>,
        equivalence: Rc<dyn StateEquivalence<S>>,
        limits: SearchLimits,
    ) -> Self {
        Self {
            source,
            goal,
            heuristic,
            evaluation,
            equivalence,
            limits,
            last_search: None,
        }
    }

    /// Forget everything about the last search.
    pub fn reset_data(&mut self) {
        self.last_search = None;
    }

    /// Best accumulated reward of every state generated by the last search.
    pub fn value_table(&self) -> Option<ValueTable<'_, S>> {
        self.last_search
            .as_ref()
            .map(|data| ValueTable::new(&data.search_space))
    }

    pub fn statistics(&self) -> Option<&SearchStatistics> {
        self.last_search.as_ref().map(|data| &data.statistics)
    }

    /// The search space of the last search, for inspection.
    pub fn search_space(&self) -> Option<&SearchSpace<S>> {
        self.last_search.as_ref().map(|data| &data.search_space)
    }

    /// Number of nodes still queued when the last search stopped.
    pub fn open_nodes(&self) -> Option<usize> {
        self.last_search.as_ref().map(|data| data.open_nodes)
    }

    /// States expanded by the last search, in expansion order. Goal and
    /// terminal states are popped but not expanded, so they never show up
    /// here.
    pub fn expanded_states(&self) -> Vec<&S> {
        match &self.last_search {
            Some(data) => data
                .search_space
                .expansion_log()
                .iter()
                .map(|&node_id| data.search_space.get_state(node_id))
                .collect(),
            None => vec![],
        }
    }

    pub fn equivalence(&self) -> &Rc<dyn StateEquivalence<S>> {
        &self.equivalence
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }
}

impl<S: Clone> BestFirstSearch<S> {
    /// A policy following `plan`, keyed by this planner's state equivalence.
    pub fn plan_policy(&self, plan: &Plan<S>) -> PlanPolicy<S> {
        PlanPolicy::new(plan, self.equivalence.clone())
    }

    /// Search for a plan from `initial_state` to a goal state. Data of the
    /// previous search is discarded first.
    ///
    /// # Errors
    ///
    /// Fails only if the transition source fails; the search is abandoned
    /// at that point and no search data is kept.
    pub fn plan_from_state(&mut self, initial_state: &S) -> Result<SearchResult<S>> {
        self.reset_data();

        let mut statistics = SearchStatistics::new();
        let mut termination = TerminationCondition::new(self.limits);
        let mut frontier = Frontier::new();
        let mut search_space = SearchSpace::new(initial_state.clone(), self.equivalence.clone());

        let root_h = self.heuristic.evaluate(initial_state);
        let root_f = self.evaluation.compute_f(&NodeEvaluation {
            parent: None,
            action: None,
            successor: initial_state,
            reward: 0.,
            cumulated_reward: 0.,
            heuristic: root_h,
        });
        statistics.increment_evaluated_nodes();
        let root_id = search_space.get_root_node_id();
        search_space.get_root_node_mut().open(0., root_h, root_f);
        frontier.push(root_id, root_f);
        info!(initial_heuristic_value = root_h);

        let result = loop {
            termination.log_if_needed();
            if let Some(result) =
                termination.should_terminate(statistics.expanded_nodes() as usize)
            {
                break result;
            }

            let Some(node_id) = frontier.pop() else {
                break SearchResult::Exhausted;
            };
            let node = search_space.get_node_mut(node_id);
            node.close();
            let g_value = node.get_g();
            statistics.register_heuristic_value(node.get_h());

            let state = search_space.get_state(node_id).clone();
            if self.goal.satisfies(&state) {
                break SearchResult::Success(search_space.extract_plan(node_id));
            }
            if self.source.is_terminal(&state) {
                trace!(node = node_id.id(), "terminal state, not expanding");
                statistics.increment_deadend_nodes();
                continue;
            }

            statistics.increment_expanded_nodes();
            search_space.log_expansion(node_id);
            self.expand(
                node_id,
                &state,
                g_value,
                &mut search_space,
                &mut frontier,
                &mut statistics,
            )?;
        };

        match &result {
            SearchResult::Success(plan) => {
                info!("plan found");
                info!(plan_length = plan.len(), plan_reward = plan.total_reward());
            }
            other => info!(outcome = ?NoPlan(other), "no plan found"),
        }
        statistics.finalise_search();
        termination.finalise();

        self.last_search = Some(SearchData {
            search_space,
            statistics,
            open_nodes: frontier.len(),
        });
        Ok(result)
    }

    /// Generate the children of `node_id`, opening new states and recording
    /// strictly better paths to known states. A known state is queued again
    /// only if its F-value improved.
    fn expand(
        &self,
        node_id: NodeId,
        state: &S,
        g_value: f64,
        search_space: &mut SearchSpace<S>,
        frontier: &mut Frontier,
        statistics: &mut SearchStatistics,
    ) -> Result<()> {
        let actions = self.source.applicable_actions(state);
        statistics.increment_generated_actions(actions.len());

        for action in actions {
            let (successor, reward) = self.source.successor(state, &action)?;
            let cumulated_reward = g_value + reward;

            match search_space.find_node(&successor) {
                None => {
                    let h_value = self.heuristic.evaluate(&successor);
                    let f_value = self.evaluation.compute_f(&NodeEvaluation {
                        parent: Some(search_space.get_node(node_id)),
                        action: Some(&action),
                        successor: &successor,
                        reward,
                        cumulated_reward,
                        heuristic: h_value,
                    });
                    statistics.increment_evaluated_nodes();
                    statistics.increment_generated_nodes(1);

                    let mut child_node = SearchNode::new_with_parent(node_id, action, reward);
                    child_node.open(cumulated_reward, h_value, f_value);
                    let child_id = search_space.insert_node(successor, child_node);
                    frontier.push(child_id, f_value);
                }
                Some(child_id) => {
                    let child_node = search_space.get_node(child_id);
                    if cumulated_reward <= child_node.get_g() {
                        continue;
                    }
                    // Back pointers stay acyclic: neither the root nor an
                    // ancestor of the expanded node is ever reparented.
                    if search_space.is_on_path_to_root(child_id, node_id) {
                        trace!(node = child_id.id(), "better path through a descendant");
                        continue;
                    }

                    let previous_status = child_node.get_status();
                    let previous_f = child_node.get_f();
                    let f_value = self.evaluation.compute_f(&NodeEvaluation {
                        parent: Some(search_space.get_node(node_id)),
                        action: Some(&action),
                        successor: search_space.get_state(child_id),
                        reward,
                        cumulated_reward,
                        heuristic: child_node.get_h(),
                    });
                    debug!(
                        node = child_id.id(),
                        old_g = child_node.get_g(),
                        new_g = cumulated_reward,
                        "found better path"
                    );

                    let child_node = search_space.get_node_mut(child_id);
                    child_node.update_path(node_id, action, reward, cumulated_reward, f_value);
                    // Only a better F-value moves the node in the expansion
                    // order.
                    if f_value > previous_f {
                        if previous_status == SearchNodeStatus::Closed {
                            child_node.reopen();
                            statistics.increment_reopened_nodes();
                        }
                        frontier.push(child_id, f_value);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Logs the non-success outcomes without requiring `S: Debug`.
struct NoPlan<'a, S>(&'a SearchResult<S>);

impl<S> Debug for NoPlan<'_, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.0 {
            SearchResult::Success(_) => write!(f, "Success"),
            SearchResult::Exhausted => write!(f, "Exhausted"),
            SearchResult::TimeLimitExceeded => write!(f, "TimeLimitExceeded"),
            SearchResult::ExpansionLimitExceeded => write!(f, "ExpansionLimitExceeded"),
            SearchResult::MemoryLimitExceeded => write!(f, "MemoryLimitExceeded"),
        }
    }
}

impl<S> Debug for BestFirstSearch<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BestFirstSearch")
            .field("limits", &self.limits)
            .field("has_search_data", &self.last_search.is_some())
            .finish_non_exhaustive()
    }
}
