//! Evaluation functions order the open list of a best-first search. All
//! search variants share the same frontier and closed-set mechanics and only
//! differ in how they turn a freshly generated node into an F-value.

use crate::{
    mdp::Action,
    search::{HeuristicValue, SearchNode},
    Error, Result,
};

/// Everything known about a node when its F-value is computed.
#[derive(Debug, Clone, Copy)]
pub struct NodeEvaluation<'a, S> {
    /// The expanded node, `None` for the root.
    pub parent: Option<&'a SearchNode>,
    /// The action generating the node, `None` for the root.
    pub action: Option<&'a Action>,
    pub successor: &'a S,
    /// Immediate reward of the generating transition, 0 for the root.
    pub reward: f64,
    /// Reward accumulated from the root, i.e. the parent's g-value plus
    /// `reward`.
    pub cumulated_reward: f64,
    pub heuristic: HeuristicValue,
}

/// Computes the F-value of a node. The open list expands the node with the
/// largest F-value first.
pub trait Evaluation<S> {
    fn compute_f(&self, node: &NodeEvaluation<S>) -> f64;
}

impl<S, F> Evaluation<S> for F
where
    F: Fn(&NodeEvaluation<S>) -> f64,
{
    fn compute_f(&self, node: &NodeEvaluation<S>) -> f64 {
        self(node)
    }
}

/// `F = w * g + h` for a cost weight `0 <= w <= 1`. With `w = 1` this is A*
/// and optimal for admissible heuristics; with `w = 0` the accumulated reward
/// is ignored and the search is fully greedy. Values in between trade
/// optimality for reaching states favoured by the heuristic sooner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedGreedy {
    cost_weight: f64,
}

impl WeightedGreedy {
    pub fn new(cost_weight: f64) -> Result<Self> {
        if !(0. ..=1.).contains(&cost_weight) {
            return Err(Error::configuration(format!(
                "cost weight must be within [0, 1], got {}",
                cost_weight
            )));
        }
        Ok(Self { cost_weight })
    }

    pub fn astar() -> Self {
        Self { cost_weight: 1. }
    }

    pub fn greedy() -> Self {
        Self { cost_weight: 0. }
    }

    pub fn cost_weight(&self) -> f64 {
        self.cost_weight
    }
}

impl<S> Evaluation<S> for WeightedGreedy {
    fn compute_f(&self, node: &NodeEvaluation<S>) -> f64 {
        self.cost_weight * node.cumulated_reward + node.heuristic
    }
}
