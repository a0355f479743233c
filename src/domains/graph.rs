//! A domain given by an explicit directed graph. Every edge is an action
//! with a fixed reward; nodes can be marked terminal and carry a heuristic
//! estimate.

use crate::{
    mdp::{Action, EqualsCondition},
    search::{Heuristic, HeuristicValue, TransitionSource},
    Error, Result,
};
use internment::Intern;
use std::{
    collections::{HashMap, HashSet},
    fmt::{self, Display, Formatter},
};

/// A node of a [`GraphDomain`], identified by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphNode(Intern<String>);

impl GraphNode {
    pub fn new(name: &str) -> Self {
        Self(Intern::from_ref(name))
    }

    pub fn name(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for GraphNode {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Display for GraphNode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Edge {
    action: Action,
    target: GraphNode,
    reward: f64,
}

#[derive(Debug, Clone, Default)]
pub struct GraphDomain {
    edges: HashMap<GraphNode, Vec<Edge>>,
    terminal_nodes: HashSet<GraphNode>,
    heuristic: GraphHeuristic,
}

impl GraphDomain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge whose action is `(go <to>)`.
    pub fn add_edge(&mut self, from: &str, to: &str, reward: f64) -> &mut Self {
        self.add_labelled_edge(from, Action::with_parameters("go", [to]), to, reward)
    }

    /// Add an edge with an explicit action. Actions leaving the same node
    /// should be distinct; the first edge matching an action wins.
    pub fn add_labelled_edge(
        &mut self,
        from: &str,
        action: Action,
        to: &str,
        reward: f64,
    ) -> &mut Self {
        self.edges.entry(from.into()).or_default().push(Edge {
            action,
            target: to.into(),
            reward,
        });
        self
    }

    pub fn set_terminal(&mut self, node: &str) -> &mut Self {
        self.terminal_nodes.insert(node.into());
        self
    }

    pub fn set_heuristic(&mut self, node: &str, value: HeuristicValue) -> &mut Self {
        self.heuristic.values.insert(node.into(), value);
        self
    }

    /// The heuristic estimates set on this graph, 0 for unset nodes.
    pub fn heuristic(&self) -> GraphHeuristic {
        self.heuristic.clone()
    }

    pub fn goal(node: &str) -> EqualsCondition<GraphNode> {
        EqualsCondition::new(node.into())
    }
}

impl TransitionSource<GraphNode> for GraphDomain {
    fn applicable_actions(&self, state: &GraphNode) -> Vec<Action> {
        self.edges
            .get(state)
            .map(|edges| edges.iter().map(|e| e.action.clone()).collect())
            .unwrap_or_default()
    }

    fn successor(&self, state: &GraphNode, action: &Action) -> Result<(GraphNode, f64)> {
        self.edges
            .get(state)
            .and_then(|edges| edges.iter().find(|e| e.action == *action))
            .map(|edge| (edge.target, edge.reward))
            .ok_or_else(|| {
                Error::transition(format!("no edge {} leaving node {}", action, state))
            })
    }

    fn is_terminal(&self, state: &GraphNode) -> bool {
        self.terminal_nodes.contains(state)
    }
}

/// Table-driven heuristic of a [`GraphDomain`].
#[derive(Debug, Clone, Default)]
pub struct GraphHeuristic {
    values: HashMap<GraphNode, HeuristicValue>,
}

impl Heuristic<GraphNode> for GraphHeuristic {
    fn evaluate(&self, state: &GraphNode) -> HeuristicValue {
        self.values.get(state).copied().unwrap_or(0.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str) -> GraphNode {
        GraphNode::new(name)
    }

    #[test]
    fn edges_become_actions() {
        let mut graph = GraphDomain::new();
        graph.add_edge("s", "a", -1.).add_edge("s", "b", -2.);
        assert_eq!(
            graph.applicable_actions(&node("s")),
            vec![
                Action::with_parameters("go", ["a"]),
                Action::with_parameters("go", ["b"])
            ]
        );
        assert!(graph.applicable_actions(&node("a")).is_empty());
        assert_eq!(
            graph
                .successor(&node("s"), &Action::with_parameters("go", ["b"]))
                .unwrap(),
            (node("b"), -2.)
        );
    }

    #[test]
    fn unknown_action_is_a_transition_error() {
        let mut graph = GraphDomain::new();
        graph.add_edge("s", "a", -1.);
        let err = graph
            .successor(&node("a"), &Action::with_parameters("go", ["s"]))
            .unwrap_err();
        assert!(matches!(err, Error::Transition { .. }));
    }

    #[test]
    fn terminal_and_heuristic() {
        let mut graph = GraphDomain::new();
        graph.set_terminal("t").set_heuristic("a", -3.);
        assert!(graph.is_terminal(&node("t")));
        assert!(!graph.is_terminal(&node("a")));
        let h = graph.heuristic();
        assert_eq!(h.evaluate(&node("a")), -3.);
        assert_eq!(h.evaluate(&node("t")), 0.);
    }
}
