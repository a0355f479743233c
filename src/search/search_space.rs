use crate::{
    mdp::{StateEquivalence, StateIndex},
    search::{NodeId, Plan, SearchNode},
};
use segvec::{Linear, SegVec};
use std::{
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

/// A [`SearchSpace`] is a data structure for managing the states and nodes
/// during a search. States are deduplicated with a [`StateEquivalence`], so
/// each equivalence class owns exactly one node and the node id doubles as
/// the index of its state.
pub struct SearchSpace<S> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    states: StateIndex<S>,
    expansion_log: Vec<NodeId>,
}

impl<S> SearchSpace<S> {
    pub fn new(initial_state: S, equivalence: Rc<dyn StateEquivalence<S>>) -> Self {
        let mut nodes = SegVec::new();
        let mut states = StateIndex::new(equivalence);

        let (index, _) = states.insert(initial_state);
        nodes.push(SearchNode::new_root());

        Self {
            root_node_id: NodeId::new(index),
            nodes,
            states,
            expansion_log: Vec::new(),
        }
    }

    /// The node of the equivalence class of `state`, if one was registered.
    pub fn find_node(&self, state: &S) -> Option<NodeId> {
        self.states.find(state).map(NodeId::new)
    }

    /// Register a node for a state that has no node yet. Inserting a state
    /// that is already known returns the existing node and drops `node`.
    pub fn insert_node(&mut self, state: S, node: SearchNode) -> NodeId {
        let (index, is_new) = self.states.insert(state);
        if is_new {
            debug_assert_eq!(index, self.nodes.len());
            self.nodes.push(node);
        }
        NodeId::new(index)
    }

    /// Remember that the node was expanded, in expansion order.
    pub fn log_expansion(&mut self, node_id: NodeId) {
        self.expansion_log.push(node_id);
    }

    pub fn expansion_log(&self) -> &[NodeId] {
        &self.expansion_log
    }

    #[inline(always)]
    pub fn get_root_node_id(&self) -> NodeId {
        self.root_node_id
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.id())
    }

    /// Whether `ancestor_id` lies on the back-pointer chain from `node_id` to
    /// the root, `node_id` itself included. Making such a node a child of
    /// `node_id` would close a cycle.
    pub fn is_on_path_to_root(&self, ancestor_id: NodeId, node_id: NodeId) -> bool {
        let mut current_id = Some(node_id);
        while let Some(id) = current_id {
            if id == ancestor_id {
                return true;
            }
            current_id = self.get_node(id).get_parent_id();
        }
        false
    }

    /// All registered nodes with their states, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &S, &SearchNode)> {
        self.states
            .iter()
            .enumerate()
            .map(move |(i, state)| (NodeId::new(i), state, self.get_node(NodeId::new(i))))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn equivalence(&self) -> &Rc<dyn StateEquivalence<S>> {
        self.states.equivalence()
    }
}

impl<S: Clone> SearchSpace<S> {
    /// Walk the back pointers from `goal_id` to the root and return the path
    /// in start to goal order. Cumulated rewards are summed along this path;
    /// they can be better than the recorded g-values of nodes that were not
    /// expanded again after a better path to one of their ancestors was
    /// found.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan<S> {
        let mut states = vec![];
        let mut actions = vec![];
        let mut rewards = vec![];
        let mut current_id = goal_id;
        loop {
            let node = self.get_node(current_id);
            states.push(self.get_state(current_id).clone());
            match (node.get_parent_id(), node.get_action()) {
                (Some(parent_id), Some(action)) => {
                    actions.push(action.clone());
                    rewards.push(node.get_reward());
                    current_id = parent_id;
                }
                _ => break,
            }
        }
        states.reverse();
        actions.reverse();

        let cumulated_rewards = std::iter::once(0.)
            .chain(rewards.iter().rev().scan(0., |total, reward| {
                *total += reward;
                Some(*total)
            }))
            .collect();
        Plan::new(states, actions, cumulated_rewards)
    }
}

impl<S: Debug> Debug for SearchSpace<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("SearchSpace")
            .field("root_node_id", &self.root_node_id)
            .field("num_nodes", &self.nodes.len())
            .field("states", &self.states)
            .finish_non_exhaustive()
    }
}
