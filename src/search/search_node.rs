use crate::{mdp::Action, search::HeuristicValue};

/// Stable handle of a node in a [`crate::search::SearchSpace`]. Node ids are
/// only meaningful within the search space that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node has been expanded (or truncated as terminal)
    Closed,
}

/// A [`SearchNode`] holds the search-specific data of one state: how it was
/// reached and how promising it is. Values are rewards, so larger is better
/// for all of g, h and f.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Status of the node
    status: SearchNodeStatus,
    /// F-value of the node, the priority in the open list. How it is
    /// computed depends on the evaluation used by the search.
    f: f64,
    /// G-value of the node, i.e. the reward accumulated on the best known
    /// path from the root to this node.
    g: f64,
    /// H-value of the node, i.e. the heuristic estimate of the reward still
    /// to be collected.
    h: HeuristicValue,
    /// Immediate reward of the transition from the parent, 0 for the root
    reward: f64,
    /// Action that led to this node, `None` for the root
    action: Option<Action>,
    /// Parent node on the best known path, `None` for the root. This is a
    /// back pointer only, nodes never own their children.
    parent_id: Option<NodeId>,
}

impl SearchNode {
    /// Create the root node of a search.
    pub fn new_root() -> Self {
        Self {
            status: SearchNodeStatus::New,
            f: f64::NEG_INFINITY,
            g: f64::NEG_INFINITY,
            h: HeuristicValue::NEG_INFINITY,
            reward: 0.,
            action: None,
            parent_id: None,
        }
    }

    /// Create a node reached from `parent_id` via `action`, receiving
    /// `reward`.
    pub fn new_with_parent(parent_id: NodeId, action: Action, reward: f64) -> Self {
        Self {
            reward,
            action: Some(action),
            parent_id: Some(parent_id),
            ..Self::new_root()
        }
    }

    pub fn open(&mut self, g: f64, h: HeuristicValue, f: f64) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = f;
    }

    /// Record a strictly better path to this node. The status is left
    /// alone; whether the node goes back to the open list is up to the
    /// search. The heuristic value is kept, since it only depends on the
    /// state.
    pub fn update_path(
        &mut self,
        parent_id: NodeId,
        action: Action,
        reward: f64,
        g: f64,
        f: f64,
    ) {
        debug_assert!(g > self.g, "Path can only be replaced by a strictly better one");
        self.parent_id = Some(parent_id);
        self.action = Some(action);
        self.reward = reward;
        self.g = g;
        self.f = f;
    }

    /// Put a closed node back into the open list.
    pub fn reopen(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Closed,
            "Only closed nodes can be reopened"
        );
        self.status = SearchNodeStatus::Open;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_f(&self) -> f64 {
        self.f
    }

    pub fn get_g(&self) -> f64 {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_reward(&self) -> f64 {
        self.reward
    }

    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&Action> {
        self.action.as_ref()
    }
}
