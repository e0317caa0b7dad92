use crate::search::{Cost, Transition};
use ordered_float::OrderedFloat;

/// Index of a node within its [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the frontier
    Open,
    /// Node has been expanded, its cost is final
    Closed,
}

/// A [`SearchNode`] holds the search-specific information about a state: the
/// best known cost of reaching it and the transition from its parent along
/// that cheapest path.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    node_id: NodeId,
    status: SearchNodeStatus,
    /// Best known cost of reaching this node from the root.
    g: Cost,
    /// Parent and the transition taken from it, `None` for the root node.
    parent: Option<(NodeId, Transition<S, A>)>,
}

impl<S, A> SearchNode<S, A> {
    /// Create a new search node with no parent. This should only be used for
    /// the root node of the search space.
    pub fn new_without_parent(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            g: OrderedFloat(f64::INFINITY),
            parent: None,
        }
    }

    /// Open the node with cost `g`, reached from `parent_id` via
    /// `transition`.
    pub fn open_from(&mut self, g: Cost, parent_id: NodeId, transition: Transition<S, A>) {
        self.open(g);
        self.parent = Some((parent_id, transition));
    }

    pub fn open(&mut self, g: Cost) {
        debug_assert_ne!(
            self.status,
            SearchNodeStatus::Closed,
            "Closed nodes are never reopened"
        );
        self.status = SearchNodeStatus::Open;
        self.g = g;
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

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_g(&self) -> Cost {
        self.g
    }

    pub fn get_parent(&self) -> Option<&(NodeId, Transition<S, A>)> {
        self.parent.as_ref()
    }
}
