use crate::search::{NodeId, SearchNode, Solution, Transition};
use segvec::{Linear, SegVec};
use std::{collections::HashMap, hash::Hash};

/// A [`SearchSpace`] manages the states and nodes discovered during a single
/// search. States are registered once and addressed by [`NodeId`] afterwards.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<S, A>, Linear>,
    states: SegVec<S, Linear>,
    registered_nodes: HashMap<S, NodeId>,
}

impl<S: Clone + Eq + Hash, A: Clone> SearchSpace<S, A> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_nodes = HashMap::new();

        let root_node_id = NodeId::new(0);
        registered_nodes.insert(initial_state.clone(), root_node_id);
        nodes.push(SearchNode::new_without_parent(root_node_id));
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            registered_nodes,
        }
    }

    /// Get the node of `state`, registering it as a new node first if the
    /// state has not been seen before.
    pub fn insert_or_get_node(&mut self, state: &S) -> &mut SearchNode<S, A> {
        let node_id = match self.registered_nodes.get(state) {
            Some(&node_id) => node_id,
            None => {
                let node_id = NodeId::new(self.nodes.len());
                self.states.push(state.clone());
                self.nodes.push(SearchNode::new_without_parent(node_id));
                self.registered_nodes.insert(state.clone(), node_id);
                node_id
            }
        };
        self.get_node_mut(node_id)
    }

    /// Follow the parent links from `goal_id` back to the root.
    pub fn extract_solution(&self, goal_id: NodeId) -> Solution<S, A> {
        let mut history = vec![];
        let mut current_node = self.get_node(goal_id);
        while let Some((parent_id, transition)) = current_node.get_parent() {
            history.push(transition.clone());
            current_node = self.get_node(*parent_id);
        }
        history.reverse();
        Solution::new(history)
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode<S, A> {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<S, A> {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.registered_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_nodes.is_empty()
    }
}
