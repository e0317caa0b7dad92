//! The frontier of uniform-cost search: states discovered but not yet
//! finalised, ordered by the best known cost of reaching them.

use crate::search::Cost;
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, fmt::Debug, hash::Hash};

/// A min-priority queue over states with insert-or-decrease-key updates.
/// Entries with equal priority are removed in the order they were last
/// updated.
#[derive(Debug)]
pub struct PriorityFrontier<S: Hash + Eq> {
    queue: PriorityQueue<S, Reverse<(Cost, u64)>>,
    next_sequence: u64,
}

impl<S: Hash + Eq> Default for PriorityFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Hash + Eq> PriorityFrontier<S> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    /// Insert `state` with the given priority, or lower the priority of an
    /// existing entry. Does nothing if the existing entry already has a
    /// priority no greater than `priority`. Returns whether the frontier
    /// changed.
    pub fn update(&mut self, state: S, priority: Cost) -> bool {
        let sequence = self.next_sequence;
        match self.priority(&state) {
            Some(existing) if existing <= priority => false,
            Some(_) => {
                self.queue
                    .change_priority(&state, Reverse((priority, sequence)));
                self.next_sequence += 1;
                true
            }
            None => {
                self.queue.push(state, Reverse((priority, sequence)));
                self.next_sequence += 1;
                true
            }
        }
    }

    /// Remove and return the entry with the lowest priority, or `None` if the
    /// frontier is empty.
    pub fn remove_min(&mut self) -> Option<(S, Cost)> {
        self.queue
            .pop()
            .map(|(state, Reverse((priority, _)))| (state, priority))
    }

    pub fn priority(&self, state: &S) -> Option<Cost> {
        self.queue
            .get_priority(state)
            .map(|Reverse((priority, _))| *priority)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
