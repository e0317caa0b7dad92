//! The transportation problem: a street with blocks numbered `1..=N`. From
//! block `s` one can walk to `s + 1` for a cost of 1, or take the tram to
//! `2s` for a cost of 2. The journey starts at block 1 and ends at block `N`.

use crate::search::{SearchProblem, Transition};
use std::cmp::Ordering;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The moves of the transportation problem. Successors are generated in
/// declaration order, i.e. walking before taking the tram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TransportAction {
    Walk,
    Tram,
}

impl TransportAction {
    pub fn cost(&self) -> f64 {
        match self {
            TransportAction::Walk => 1.,
            TransportAction::Tram => 2.,
        }
    }

    pub fn apply(&self, block: u64) -> Option<u64> {
        match self {
            TransportAction::Walk => block.checked_add(1),
            TransportAction::Tram => block.checked_mul(2),
        }
    }
}

// Actions are ordered by their label, not by declaration order.
impl Ord for TransportAction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_ref().cmp(other.as_ref())
    }
}

impl PartialOrd for TransportAction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportationProblem {
    /// Number of blocks, which is also the destination block.
    num_blocks: u64,
}

impl TransportationProblem {
    pub fn new(num_blocks: u64) -> Self {
        Self { num_blocks }
    }

    pub fn num_blocks(&self) -> u64 {
        self.num_blocks
    }
}

impl SearchProblem for TransportationProblem {
    type State = u64;
    type Action = TransportAction;

    fn start_state(&self) -> u64 {
        1
    }

    fn is_end(&self, state: &u64) -> bool {
        *state == self.num_blocks
    }

    fn succ_and_cost(&self, state: &u64) -> Vec<Transition<u64, TransportAction>> {
        TransportAction::iter()
            .filter_map(|action| {
                action
                    .apply(*state)
                    .filter(|&next| next <= self.num_blocks)
                    .map(|next| Transition::new(action, next, action.cost()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn successors_in_range() {
        let problem = TransportationProblem::new(10);
        assert_eq!(
            problem.succ_and_cost(&3),
            vec![
                Transition::new(TransportAction::Walk, 4, 1.),
                Transition::new(TransportAction::Tram, 6, 2.),
            ]
        );
        assert_eq!(
            problem.succ_and_cost(&9),
            vec![Transition::new(TransportAction::Walk, 10, 1.)]
        );
        assert!(problem.succ_and_cost(&10).is_empty());
    }

    #[test]
    fn start_and_end() {
        let problem = TransportationProblem::new(6);
        assert_eq!(problem.start_state(), 1);
        assert!(problem.is_end(&6));
        assert!(!problem.is_end(&5));
        assert!(TransportationProblem::new(1).is_end(&1));
    }

    #[test]
    fn action_labels() {
        assert_eq!(TransportAction::Walk.to_string(), "walk");
        assert_eq!(TransportAction::from_str("tram"), Ok(TransportAction::Tram));
        assert!(TransportAction::Tram < TransportAction::Walk);
    }

    #[test]
    fn large_blocks_do_not_overflow() {
        let problem = TransportationProblem::new(u64::MAX);
        let successors = problem.succ_and_cost(&(u64::MAX - 1));
        assert_eq!(successors.len(), 1);
        assert_eq!(successors[0].state, u64::MAX);
    }
}
