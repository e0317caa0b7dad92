//! A transition is the result of applying an action to a state: the action
//! taken, the state reached and the cost paid for it.

use crate::search::Cost;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition<S, A> {
    pub action: A,
    pub state: S,
    pub cost: Cost,
}

impl<S, A> Transition<S, A> {
    pub fn new(action: A, state: S, cost: impl Into<Cost>) -> Self {
        Self {
            action,
            state,
            cost: cost.into(),
        }
    }
}
