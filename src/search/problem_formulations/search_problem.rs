use crate::search::Transition;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// A deterministic search problem with costed transitions.
///
/// Implementations must be pure: [`SearchProblem::start_state`],
/// [`SearchProblem::is_end`] and [`SearchProblem::succ_and_cost`] may only
/// depend on their arguments and on fixed construction parameters. The
/// memoization in [`crate::search::search_engines::DynamicProgramming`]
/// relies on this.
///
/// Transition costs must be non-negative. The search engines check every
/// transition they generate and fail with
/// [`crate::search::SearchError::NegativeCost`] otherwise.
pub trait SearchProblem {
    /// A point in the search space. The ordering is only used to break ties
    /// deterministically.
    type State: Clone + Eq + Hash + Ord + Debug;
    /// The label of a move, carried for reporting only.
    type Action: Clone + Eq + Hash + Ord + Debug + Display;

    fn start_state(&self) -> Self::State;

    fn is_end(&self, state: &Self::State) -> bool;

    /// All transitions out of `state`, in a fixed order. An empty list at a
    /// non-goal state marks a dead end.
    fn succ_and_cost(&self, state: &Self::State) -> Vec<Transition<Self::State, Self::Action>>;
}

/// Shorthand for the transitions of a problem `P`.
pub type ProblemTransition<P> =
    Transition<<P as SearchProblem>::State, <P as SearchProblem>::Action>;
