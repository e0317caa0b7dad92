mod backtracking;
mod dynamic_programming;
mod search_engine;
mod termination_condition;
mod uniform_cost;

pub use backtracking::Backtracking;
pub use dynamic_programming::{compare_candidates, DynamicProgramming};
pub(crate) use search_engine::{describe, expand};
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use termination_condition::TerminationCondition;
pub use uniform_cost::UniformCostSearch;
