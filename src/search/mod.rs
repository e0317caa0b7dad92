mod config;
mod cost;
mod error;
mod frontier;
pub mod problem_formulations;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod solution;
mod symbol;
mod transition;

pub use config::{SearchConfig, SearchLimits, DEFAULT_MAX_DEPTH};
pub use cost::{is_valid_cost, Cost};
pub use error::{ConfigError, ProblemLoadError, SearchError};
pub use frontier::PriorityFrontier;
pub use problem_formulations::{
    GraphEdge, GraphProblem, ProblemTransition, SearchProblem, TransportAction,
    TransportationProblem,
};
pub use search_engines::{SearchEngine, SearchEngineName, SearchResult};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use solution::{Solution, SolutionReport, StepReport};
pub use symbol::Symbol;
pub use transition::Transition;
