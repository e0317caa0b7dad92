use std::time::Duration;
use thiserror::Error;

/// Errors raised by the search engines. An unreachable goal is not an error,
/// see [`crate::search::Solution::unsolved`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("invalid problem: transition {action} from {state} to {next_state} has cost {cost}, costs must be non-negative")]
    NegativeCost {
        state: String,
        action: String,
        next_state: String,
        cost: f64,
    },
    #[error("invalid problem: cyclic dependency, state {state} depends on its own future cost")]
    CyclicDependency { state: String },
    #[error("search depth exceeded the limit of {limit} at state {state}")]
    DepthLimitExceeded { limit: usize, state: String },
    #[error("search expanded more than {limit} states")]
    ExpansionLimitExceeded { limit: usize },
    #[error("search exceeded the time limit of {limit:?}")]
    TimeLimitExceeded { limit: Duration },
    #[error("search exceeded the memory limit of {limit_mb}MB")]
    MemoryLimitExceeded { limit_mb: usize },
}

/// Errors raised while loading a problem description.
#[derive(Debug, Error)]
pub enum ProblemLoadError {
    #[error("failed to read problem file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse problem file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid problem: {0}")]
    InvalidProblem(String),
}

/// Errors raised while loading a [`crate::search::SearchConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}
