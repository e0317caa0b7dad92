//! Search configuration, usually read from a TOML file:
//!
//! ```toml
//! engine = "uniform-cost"
//!
//! [limits]
//! max_depth = 100000
//! max_expansions = 1000000
//! time_limit = "30s"
//! memory_limit_mb = 2048
//! ```

use crate::search::{search_engines::SearchEngineName, ConfigError};
use serde::{Deserialize, Deserializer};
use std::{path::Path, time::Duration};

pub const DEFAULT_MAX_DEPTH: usize = 100_000;

/// Resource bounds imposed on a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchLimits {
    /// Longest path the backtracking search explores, and deepest chain of
    /// pending states the dynamic programming evaluates.
    pub max_depth: usize,
    /// Maximum number of state expansions.
    pub max_expansions: Option<usize>,
    #[serde(deserialize_with = "deserialize_duration")]
    pub time_limit: Option<Duration>,
    pub memory_limit_mb: Option<usize>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_expansions: None,
            time_limit: None,
            memory_limit_mb: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub engine: SearchEngineName,
    pub limits: SearchLimits,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: SearchEngineName::UniformCost,
            limits: SearchLimits::default(),
        }
    }
}

impl SearchConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    text.map(|text| humantime::parse_duration(&text).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = SearchConfig::from_text("").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.limits.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.engine, SearchEngineName::UniformCost);
    }

    #[test]
    fn full_config() {
        let config = SearchConfig::from_text(
            r#"
            engine = "dynamic-programming"

            [limits]
            max_depth = 50
            max_expansions = 1000
            time_limit = "1m 30s"
            memory_limit_mb = 512
            "#,
        )
        .unwrap();
        assert_eq!(config.engine, SearchEngineName::DynamicProgramming);
        assert_eq!(config.limits.max_depth, 50);
        assert_eq!(config.limits.max_expansions, Some(1000));
        assert_eq!(config.limits.time_limit, Some(Duration::from_secs(90)));
        assert_eq!(config.limits.memory_limit_mb, Some(512));
    }

    #[test]
    fn bad_duration_rejected() {
        let result = SearchConfig::from_text(
            r#"
            [limits]
            time_limit = "soon"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(SearchConfig::from_text("engine = \"bfs\"").is_err());
        assert!(SearchConfig::from_text("depth = 3").is_err());
    }

    #[test]
    fn from_path_works() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.toml");
        std::fs::write(&path, "engine = \"backtracking\"").unwrap();
        let config = SearchConfig::from_path(&path).unwrap();
        assert_eq!(config.engine, SearchEngineName::Backtracking);
    }
}
