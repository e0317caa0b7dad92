use crate::search::{SearchError, SearchLimits};
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// How often the time and memory limits are checked, in expansions.
const CHECK_INTERVAL: usize = 1024;

/// Tracks the resource limits of a single search.
#[derive(Debug)]
pub struct TerminationCondition {
    max_expansions: Option<usize>,
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
    expansions: usize,
}

impl TerminationCondition {
    pub fn new(limits: &SearchLimits) -> Self {
        info!(
            max_depth = limits.max_depth,
            max_expansions = limits.max_expansions,
            time_limit = limits.time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = limits.memory_limit_mb,
        );
        Self {
            max_expansions: limits.max_expansions,
            time_limit: limits.time_limit,
            memory_limit_mb: limits.memory_limit_mb,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
            expansions: 0,
        }
    }

    /// Record one expansion and check whether any limit has been exceeded.
    pub fn register_expansion(&mut self) -> Result<(), SearchError> {
        self.expansions += 1;
        if let Some(limit) = self.max_expansions {
            if self.expansions > limit {
                return Err(SearchError::ExpansionLimitExceeded { limit });
            }
        }
        if self.expansions % CHECK_INTERVAL == 0 {
            self.log_if_needed();
            self.check_resources()?;
        }
        Ok(())
    }

    fn check_resources(&mut self) -> Result<(), SearchError> {
        if let Some(limit) = self.time_limit {
            if self.start_time.elapsed() > limit {
                return Err(SearchError::TimeLimitExceeded { limit });
            }
        }
        if let Some(limit_mb) = self.memory_limit_mb {
            self.update_memory_usage();
            if self.peak_memory_usage_mb.is_some_and(|peak| peak > limit_mb) {
                return Err(SearchError::MemoryLimitExceeded { limit_mb });
            }
        }
        Ok(())
    }

    fn update_memory_usage(&mut self) -> Option<usize> {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        memory_usage
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&mut self) {
        let memory_usage = self.update_memory_usage();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = self.start_time.elapsed().as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        self.update_memory_usage();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.start_time.elapsed().as_secs_f64(),
        );
    }
}
