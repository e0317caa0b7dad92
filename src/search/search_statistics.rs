use crate::search::Cost;
use ordered_float::OrderedFloat;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of states expanded
    expanded_nodes: i64,
    /// Number of transitions generated
    generated_transitions: i64,
    /// Number of goal states reached
    reached_goals: i64,
    /// Number of memoized future costs reused
    cache_hits: i64,
    /// Number of frontier entries inserted or improved
    frontier_updates: i64,
    /// Number of dead ends encountered
    dead_ends: i64,
    /// Best solution cost found so far
    best_cost: Cost,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self {
            expanded_nodes: 0,
            generated_transitions: 0,
            reached_goals: 0,
            cache_hits: 0,
            frontier_updates: 0,
            dead_ends: 0,
            best_cost: OrderedFloat(f64::INFINITY),
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    /// Reset all counters and restart the clock.
    pub fn start_search(&mut self) {
        info!("starting search");
        *self = Self::new();
    }

    pub fn register_solution_cost(&mut self, cost: Cost) {
        self.reached_goals += 1;
        if cost < self.best_cost {
            self.best_cost = cost;
            info!(best_cost = self.best_cost.into_inner());
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_transitions(&mut self, num_transitions: usize) {
        self.generated_transitions += num_transitions as i64;
        self.log_if_needed();
    }

    pub fn increment_cache_hits(&mut self) {
        self.cache_hits += 1;
    }

    pub fn increment_frontier_updates(&mut self) {
        self.frontier_updates += 1;
    }

    pub fn increment_dead_ends(&mut self) {
        self.dead_ends += 1;
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn generated_transitions(&self) -> i64 {
        self.generated_transitions
    }

    pub fn reached_goals(&self) -> i64 {
        self.reached_goals
    }

    pub fn cache_hits(&self) -> i64 {
        self.cache_hits
    }

    pub fn frontier_updates(&self) -> i64 {
        self.frontier_updates
    }

    pub fn dead_ends(&self) -> i64 {
        self.dead_ends
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_transitions = self.generated_transitions,
            reached_goals = self.reached_goals,
            cache_hits = self.cache_hits,
            frontier_updates = self.frontier_updates,
            dead_ends = self.dead_ends,
            best_cost = self.best_cost.into_inner(),
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
