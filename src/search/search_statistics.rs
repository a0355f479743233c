use crate::search::HeuristicValue;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: i64,
    /// Number of nodes evaluated
    evaluated_nodes: i64,
    /// Number of unique nodes generated
    generated_nodes: i64,
    /// Number of reopened nodes
    reopened_nodes: i64,
    /// Number of applicable actions generated
    generated_actions: i64,
    /// Number of terminal non-goal nodes popped and not expanded
    deadend_nodes: i64,
    /// Best heuristic value found so far (closest to the goal)
    best_heuristic_value: HeuristicValue,
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
        info!("starting search");
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            reopened_nodes: 0,
            generated_actions: 0,
            deadend_nodes: 0,
            best_heuristic_value: HeuristicValue::NEG_INFINITY,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        if heuristic_value > self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            info!(best_heuristic_value = self.best_heuristic_value);
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as i64;
        self.log_if_needed();
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_actions(&mut self, num_actions: usize) {
        self.generated_actions += num_actions as i64;
        self.log_if_needed();
    }

    pub fn increment_deadend_nodes(&mut self) {
        self.deadend_nodes += 1;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn evaluated_nodes(&self) -> i64 {
        self.evaluated_nodes
    }

    pub fn generated_nodes(&self) -> i64 {
        self.generated_nodes
    }

    pub fn reopened_nodes(&self) -> i64 {
        self.reopened_nodes
    }

    pub fn generated_actions(&self) -> i64 {
        self.generated_actions
    }

    pub fn deadend_nodes(&self) -> i64 {
        self.deadend_nodes
    }

    pub fn best_heuristic_value(&self) -> HeuristicValue {
        self.best_heuristic_value
    }

    pub fn elapsed(&self) -> Duration {
        self.search_start_time.elapsed()
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
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            reopened_nodes = self.reopened_nodes,
            generated_actions = self.generated_actions,
            deadend_nodes = self.deadend_nodes,
            best_heuristic_value = self.best_heuristic_value,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut statistics = SearchStatistics::new();
        statistics.increment_expanded_nodes();
        statistics.increment_expanded_nodes();
        statistics.increment_generated_nodes(3);
        statistics.increment_generated_actions(4);
        statistics.increment_reopened_nodes();
        statistics.increment_deadend_nodes();
        statistics.increment_evaluated_nodes();
        assert_eq!(statistics.expanded_nodes(), 2);
        assert_eq!(statistics.generated_nodes(), 3);
        assert_eq!(statistics.generated_actions(), 4);
        assert_eq!(statistics.reopened_nodes(), 1);
        assert_eq!(statistics.deadend_nodes(), 1);
        assert_eq!(statistics.evaluated_nodes(), 1);
    }

    #[test]
    fn best_heuristic_value_is_the_largest() {
        let mut statistics = SearchStatistics::new();
        statistics.register_heuristic_value(-5.);
        statistics.register_heuristic_value(-2.);
        statistics.register_heuristic_value(-3.);
        assert_eq!(statistics.best_heuristic_value(), -2.);
    }
}
