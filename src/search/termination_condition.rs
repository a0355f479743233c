use crate::search::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Budgets that end a search early. Checked once per iteration at the top
/// of the expansion loop; `None` means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub time_limit: Option<Duration>,
    pub max_expansions: Option<usize>,
    pub memory_limit_mb: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }
}

#[derive(Debug)]
pub struct TerminationCondition {
    limits: SearchLimits,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(limits: SearchLimits) -> Self {
        info!(
            time_limit = limits.time_limit.map(|d| d.as_secs_f64()),
            max_expansions = limits.max_expansions,
            memory_limit_mb = limits.memory_limit_mb,
        );
        let mut condition = Self {
            limits,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        };
        if limits.memory_limit_mb.is_some() {
            condition.record_memory_usage();
        }
        condition
    }

    /// Sample memory usage every few seconds. Memory is only sampled at all
    /// when a memory limit is set.
    pub fn log_if_needed(&mut self) {
        if self.limits.memory_limit_mb.is_some()
            && self.last_log_time.elapsed() > Duration::from_secs(1)
        {
            self.last_log_time = Instant::now();
            self.record_memory_usage();
        }
    }

    fn record_memory_usage(&mut self) {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
    }

    pub fn finalise(&self) {
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.start_time.elapsed().as_secs_f64(),
        );
    }

    pub fn should_terminate<S>(&self, expanded_nodes: usize) -> Option<SearchResult<S>> {
        if let Some(time_limit) = self.limits.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(max_expansions) = self.limits.max_expansions {
            if expanded_nodes >= max_expansions {
                return Some(SearchResult::ExpansionLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.limits.memory_limit_mb {
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(SearchResult::MemoryLimitExceeded);
                }
            }
        }
        None
    }
}
