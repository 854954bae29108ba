//! Result aggregator
//!
//! Folds per-task results (in completion order) into a RunSummary.

use std::time::Duration;

use crate::domain::entities::{CompileResult, RunSummary};

#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    total: usize,
    succeeded: usize,
    cancelled: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &CompileResult) {
        self.total += 1;
        if result.success {
            self.succeeded += 1;
        }
    }

    /// Count tasks that were never dispatched
    pub fn record_cancelled(&mut self, count: usize) {
        self.cancelled += count;
    }

    /// Tasks recorded so far
    pub fn completed(&self) -> usize {
        self.total
    }

    pub fn finish(self, elapsed: Duration) -> RunSummary {
        RunSummary {
            total: self.total,
            succeeded: self.succeeded,
            cancelled: self.cancelled,
            elapsed,
        }
    }
}
