//! Build Result
//!
//! Outcome of one build run, for rendering and exit codes.

use crate::domain::entities::{BuildWarning, RunStatus, RunSummary, SourceError};

/// Result of a build run
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    pub summary: RunSummary,
    /// Source files discovered
    pub sources: usize,
    /// Targets skipped as up to date
    pub up_to_date: usize,
    pub warnings: Vec<BuildWarning>,
    /// Sources that produced no tasks because planning failed
    pub errors: Vec<SourceError>,
}

impl BuildResult {
    pub fn status(&self) -> RunStatus {
        self.summary.status()
    }

    /// True when nothing was planned, so the run compiled nothing
    pub fn is_noop(&self) -> bool {
        self.summary.total == 0 && self.summary.cancelled == 0
    }

    /// Any failed task, per-source error or cancelled task
    pub fn is_failure(&self) -> bool {
        self.status().is_failure() || !self.errors.is_empty() || self.summary.cancelled > 0
    }
}
