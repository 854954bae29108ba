//! CompileResult and RunSummary entities

use std::time::Duration;

use super::compile_task::CompileTask;

/// Outcome of one CompileTask. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileResult {
    pub task: CompileTask,
    pub success: bool,
    pub elapsed: Option<Duration>,
    /// Compiler output captured for failed invocations
    pub diagnostics: Option<String>,
}

impl CompileResult {
    pub fn succeeded(task: CompileTask, elapsed: Duration) -> Self {
        Self {
            task,
            success: true,
            elapsed: Some(elapsed),
            diagnostics: None,
        }
    }

    pub fn failed(task: CompileTask, elapsed: Option<Duration>, diagnostics: impl Into<String>) -> Self {
        let diagnostics = diagnostics.into();
        Self {
            task,
            success: false,
            elapsed,
            diagnostics: if diagnostics.trim().is_empty() {
                None
            } else {
                Some(diagnostics)
            },
        }
    }
}

/// Terminal classification of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Nothing was scheduled
    NoOp,
    /// Every task succeeded
    Success,
    /// Some, but not all, tasks failed
    PartialFailure,
    /// Every task failed
    TotalFailure,
}

impl RunStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, RunStatus::PartialFailure | RunStatus::TotalFailure)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::NoOp => "noop",
            RunStatus::Success => "success",
            RunStatus::PartialFailure => "partial",
            RunStatus::TotalFailure => "failure",
        }
    }
}

/// Aggregate of a whole run. Computed once, not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Tasks that ran to completion (successfully or not)
    pub total: usize,
    pub succeeded: usize,
    /// Tasks never dispatched because the run was cancelled
    pub cancelled: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }

    pub fn status(&self) -> RunStatus {
        if self.total == 0 {
            RunStatus::NoOp
        } else if self.succeeded == self.total {
            RunStatus::Success
        } else if self.succeeded == 0 {
            RunStatus::TotalFailure
        } else {
            RunStatus::PartialFailure
        }
    }

    /// Fraction of tasks that succeeded; 1.0 for an empty run
    pub fn success_ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.succeeded as f64 / self.total as f64
        }
    }

    pub fn success_percent(&self) -> u32 {
        (self.success_ratio() * 100.0).round() as u32
    }
}
