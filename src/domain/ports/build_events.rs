//! Build Event Port
//!
//! Provides an observable interface for build runs.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::entities::{BuildWarning, CompileResult, RunSummary, SourceError};
use crate::domain::value_objects::{BuildMode, Language};

/// Event emitted during a build
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// Run started
    Started {
        language: Language,
        mode: BuildMode,
        source_root: PathBuf,
        output_root: PathBuf,
        jobs: usize,
    },

    /// Planning finished
    Planned {
        sources: usize,
        tasks: usize,
        up_to_date: usize,
    },

    /// Non-fatal problem with one source
    Warning(BuildWarning),

    /// A source could not be planned
    SourceFailed(SourceError),

    /// One task finished (completion order)
    TaskFinished {
        result: CompileResult,
        completed: usize,
        total: usize,
    },

    /// Run completed
    Completed { summary: RunSummary },
}

/// Trait for receiving build events
///
/// Implementations can be:
/// - ConsoleEventSink: progress and summary in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
///
/// Events are delivered from worker threads, hence `Send + Sync`.
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);
}

/// Sink that ignores all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}
}

impl<T: BuildEventSink + ?Sized> BuildEventSink for std::sync::Arc<T> {
    fn on_event(&self, event: BuildEvent) {
        (**self).on_event(event)
    }
}
