//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::entities::BuildWarning;
use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs one JSON object per line
pub struct JsonEventSink {
    /// Subcommand name stamped on every event (`build`, `watch`)
    command: &'static str,
    /// Mutex to ensure thread-safe writes from worker threads
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let command = self.command;
        let json = match event {
            BuildEvent::Started {
                language,
                mode,
                source_root,
                output_root,
                jobs,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": command,
                    "language": language,
                    "mode": mode,
                    "source": source_root.display().to_string(),
                    "output": output_root.display().to_string(),
                    "jobs": jobs,
                })
            }

            BuildEvent::Planned {
                sources,
                tasks,
                up_to_date,
            } => {
                serde_json::json!({
                    "event": "planned",
                    "command": command,
                    "sources": sources,
                    "tasks": tasks,
                    "up_to_date": up_to_date,
                })
            }

            BuildEvent::Warning(warning) => {
                let (kind, path) = match &warning {
                    BuildWarning::NoEntryPoints { path } => ("no_entry_points", path),
                };
                serde_json::json!({
                    "event": "warning",
                    "command": command,
                    "kind": kind,
                    "path": path.display().to_string(),
                    "message": warning.to_string(),
                })
            }

            BuildEvent::SourceFailed(error) => {
                serde_json::json!({
                    "event": "source_error",
                    "command": command,
                    "path": error.path.display().to_string(),
                    "error": error.message,
                })
            }

            BuildEvent::TaskFinished {
                result,
                completed,
                total,
            } => {
                let target = result.task.target();
                serde_json::json!({
                    "event": "task_complete",
                    "command": command,
                    "index": completed,
                    "total": total,
                    "source": target.source.display().to_string(),
                    "output": target.path.display().to_string(),
                    "entry_point": target.entry_point.as_ref().map(|e| e.name().to_string()),
                    "format": target.format.target,
                    "success": result.success,
                    "elapsed_ms": result.elapsed.map(|d| d.as_millis() as u64),
                    "diagnostics": result.diagnostics,
                })
            }

            BuildEvent::Completed { summary } => {
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "status": summary.status().as_str(),
                    "total": summary.total,
                    "succeeded": summary.succeeded,
                    "failed": summary.failed(),
                    "cancelled": summary.cancelled,
                    "elapsed_ms": summary.elapsed.as_millis() as u64,
                })
            }
        };

        self.write_event(json);
    }
}
