//! Watch Use Case implementation

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::build::{BuildOptions, BuildResult, BuildUseCase};
use crate::domain::ports::{BuildEventSink, CommandRunner, FileSystem};
use crate::error::{BakeError, BakeResult};

use super::event::{is_relevant_change, WatchEvent, WatcherState};

/// Poll interval of the watch loop
const POLL_MS: u64 = 50;

/// Watch Use Case
///
/// Runs an incremental build, then rebuilds whenever the source tree
/// changes, until the running flag is cleared.
pub struct WatchUseCase<FS, R>
where
    FS: FileSystem,
    R: CommandRunner,
{
    build: BuildUseCase<FS, R>,
    options: BuildOptions,
}

impl<FS, R> WatchUseCase<FS, R>
where
    FS: FileSystem,
    R: CommandRunner,
{
    pub fn new(file_system: FS, runner: R, options: BuildOptions) -> Self {
        Self {
            build: BuildUseCase::new(file_system, runner),
            options,
        }
    }

    /// Start watching (blocking)
    ///
    /// Blocks until `running` is set to false. Build progress goes to `sink`,
    /// watch lifecycle events to `on_event`. `cancel` is forwarded to every
    /// build so an interrupt stops dispatching new tasks.
    pub fn start<S, F>(
        &self,
        running: Arc<AtomicBool>,
        cancel: Arc<AtomicBool>,
        sink: &S,
        on_event: F,
    ) -> BakeResult<()>
    where
        S: BuildEventSink + ?Sized,
        F: Fn(WatchEvent),
    {
        on_event(WatchEvent::WatchStarted {
            source: self.options.source_root.display().to_string(),
            output: self.options.output_root.display().to_string(),
        });

        // Initial build; a broken tree is reported, not fatal
        self.rebuild(&cancel, sink, &on_event);

        let (tx, rx) = channel::<PathBuf>();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    if matches!(event.kind, EventKind::Access(_)) {
                        return;
                    }
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )
        .map_err(|e| BakeError::Watch(e.to_string()))?;

        watcher
            .watch(&self.options.source_root, RecursiveMode::Recursive)
            .map_err(|e| BakeError::Watch(e.to_string()))?;

        let mut state = WatcherState::new();
        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(POLL_MS)) {
                if is_relevant_change(&path, &self.options) {
                    state.add_change(path);
                }
            }

            if state.should_rebuild() {
                for path in state.take_changes() {
                    on_event(WatchEvent::FileChanged {
                        path: path.display().to_string(),
                    });
                }
                self.rebuild(&cancel, sink, &on_event);
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    fn rebuild<S, F>(&self, cancel: &Arc<AtomicBool>, sink: &S, on_event: &F) -> Option<BuildResult>
    where
        S: BuildEventSink + ?Sized,
        F: Fn(WatchEvent),
    {
        on_event(WatchEvent::RebuildStarted);
        match self.build.execute_with_events(&self.options, sink, Arc::clone(cancel)) {
            Ok(result) => {
                on_event(WatchEvent::RebuildComplete {
                    compiled: result.summary.succeeded,
                    failed: result.summary.failed() + result.errors.len(),
                    up_to_date: result.up_to_date,
                });
                Some(result)
            }
            Err(err) => {
                tracing::warn!(error = %err, "rebuild failed");
                on_event(WatchEvent::Error {
                    message: err.to_string(),
                });
                None
            }
        }
    }
}
