//! Parallel Executor
//!
//! Runs compile tasks on a bounded rayon pool. Each worker blocks on one
//! compiler process at a time; results are aggregated and reported in
//! completion order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use rayon::prelude::*;

use crate::domain::entities::{CompileResult, CompileTask, RunSummary};
use crate::domain::ports::{BuildEvent, BuildEventSink, CommandRunner};
use crate::domain::services::Aggregator;
use crate::error::{BakeError, BakeResult};

/// Bounded-parallelism task runner with cooperative cancellation
pub struct ParallelExecutor<R: CommandRunner> {
    runner: R,
    jobs: usize,
    cancel: Arc<AtomicBool>,
}

impl<R: CommandRunner> ParallelExecutor<R> {
    /// `jobs` workers; 0 is treated as 1
    pub fn new(runner: R, jobs: usize) -> Self {
        Self {
            runner,
            jobs: jobs.max(1),
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share a cancellation flag; once set, no further task is started
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Run every task and summarise
    ///
    /// A `TaskFinished` event is sent to `sink` as each task completes.
    pub fn execute<S>(&self, tasks: Vec<CompileTask>, sink: &S) -> BakeResult<RunSummary>
    where
        S: BuildEventSink + ?Sized,
    {
        let start = Instant::now();
        let total = tasks.len();
        if total == 0 {
            return Ok(Aggregator::new().finish(start.elapsed()));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .thread_name(|i| format!("shaderbake-worker-{i}"))
            .build()
            .map_err(|e| BakeError::WorkerPool(e.to_string()))?;

        tracing::debug!(tasks = total, jobs = self.jobs, "dispatching tasks");

        let aggregator = Mutex::new(Aggregator::new());
        pool.install(|| {
            tasks.into_par_iter().for_each(|task| {
                if self.cancel.load(Ordering::SeqCst) {
                    if let Ok(mut agg) = aggregator.lock() {
                        agg.record_cancelled(1);
                    }
                    return;
                }

                let result = self.run_task(task);

                if let Ok(mut agg) = aggregator.lock() {
                    agg.record(&result);
                    let completed = agg.completed();
                    sink.on_event(BuildEvent::TaskFinished {
                        result,
                        completed,
                        total,
                    });
                }
            });
        });

        let aggregator = aggregator
            .into_inner()
            .map_err(|_| BakeError::WorkerPool("result collection was poisoned".to_string()))?;
        let summary = aggregator.finish(start.elapsed());

        if summary.cancelled > 0 {
            tracing::info!(cancelled = summary.cancelled, "build cancelled");
        }
        Ok(summary)
    }

    fn run_task(&self, task: CompileTask) -> CompileResult {
        tracing::debug!(command = %task.display_command(), "compiling");
        let started = Instant::now();

        match self.runner.run(task.program(), task.args()) {
            Ok(output) if output.success => CompileResult::succeeded(task, started.elapsed()),
            Ok(output) => {
                tracing::debug!(output = %task.output_path().display(), "compiler reported failure");
                CompileResult::failed(task, Some(started.elapsed()), output.diagnostics)
            }
            Err(err) => {
                let message = format!("failed to start {}: {}", task.program().display(), err);
                tracing::warn!("{message}");
                CompileResult::failed(task, None, message)
            }
        }
    }
}
