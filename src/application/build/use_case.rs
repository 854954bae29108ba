//! Build Use Case
//!
//! Orchestrates one build run:
//! 1. Plan (discover sources, check staleness, build tasks)
//! 2. Report warnings and per-source errors
//! 3. Create output directories
//! 4. Execute tasks in parallel
//! 5. Summarise
//!
//! Every step reports through a `BuildEventSink`.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::application::executor::ParallelExecutor;
use crate::application::pipeline::BuildPipeline;
use crate::domain::entities::BuildPlan;
use crate::domain::ports::{BuildEvent, BuildEventSink, CommandRunner, FileSystem, NoopEventSink};
use crate::error::BakeResult;

use super::options::BuildOptions;
use super::result::BuildResult;

/// Build use case, parameterized by its ports
pub struct BuildUseCase<FS, R>
where
    FS: FileSystem,
    R: CommandRunner,
{
    file_system: FS,
    runner: R,
}

impl<FS, R> BuildUseCase<FS, R>
where
    FS: FileSystem,
    R: CommandRunner,
{
    pub fn new(file_system: FS, runner: R) -> Self {
        Self { file_system, runner }
    }

    /// Plan only; nothing is executed or created
    pub fn plan(&self, options: &BuildOptions) -> BakeResult<BuildPlan> {
        BuildPipeline::new(&self.file_system, options).plan()
    }

    /// Execute a build without reporting
    pub fn execute(&self, options: &BuildOptions) -> BakeResult<BuildResult> {
        self.execute_with_events(options, &NoopEventSink, Arc::new(AtomicBool::new(false)))
    }

    /// Execute a build, reporting to `sink` and honouring `cancel`
    ///
    /// Fatal errors (missing source root, worker pool failure) are returned
    /// as `Err`; everything else ends up in the `BuildResult`.
    pub fn execute_with_events<S>(
        &self,
        options: &BuildOptions,
        sink: &S,
        cancel: Arc<AtomicBool>,
    ) -> BakeResult<BuildResult>
    where
        S: BuildEventSink + ?Sized,
    {
        sink.on_event(BuildEvent::Started {
            language: options.language,
            mode: options.settings.mode,
            source_root: options.source_root.clone(),
            output_root: options.output_root.clone(),
            jobs: options.jobs,
        });

        let pipeline = BuildPipeline::new(&self.file_system, options);
        let plan = pipeline.plan()?;

        for warning in &plan.warnings {
            sink.on_event(BuildEvent::Warning(warning.clone()));
        }
        for error in &plan.errors {
            sink.on_event(BuildEvent::SourceFailed(error.clone()));
        }
        sink.on_event(BuildEvent::Planned {
            sources: plan.sources,
            tasks: plan.tasks.len(),
            up_to_date: plan.up_to_date,
        });

        pipeline.ensure_output_dirs(&plan)?;

        let BuildPlan {
            tasks,
            sources,
            up_to_date,
            warnings,
            errors,
        } = plan;

        let executor = ParallelExecutor::new(&self.runner, options.jobs).with_cancel_flag(cancel);
        let summary = executor.execute(tasks, sink)?;

        sink.on_event(BuildEvent::Completed { summary });

        Ok(BuildResult {
            summary,
            sources,
            up_to_date,
            warnings,
            errors,
        })
    }
}
