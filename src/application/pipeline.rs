//! Build Pipeline
//!
//! Turns a source tree into a BuildPlan:
//! discovery -> read source -> staleness check -> compile tasks.
//!
//! Per-source problems (missing dependency, unreadable file) are recorded in
//! the plan and the remaining sources are still planned. Only errors that make
//! the whole tree unusable (missing source root) abort planning.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use crate::domain::entities::{BuildPlan, SourceError, SourceFile};
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::services::{DependencyResolver, Discovery, OutputMapper, StalenessChecker, TaskBuilder};
use crate::error::{BakeError, BakeResult};

use super::build::BuildOptions;

/// Plans builds against a filesystem port
pub struct BuildPipeline<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    options: &'a BuildOptions,
}

impl<'a, F: FileSystem + ?Sized> BuildPipeline<'a, F> {
    pub fn new(fs: &'a F, options: &'a BuildOptions) -> Self {
        Self { fs, options }
    }

    /// Discover sources and plan their tasks
    pub fn plan(&self) -> BakeResult<BuildPlan> {
        let options = self.options;
        let discovery = Discovery::new(self.fs, &options.source_root)
            .with_extensions(&options.extensions)
            .with_exclude_dirs(&options.exclude_dirs);

        let mapper = OutputMapper::new(&options.source_root, &options.output_root, options.naming());
        let resolver = DependencyResolver::new(self.fs, options.language.default_directive());
        let builder = TaskBuilder::new(&options.settings, &mapper, StalenessChecker::new(resolver));

        let mut plan = BuildPlan::new();
        // Output path -> source that claimed it; no two workers may share a file
        let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

        for entry in discovery.discover()? {
            let path = match entry {
                Ok(path) => path,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    plan.errors.push(SourceError {
                        path: fs_error_path(&err).unwrap_or_else(|| options.source_root.clone()),
                        message: err.to_string(),
                    });
                    continue;
                }
            };
            plan.sources += 1;

            let source = match self.read_source(&path) {
                Ok(source) => source,
                Err(err) => {
                    plan.errors.push(SourceError {
                        path,
                        message: err.to_string(),
                    });
                    continue;
                }
            };

            match builder.build_tasks(&source) {
                Ok(planned) => {
                    for task in &planned.tasks {
                        let output = task.output_path().to_path_buf();
                        if let Some(first) = claimed.insert(output.clone(), task.source_path().to_path_buf()) {
                            return Err(BakeError::OutputCollision {
                                output,
                                first,
                                second: task.source_path().to_path_buf(),
                            });
                        }
                    }
                    plan.up_to_date += planned.up_to_date;
                    plan.warnings.extend(planned.warning);
                    plan.tasks.extend(planned.tasks);
                }
                Err(err) if !err.is_fatal() => {
                    tracing::debug!(source = %path.display(), error = %err, "source not planned");
                    plan.errors.push(SourceError {
                        path,
                        message: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(
            sources = plan.sources,
            tasks = plan.tasks.len(),
            up_to_date = plan.up_to_date,
            "planned build"
        );
        Ok(plan)
    }

    /// Create every output directory the plan writes into; safe to repeat
    pub fn ensure_output_dirs(&self, plan: &BuildPlan) -> BakeResult<()> {
        let dirs: BTreeSet<&Path> = plan
            .tasks
            .iter()
            .filter_map(|task| task.output_path().parent())
            .collect();
        for dir in dirs {
            self.fs.create_dir_all(dir)?;
        }
        Ok(())
    }

    fn read_source(&self, path: &Path) -> BakeResult<SourceFile> {
        if !self.options.language.has_named_entry_points() {
            return Ok(SourceFile::new(path, Vec::new()));
        }
        let content = self.fs.read_to_string(path)?;
        Ok(SourceFile::from_content(
            path,
            &content,
            &self.options.entry_points,
            self.options.entry_scan,
        ))
    }
}

fn fs_error_path(err: &FsError) -> Option<PathBuf> {
    match err {
        FsError::NotFound(path) | FsError::PermissionDenied(path) | FsError::Io { path, .. } => Some(path.clone()),
        FsError::Other(_) => None,
    }
}
