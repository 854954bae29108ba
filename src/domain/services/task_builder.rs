//! Task builder
//!
//! Expands one source file into compiler invocations: one per
//! (entry point x output format), minus targets that are already up to date.

use std::path::{Path, PathBuf};

use crate::domain::entities::{BuildWarning, CompileTask, OutputTarget, SourceFile};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{BuildMode, EntryPoint, Language, OutputFormat};
use crate::error::BakeResult;

use super::output_mapper::OutputMapper;
use super::staleness::StalenessChecker;

/// Everything about a compiler invocation that does not depend on the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSettings {
    /// Resolved compiler executable
    pub compiler: PathBuf,
    pub language: Language,
    pub mode: BuildMode,
    /// `-profile` value (Slang only)
    pub profile: Option<String>,
    pub formats: Vec<OutputFormat>,
    /// Appended verbatim before `-o`
    pub extra_args: Vec<String>,
    /// Skip targets the staleness checker reports as up to date
    pub incremental: bool,
}

impl TaskSettings {
    pub fn new(compiler: impl Into<PathBuf>, language: Language) -> Self {
        Self {
            compiler: compiler.into(),
            language,
            mode: BuildMode::default(),
            profile: language.default_profile().map(str::to_string),
            formats: vec![OutputFormat::default()],
            extra_args: Vec::new(),
            incremental: true,
        }
    }
}

/// Tasks planned for one source file
#[derive(Debug, Clone, Default)]
pub struct SourceTasks {
    pub tasks: Vec<CompileTask>,
    /// Targets skipped as up to date
    pub up_to_date: usize,
    pub warning: Option<BuildWarning>,
}

pub struct TaskBuilder<'a, F: FileSystem + ?Sized> {
    settings: &'a TaskSettings,
    mapper: &'a OutputMapper,
    staleness: StalenessChecker<'a, F>,
}

impl<'a, F: FileSystem + ?Sized> TaskBuilder<'a, F> {
    pub fn new(settings: &'a TaskSettings, mapper: &'a OutputMapper, staleness: StalenessChecker<'a, F>) -> Self {
        Self {
            settings,
            mapper,
            staleness,
        }
    }

    pub fn settings(&self) -> &TaskSettings {
        self.settings
    }

    /// Plan the tasks for `source`
    ///
    /// A `MissingDependency` from the staleness check aborts this source only;
    /// the caller records it and carries on with the next file.
    pub fn build_tasks(&self, source: &SourceFile) -> BakeResult<SourceTasks> {
        let mut planned = SourceTasks::default();

        let entries: Vec<Option<&EntryPoint>> = if self.settings.language.has_named_entry_points() {
            if !source.has_entry_points() {
                tracing::debug!(source = %source.path().display(), "no recognised entry points");
                planned.warning = Some(BuildWarning::NoEntryPoints {
                    path: source.path().to_path_buf(),
                });
                return Ok(planned);
            }
            source.entry_points().iter().map(Some).collect()
        } else {
            vec![None]
        };

        for entry in entries {
            for format in &self.settings.formats {
                let output = self.mapper.map_output(source.path(), entry, format)?;

                if self.settings.incremental && !self.staleness.is_stale(source.path(), &output)? {
                    tracing::trace!(output = %output.display(), "up to date");
                    planned.up_to_date += 1;
                    continue;
                }

                let target = OutputTarget {
                    path: output,
                    source: source.path().to_path_buf(),
                    entry_point: entry.cloned(),
                    format: format.clone(),
                };
                let args = compile_args(self.settings, &target);
                planned
                    .tasks
                    .push(CompileTask::new(self.settings.compiler.clone(), args, target));
            }
        }

        Ok(planned)
    }
}

/// Optimisation flags for a language and build mode
pub fn mode_flags(language: Language, mode: BuildMode) -> &'static [&'static str] {
    match (language, mode) {
        (Language::Glsl, BuildMode::Release) => &["-O"],
        (Language::Glsl, BuildMode::Debug) => &["-O0", "-g"],
        (Language::Slang, BuildMode::Release) => &["-O3", "-obfuscate"],
        (Language::Slang, BuildMode::Debug) => &["-O0", "-g3"],
    }
}

/// Argument list (without the program) that compiles `target`
pub fn compile_args(settings: &TaskSettings, target: &OutputTarget) -> Vec<String> {
    let mut args = vec![path_arg(&target.source)];

    if settings.language == Language::Slang {
        if let Some(profile) = &settings.profile {
            args.push("-profile".to_string());
            args.push(profile.clone());
        }
    }

    args.extend(mode_flags(settings.language, settings.mode).iter().map(|s| s.to_string()));
    args.extend(settings.extra_args.iter().cloned());

    if settings.language == Language::Slang {
        if let Some(entry) = &target.entry_point {
            args.push("-entry".to_string());
            args.push(entry.name().to_string());
        }
        args.push("-target".to_string());
        args.push(target.format.target.clone());
    }

    args.push("-o".to_string());
    args.push(path_arg(&target.path));
    args
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
