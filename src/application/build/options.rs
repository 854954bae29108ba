//! Build Options
//!
//! Everything a build run needs, resolved from the layered configuration.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::services::{OutputNaming, TaskSettings};
use crate::domain::value_objects::{EntryPointScan, Language};

/// Options for the build use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub language: Language,
    /// Absolute source root
    pub source_root: PathBuf,
    /// Absolute, flat output root
    pub output_root: PathBuf,
    /// Source extensions, without the leading dot
    pub extensions: Vec<String>,
    /// Directory names (suffix match) excluded from discovery
    pub exclude_dirs: Vec<String>,
    /// Recognised entry point names (multi-entry languages)
    pub entry_points: Vec<String>,
    pub entry_scan: EntryPointScan,
    /// Compiler invocation settings shared by every task
    pub settings: TaskSettings,
    /// Worker count, already resolved (never 0)
    pub jobs: usize,
}

impl BuildOptions {
    /// Defaults for `language` under the given roots
    pub fn new(language: Language, source_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            language,
            source_root: source_root.into(),
            output_root: output_root.into(),
            extensions: language.default_extensions(),
            exclude_dirs: language.default_exclude_dirs(),
            entry_points: language.default_entry_points(),
            entry_scan: EntryPointScan::default(),
            settings: TaskSettings::new(language.compiler_name(), language),
            jobs: 1,
        }
    }

    /// Resolve from configuration with an already located compiler
    pub fn from_config(config: &Config, compiler: impl Into<PathBuf>) -> Self {
        let language = config.language;
        Self {
            language,
            source_root: config.source_dir(),
            output_root: config.output_dir(),
            extensions: config.extensions(),
            exclude_dirs: config.exclude_dirs(),
            entry_points: config.entry_points(),
            entry_scan: config.sources.entry_scan,
            settings: TaskSettings {
                compiler: compiler.into(),
                language,
                mode: config.build.mode,
                profile: config.profile(),
                formats: config.formats(),
                extra_args: config.compiler.extra_args.clone(),
                incremental: config.build.incremental,
            },
            jobs: config.effective_jobs(),
        }
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn with_incremental(mut self, incremental: bool) -> Self {
        self.settings.incremental = incremental;
        self
    }

    /// How output names are tagged for this language
    pub fn naming(&self) -> OutputNaming {
        if self.language.has_named_entry_points() {
            OutputNaming::EntryPointSuffix
        } else {
            OutputNaming::SourceExtension
        }
    }
}
