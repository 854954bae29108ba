//! Configuration type definitions
//!
//! Every field of the file is optional. Language-dependent settings stay
//! `None` until read through an accessor, so switching `language` (from the
//! file, or `--language` on the command line) also switches their defaults.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BuildMode, EntryPointScan, Language, OutputFormat};
use crate::error::BakeResult;

use super::loader;
use super::ConfigWarning;

/// Config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "shaderbake.toml";

/// Default flat output directory shared by both languages
pub const DEFAULT_OUTPUT_DIR: &str = "asset/spv";

/// Source and output roots
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(default)]
    pub source: Option<PathBuf>,

    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Which files count as sources and which entry points they may define
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SourcesConfig {
    #[serde(default)]
    pub extensions: Option<Vec<String>>,

    #[serde(default)]
    pub exclude_dirs: Option<Vec<String>>,

    #[serde(default)]
    pub entry_points: Option<Vec<String>>,

    #[serde(default)]
    pub entry_scan: EntryPointScan,
}

/// Compiler executable and fixed arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Explicit executable; PATH and SDK lookup are skipped when set
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub profile: Option<String>,

    #[serde(default)]
    pub extra_args: Vec<String>,
}

/// Build behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildConfig {
    #[serde(default)]
    pub mode: BuildMode,

    /// Worker count; 0 means one per available core
    #[serde(default)]
    pub jobs: usize,

    #[serde(default = "default_true")]
    pub incremental: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            mode: BuildMode::default(),
            jobs: 0,
            incremental: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Command-line overrides, applied last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub language: Option<Language>,
    pub mode: Option<BuildMode>,
    pub jobs: Option<usize>,
    pub incremental: Option<bool>,
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub verbosity: Option<Verbosity>,
    pub color: Option<ColorMode>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub outputs: Vec<OutputFormat>,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Config {
    /// Defaults rooted at `base_dir`
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BakeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BakeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit file, else `shaderbake.toml` in `cwd`, else defaults
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> BakeResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, cwd)
    }

    /// Apply environment variable overrides (SHADERBAKE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Apply command-line overrides; relative paths resolve against `cwd`
    pub fn with_overrides(mut self, overrides: &ConfigOverrides, cwd: &Path) -> Self {
        if let Some(language) = overrides.language {
            self.language = language;
        }
        if let Some(mode) = overrides.mode {
            self.build.mode = mode;
        }
        if let Some(jobs) = overrides.jobs {
            self.build.jobs = jobs;
        }
        if let Some(incremental) = overrides.incremental {
            self.build.incremental = incremental;
        }
        if let Some(source) = &overrides.source {
            self.paths.source = Some(cwd.join(source));
        }
        if let Some(output) = &overrides.output {
            self.paths.output = Some(cwd.join(output));
        }
        if let Some(verbosity) = overrides.verbosity {
            self.output.verbosity = verbosity;
        }
        if let Some(color) = overrides.color {
            self.output.color = color;
        }
        self
    }

    /// Absolute source root
    pub fn source_dir(&self) -> PathBuf {
        let relative = self
            .paths
            .source
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.language.default_source_dir()));
        self.base_dir.join(relative)
    }

    /// Absolute output root
    pub fn output_dir(&self) -> PathBuf {
        let relative = self
            .paths
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        self.base_dir.join(relative)
    }

    /// Explicit compiler path, resolved against the base directory
    pub fn compiler_path(&self) -> Option<PathBuf> {
        self.compiler.path.as_ref().map(|p| self.base_dir.join(p))
    }

    pub fn extensions(&self) -> Vec<String> {
        self.sources
            .extensions
            .clone()
            .unwrap_or_else(|| self.language.default_extensions())
    }

    pub fn exclude_dirs(&self) -> Vec<String> {
        self.sources
            .exclude_dirs
            .clone()
            .unwrap_or_else(|| self.language.default_exclude_dirs())
    }

    /// Recognised entry point names; ignored for single-entry languages
    pub fn entry_points(&self) -> Vec<String> {
        if !self.language.has_named_entry_points() {
            return Vec::new();
        }
        self.sources
            .entry_points
            .clone()
            .unwrap_or_else(|| self.language.default_entry_points())
    }

    pub fn profile(&self) -> Option<String> {
        self.compiler
            .profile
            .clone()
            .or_else(|| self.language.default_profile().map(str::to_string))
    }

    /// Output formats with extensions normalised; SPIR-V when none configured
    pub fn formats(&self) -> Vec<OutputFormat> {
        if self.outputs.is_empty() {
            return vec![OutputFormat::default()];
        }
        self.outputs
            .iter()
            .map(|f| OutputFormat::new(f.target.clone(), f.extension.clone()))
            .collect()
    }

    /// Why the configured outputs cannot share one output directory, if they cannot
    ///
    /// Every format needs its own extension, and `glslc` only emits SPIR-V,
    /// so a GLSL build takes exactly one format.
    pub fn output_conflict(&self) -> Option<String> {
        let formats = self.formats();
        if self.language == Language::Glsl && formats.len() > 1 {
            return Some(format!(
                "glsl builds emit SPIR-V only, but {} [[outputs]] entries are configured",
                formats.len()
            ));
        }

        let mut extensions = HashSet::new();
        for format in &formats {
            if !extensions.insert(format.extension.as_str()) {
                return Some(format!(
                    "output extension '{}' is used by more than one [[outputs]] entry",
                    format.extension
                ));
            }
        }
        None
    }

    /// Worker count with 0 replaced by the available parallelism
    pub fn effective_jobs(&self) -> usize {
        if self.build.jobs > 0 {
            return self.build.jobs;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}
