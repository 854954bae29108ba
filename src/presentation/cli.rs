//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --json, --color, --verbose) are inherited by all subcommands
//! - Build flags are global too, so `shaderbake --debug` and `shaderbake watch --debug` both work
//! - Running without a subcommand is the same as `shaderbake build`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{ColorMode, ConfigOverrides, Verbosity};
use crate::domain::value_objects::{BuildMode, Language};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// shaderbake - incremental shader builds for glslc and slangc
#[derive(Parser, Debug)]
#[command(name = "shaderbake")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'shaderbake' without a command to build stale shaders.")]
pub struct Cli {
    /// Path to a configuration file (default: ./shaderbake.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v per-task lines, -vv debug logs, -vvv trace logs)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub build: BuildArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags shared by every command that plans a build
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildArgs {
    /// Build without optimisation and with debug information
    #[arg(long, global = true, conflicts_with = "release")]
    pub debug: bool,

    /// Build with full optimisation (default)
    #[arg(long, global = true)]
    pub release: bool,

    /// Number of concurrent compiler processes (0 = available cores)
    #[arg(short, long, global = true, value_name = "N")]
    pub jobs: Option<usize>,

    /// Rebuild every target, ignoring timestamps
    #[arg(short, long, global = true)]
    pub force: bool,

    /// Source language
    #[arg(long, global = true, value_enum)]
    pub language: Option<Language>,

    /// Source root directory
    #[arg(long, global = true, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Output directory
    #[arg(long, global = true, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Compile every stale shader (default)
    Build,

    /// List the targets that would be compiled, without running anything
    Plan,

    /// Rebuild whenever the source tree changes
    Watch,
}

impl Cli {
    /// Subcommand to run; `build` when none was given
    pub fn subcommand(&self) -> Commands {
        self.command.unwrap_or(Commands::Build)
    }

    /// Command-line layer of the configuration
    pub fn overrides(&self) -> ConfigOverrides {
        let mode = if self.build.debug {
            Some(BuildMode::Debug)
        } else if self.build.release {
            Some(BuildMode::Release)
        } else {
            None
        };

        ConfigOverrides {
            language: self.build.language,
            mode,
            jobs: self.build.jobs,
            incremental: self.build.force.then_some(false),
            source: self.build.source.clone(),
            output: self.build.output.clone(),
            verbosity: (self.verbose > 0).then_some(Verbosity::Verbose),
            color: self.color.map(ColorMode::from),
        }
    }
}
