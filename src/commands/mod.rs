//! Subcommand implementations
//!
//! Each command loads the layered configuration, reports config warnings and
//! returns an `Outcome` that `main` turns into the process exit code.

pub mod build;
pub mod plan;
pub mod watch;

use std::path::PathBuf;

use anyhow::{Context, Result};
use shaderbake::config::{Config, CONFIG_FILE_NAME};
use shaderbake::infrastructure::{resolve_compiler, ToolchainEnv};
use shaderbake::presentation::Cli;
use shaderbake::{BakeError, BakeResult};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Result of a command that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Some task or source failed, or the run was cancelled
    Failure,
}

/// Everything a command needs before it touches the source tree
pub struct Session {
    pub config: Config,
    pub ui: UiContext,
}

impl Session {
    /// File, environment, then command-line layers
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine the working directory")?;
        let (config, warnings) = Config::discover(cli.config.as_deref(), &cwd)?;
        let config = config.with_overrides(&cli.overrides(), &cwd);
        if let Some(message) = config.output_conflict() {
            let file = cli
                .config
                .as_deref()
                .map(|p| cwd.join(p))
                .unwrap_or_else(|| cwd.join(CONFIG_FILE_NAME));
            return Err(BakeError::Config { file, message }.into());
        }

        let ui = UiContext::new(cli.json, cli.color, &config);
        print_config_warnings(&ui, &warnings);
        tracing::debug!(
            language = ?config.language,
            source = %config.source_dir().display(),
            output = %config.output_dir().display(),
            "configuration loaded"
        );

        Ok(Self { config, ui })
    }

    pub fn resolve_compiler(&self) -> BakeResult<PathBuf> {
        let language = self.config.language;
        resolve_compiler(
            language,
            self.config.compiler_path().as_deref(),
            &ToolchainEnv::from_process(language),
        )
    }
}
