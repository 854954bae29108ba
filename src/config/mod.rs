//! Configuration module for shaderbake
//!
//! Configuration hierarchy (highest priority first):
//! 1. CLI flags
//! 2. Environment variables (SHADERBAKE_*)
//! 3. Project config (`shaderbake.toml`)
//! 4. Language defaults

mod env_validator;
mod loader;
mod types;

// Re-export ConfigWarning from domain layer
pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{apply_env_overrides, parse_with_warnings};
pub use types::{
    BuildConfig, ColorMode, CompilerConfig, Config, ConfigOverrides, OutputConfig, PathsConfig, SourcesConfig,
    Verbosity, CONFIG_FILE_NAME, DEFAULT_OUTPUT_DIR,
};
