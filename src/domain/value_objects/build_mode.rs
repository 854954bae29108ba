//! Build mode value object - optimisation profile passed to the compiler

use serde::{Deserialize, Serialize};

/// Optimisation profile of a build
///
/// - `Release`: highest optimisation, symbols stripped/obfuscated (default)
/// - `Debug`: no optimisation, full debug information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Release,
    Debug,
}

impl BuildMode {
    pub fn is_release(&self) -> bool {
        matches!(self, BuildMode::Release)
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildMode::Release => write!(f, "release"),
            BuildMode::Debug => write!(f, "debug"),
        }
    }
}
