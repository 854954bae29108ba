//! BuildPlan entity - everything decided before the first compiler starts

use std::path::PathBuf;

use super::compile_task::CompileTask;

/// Non-fatal condition attached to a single source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
    /// A multi-entry source matched none of the recognised entry points
    NoEntryPoints { path: PathBuf },
}

impl std::fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildWarning::NoEntryPoints { path } => {
                write!(f, "no entry points found in {}", path.display())
            }
        }
    }
}

/// A source file whose tasks could not be planned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    pub path: PathBuf,
    pub message: String,
}

/// Tasks to run plus what was skipped and why
#[derive(Debug, Clone, Default)]
pub struct BuildPlan {
    pub tasks: Vec<CompileTask>,
    /// Number of source files discovered
    pub sources: usize,
    /// Targets skipped because they are up to date
    pub up_to_date: usize,
    pub warnings: Vec<BuildWarning>,
    pub errors: Vec<SourceError>,
}

impl BuildPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
