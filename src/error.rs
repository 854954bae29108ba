//! Error types for shaderbake
//!
//! Library code returns `BakeResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::file_system::FsError;

/// Result type alias for shaderbake operations
pub type BakeResult<T> = Result<T, BakeError>;

/// Main error type for shaderbake operations
#[derive(Error, Debug)]
pub enum BakeError {
    /// The external compiler could not be located
    #[error("compiler '{}' not found (searched: {})", .name, format_searched(.searched))]
    ToolNotFound { name: String, searched: Vec<PathBuf> },

    /// An include/import directive points at a file that does not exist
    #[error("missing dependency '{directive}' at {from}:{line} (resolved to {resolved})")]
    MissingDependency {
        from: PathBuf,
        line: usize,
        directive: String,
        resolved: PathBuf,
    },

    /// Source root does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Source file is not located below the source root
    #[error("path '{path}' escapes source root '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Invalid configuration file or value
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Two planned tasks would write the same output file
    #[error("output '{}' would be written by both {} and {}", .output.display(), .first.display(), .second.display())]
    OutputCollision {
        output: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    /// Worker pool could not be created
    #[error("failed to start worker pool: {0}")]
    WorkerPool(String),

    /// File watcher failure
    #[error("watch error: {0}")]
    Watch(String),

    /// Filesystem port failure
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_searched(searched: &[PathBuf]) -> String {
    if searched.is_empty() {
        return "PATH".to_string();
    }
    searched
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl BakeError {
    /// Errors that abort the whole run rather than a single source file
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            BakeError::MissingDependency { .. } | BakeError::PathEscape { .. } | BakeError::Fs(_)
        )
    }
}
