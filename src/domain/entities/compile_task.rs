//! OutputTarget and CompileTask entities
//!
//! An OutputTarget names one file the build will produce; a CompileTask is the
//! external command that produces it.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{EntryPoint, OutputFormat};

/// One derived output of a source file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputTarget {
    /// Absolute output path
    pub path: PathBuf,
    /// Source the output is compiled from
    pub source: PathBuf,
    /// Entry point selected, for multi-entry languages
    pub entry_point: Option<EntryPoint>,
    /// Target encoding
    pub format: OutputFormat,
}

/// An external compiler invocation. Immutable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileTask {
    program: PathBuf,
    args: Vec<String>,
    target: OutputTarget,
}

impl CompileTask {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>, target: OutputTarget) -> Self {
        Self {
            program: program.into(),
            args,
            target,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    pub fn output_path(&self) -> &Path {
        &self.target.path
    }

    pub fn source_path(&self) -> &Path {
        &self.target.source
    }

    /// Human-readable command line, for logs only (never executed through a shell)
    pub fn display_command(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            if arg.contains(char::is_whitespace) {
                line.push('"');
                line.push_str(arg);
                line.push('"');
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}
