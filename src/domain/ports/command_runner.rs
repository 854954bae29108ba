//! CommandRunner port - runs one external compiler invocation
//!
//! The executor only needs "run this program with these arguments and tell me
//! whether it succeeded". Tests substitute scripted runners.

use std::path::Path;

/// What a finished process reported
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit status indicated success
    pub success: bool,
    /// Combined stderr/stdout text, for diagnostics only
    pub diagnostics: String,
}

impl CommandOutput {
    pub fn success() -> Self {
        Self {
            success: true,
            diagnostics: String::new(),
        }
    }

    pub fn failure(diagnostics: impl Into<String>) -> Self {
        Self {
            success: false,
            diagnostics: diagnostics.into(),
        }
    }
}

/// Executes a structured argument list. Never goes through a shell.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` to completion
    fn run(&self, program: &Path, args: &[String]) -> std::io::Result<CommandOutput>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &Path, args: &[String]) -> std::io::Result<CommandOutput> {
        (**self).run(program, args)
    }
}
