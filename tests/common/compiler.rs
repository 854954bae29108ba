//! In-process compiler double for library-level tests

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use shaderbake::domain::ports::{CommandOutput, CommandRunner};
use shaderbake::infrastructure::MemoryFs;

/// Writes the `-o` target into a `MemoryFs`; sources containing "broken" fail
pub struct MemoryCompiler<'a> {
    fs: &'a MemoryFs,
    invocations: AtomicUsize,
    outputs: Mutex<Vec<PathBuf>>,
}

impl<'a> MemoryCompiler<'a> {
    pub fn new(fs: &'a MemoryFs) -> Self {
        Self {
            fs,
            invocations: AtomicUsize::new(0),
            outputs: Mutex::new(Vec::new()),
        }
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }

    /// Outputs written so far, sorted
    pub fn outputs(&self) -> Vec<PathBuf> {
        let mut outputs = self.outputs.lock().unwrap().clone();
        outputs.sort();
        outputs
    }
}

pub fn output_arg(args: &[String]) -> Option<PathBuf> {
    args.iter()
        .position(|a| a == "-o")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
}

impl CommandRunner for MemoryCompiler<'_> {
    fn run(&self, _program: &Path, args: &[String]) -> std::io::Result<CommandOutput> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        let source = &args[0];
        if source.contains("broken") {
            return Ok(CommandOutput::failure(format!("{}:1: error: syntax error", source)));
        }
        let output = output_arg(args).ok_or_else(|| std::io::Error::other("missing -o"))?;
        self.fs.add_file(&output, "SPIRV");
        self.outputs.lock().unwrap().push(output);
        Ok(CommandOutput::success())
    }
}
