//! Test environment for end-to-end CLI runs.
//!
//! Provides `TestEnv` - an isolated project directory, a fake compiler script
//! and helpers to run the `shaderbake` binary against it.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// Result of running a shaderbake CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("invalid JSON line {l:?}: {e}")))
            .collect()
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_shaderbake")),
        }
    }

    /// Get path relative to project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file, creating parent directories
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Set a file's modification time
    pub fn set_mtime(&self, relative: &str, time: SystemTime) {
        let file = File::options()
            .write(true)
            .open(self.path(relative))
            .expect("Failed to open file for mtime update");
        file.set_modified(time).expect("Failed to set mtime");
    }

    /// Move a file's modification time `secs` seconds into the past
    pub fn age(&self, relative: &str, secs: u64) {
        self.set_mtime(relative, SystemTime::now() - Duration::from_secs(secs));
    }

    pub fn mtime(&self, relative: &str) -> SystemTime {
        std::fs::metadata(self.path(relative))
            .and_then(|m| m.modified())
            .expect("Failed to read mtime")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG")
            .env_remove("SHADERBAKE_MODE")
            .env_remove("SHADERBAKE_JOBS")
            .env_remove("SHADERBAKE_INCREMENTAL")
            .env_remove("SHADERBAKE_VERBOSITY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute shaderbake");
        output_to_result(output)
    }

    /// Lines of the fake compiler's invocation log
    pub fn invocations(&self) -> Vec<String> {
        std::fs::read_to_string(self.path("bin/invocations.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn clear_invocations(&self) {
        let _ = std::fs::remove_file(self.path("bin/invocations.log"));
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Shell script standing in for glslc/slangc
///
/// Logs its arguments, fails for sources whose path contains "broken", and
/// otherwise writes the `-o` target.
#[cfg(unix)]
pub const FAKE_COMPILER_SCRIPT: &str = r#"#!/bin/sh
src="$1"
out=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "-o" ]; then out="$arg"; fi
  prev="$arg"
done
echo "$*" >> "$(dirname "$0")/invocations.log"
case "$src" in
  *broken*) echo "$src:1: error: syntax error" >&2; exit 1 ;;
esac
printf 'SPIRV' > "$out"
"#;

#[cfg(unix)]
impl TestEnv {
    /// Install the fake compiler at `bin/<name>` and return its path
    pub fn install_fake_compiler(&self, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write_file(&format!("bin/{}", name), FAKE_COMPILER_SCRIPT);
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    /// GLSL project: basic.vert, lit.frag including common/lighting.glsl
    pub fn glsl_project(&self) {
        self.install_fake_compiler("glslc");
        self.write_file(
            "shaderbake.toml",
            "language = \"glsl\"\n\n[compiler]\npath = \"bin/glslc\"\n",
        );
        self.write_file("asset/glsl/basic.vert", super::fixtures::BASIC_VERT);
        self.write_file("asset/glsl/lit.frag", super::fixtures::LIT_FRAG);
        self.write_file("asset/glsl/common/lighting.glsl", super::fixtures::LIGHTING_GLSL);
    }
}

/// Check that `path` is absent; clearer failure than a bare assert
pub fn assert_missing(path: &Path) {
    assert!(!path.exists(), "expected {} to be absent", path.display());
}
