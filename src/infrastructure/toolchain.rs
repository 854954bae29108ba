//! Compiler resolution
//!
//! Finds the compiler executable for a language: an explicit path, then
//! `PATH`, then the `bin/` directory of the language's SDK.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Language;
use crate::error::{BakeError, BakeResult};

/// Inputs to compiler lookup, captured so tests need not touch the process env
#[derive(Debug, Clone, Default)]
pub struct ToolchainEnv {
    /// Value of `PATH`
    pub path: Option<OsString>,
    /// Value of the language's SDK variable (`VULKAN_SDK`, `SLANG_SDK`)
    pub sdk_root: Option<PathBuf>,
}

impl ToolchainEnv {
    /// Snapshot the relevant variables of the current process
    pub fn from_process(language: Language) -> Self {
        Self {
            path: std::env::var_os("PATH"),
            sdk_root: std::env::var_os(language.sdk_env_var())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Resolve the compiler for `language`
///
/// An explicitly configured path must exist; it is never silently replaced
/// by a PATH lookup.
pub fn resolve_compiler(language: Language, configured: Option<&Path>, env: &ToolchainEnv) -> BakeResult<PathBuf> {
    let name = language.compiler_name();

    if let Some(path) = configured {
        if path.is_file() {
            tracing::debug!(compiler = %path.display(), "using configured compiler");
            return Ok(path.to_path_buf());
        }
        return Err(BakeError::ToolNotFound {
            name: name.to_string(),
            searched: vec![path.to_path_buf()],
        });
    }

    let file_name = executable_name(name);
    let mut searched = Vec::new();

    if let Some(path_var) = &env.path {
        for dir in std::env::split_paths(path_var) {
            let candidate = dir.join(&file_name);
            if candidate.is_file() {
                tracing::debug!(compiler = %candidate.display(), "found compiler on PATH");
                return Ok(candidate);
            }
        }
        searched.push(PathBuf::from("PATH"));
    }

    if let Some(sdk) = &env.sdk_root {
        for bin in ["bin", "Bin"] {
            let candidate = sdk.join(bin).join(&file_name);
            if candidate.is_file() {
                tracing::debug!(compiler = %candidate.display(), "found compiler in SDK");
                return Ok(candidate);
            }
            searched.push(candidate);
        }
    }

    Err(BakeError::ToolNotFound {
        name: name.to_string(),
        searched,
    })
}

fn executable_name(name: &str) -> String {
    if cfg!(windows) {
        format!("{name}.exe")
    } else {
        name.to_string()
    }
}
