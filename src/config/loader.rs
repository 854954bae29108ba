//! Configuration loading
//!
//! Layering, lowest to highest: language defaults, `shaderbake.toml`,
//! `SHADERBAKE_*` environment variables, command-line flags.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::BuildMode;
use crate::error::{BakeError, BakeResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::{Config, Verbosity, CONFIG_FILE_NAME};
use super::ConfigWarning;

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative paths inside the file resolve against its directory.
pub fn load_with_warnings(path: &Path) -> BakeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| BakeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let (mut config, warnings) = parse_with_warnings(&content, path)?;
    config.base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok((config, warnings))
}

/// Parse TOML text; `path` is only used for messages
pub fn parse_with_warnings(content: &str, path: &Path) -> BakeResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BakeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate(&config, path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

fn validate(config: &Config, path: &Path) -> BakeResult<()> {
    let invalid = |message: String| BakeError::Config {
        file: path.to_path_buf(),
        message,
    };

    for format in &config.outputs {
        if format.target.trim().is_empty() {
            return Err(invalid("output target must not be empty".to_string()));
        }
    }
    if let Some(extensions) = &config.sources.extensions {
        if extensions.iter().any(|e| e.trim_start_matches('.').is_empty()) {
            return Err(invalid("source extensions must not be empty".to_string()));
        }
    }
    if let Some(message) = config.output_conflict() {
        return Err(invalid(message));
    }
    Ok(())
}

/// Explicit file (must exist), else `shaderbake.toml` in `cwd`, else defaults
///
/// Environment overrides are applied to the result.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> BakeResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                return Err(BakeError::Config {
                    file: path,
                    message: "file not found".to_string(),
                });
            }
            load_with_warnings(&path)?
        }
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                load_with_warnings(&candidate)?
            } else {
                tracing::debug!(cwd = %cwd.display(), "no config file, using defaults");
                (Config::with_base_dir(cwd), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (SHADERBAKE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply overrides from an arbitrary variable lookup; invalid values are
/// reported to `writer` and ignored
pub fn apply_env_overrides<L, W>(mut config: Config, lookup: L, writer: &mut W) -> Config
where
    L: Fn(&str) -> Option<String>,
    W: Write,
{
    // SHADERBAKE_MODE
    if let Some(mode) = lookup("SHADERBAKE_MODE") {
        config.build.mode = EnvVarValidator::new("SHADERBAKE_MODE", &["release", "debug"]).apply(
            &mode,
            |s| match s.to_lowercase().as_str() {
                "release" => Some(BuildMode::Release),
                "debug" => Some(BuildMode::Debug),
                _ => None,
            },
            config.build.mode,
            writer,
        );
    }

    // SHADERBAKE_JOBS
    if let Some(jobs) = lookup("SHADERBAKE_JOBS") {
        config.build.jobs = EnvVarValidator::new("SHADERBAKE_JOBS", &["0", "<number of workers>"]).apply(
            &jobs,
            |s| s.trim().parse::<usize>().ok(),
            config.build.jobs,
            writer,
        );
    }

    // SHADERBAKE_INCREMENTAL
    if let Some(val) = lookup("SHADERBAKE_INCREMENTAL") {
        config.build.incremental = EnvVarValidator::new("SHADERBAKE_INCREMENTAL", &["true", "false", "1", "0"])
            .apply(
                &val,
                |s| match s.to_lowercase().as_str() {
                    "true" | "1" | "yes" => Some(true),
                    "false" | "0" | "no" => Some(false),
                    _ => None,
                },
                config.build.incremental,
                writer,
            );
    }

    // SHADERBAKE_VERBOSITY
    if let Some(verbosity) = lookup("SHADERBAKE_VERBOSITY") {
        config.output.verbosity = EnvVarValidator::new("SHADERBAKE_VERBOSITY", &["quiet", "normal", "verbose"])
            .apply(
                &verbosity,
                |s| match s.to_lowercase().as_str() {
                    "quiet" => Some(Verbosity::Quiet),
                    "normal" => Some(Verbosity::Normal),
                    "verbose" => Some(Verbosity::Verbose),
                    _ => None,
                },
                config.output.verbosity,
                writer,
            );
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "language",
        "paths",
        "source",
        "output",
        "sources",
        "extensions",
        "exclude_dirs",
        "entry_points",
        "entry_scan",
        "compiler",
        "path",
        "profile",
        "extra_args",
        "outputs",
        "target",
        "extension",
        "build",
        "mode",
        "jobs",
        "incremental",
        "verbosity",
        "color",
    ];

    closest(unknown, CANDIDATES.iter().copied()).map(str::to_string)
}
