//! Configuration contracts
//!
//! Priority: CLI flags > SHADERBAKE_* environment > shaderbake.toml > language defaults

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use shaderbake::config::{apply_env_overrides, parse_with_warnings, Verbosity};
use shaderbake::{BakeError, BuildMode, Config, ConfigOverrides, Language};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
}

/// CONTRACT: unknown keys warn with a location and a suggestion, never fail
#[test]
fn contract_unknown_key_warns() {
    let content = "language = \"glsl\"\n\n[build]\njbos = 4\n";
    let (config, warnings) = parse_with_warnings(content, Path::new("shaderbake.toml")).unwrap();

    assert_eq!(config.language, Language::Glsl);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "jbos");
    assert_eq!(warnings[0].line, Some(4));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("jobs"));
}

/// CONTRACT: invalid values are errors, not silently defaulted
#[test]
fn contract_invalid_value_is_an_error() {
    let err = parse_with_warnings("language = \"hlsl\"\n", Path::new("shaderbake.toml")).unwrap_err();
    assert!(matches!(err, BakeError::Config { .. }));
}

/// CONTRACT: relative paths resolve against the config file's directory
#[test]
fn contract_relative_paths_resolve_against_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("project");
    std::fs::create_dir_all(&config_dir).unwrap();
    let config_path = config_dir.join("shaderbake.toml");
    std::fs::write(
        &config_path,
        "language = \"glsl\"\n[paths]\nsource = \"shaders\"\noutput = \"build/spv\"\n[compiler]\npath = \"tools/glslc\"\n",
    )
    .unwrap();

    let (config, warnings) = Config::load_with_warnings(&config_path).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(config.source_dir(), config_dir.join("shaders"));
    assert_eq!(config.output_dir(), config_dir.join("build/spv"));
    assert_eq!(config.compiler_path(), Some(config_dir.join("tools/glslc")));
}

/// CONTRACT: an explicit --config path must exist
#[test]
fn contract_explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::discover(Some(Path::new("missing.toml")), dir.path()).unwrap_err();
    assert!(matches!(err, BakeError::Config { .. }));
}

/// CONTRACT: defaults follow the selected language
#[test]
fn contract_defaults_follow_language() {
    let mut config = Config::with_base_dir("/p");
    assert_eq!(config.source_dir(), PathBuf::from("/p/asset/slang"));
    assert_eq!(config.exclude_dirs(), vec!["module".to_string()]);

    config = config.with_overrides(
        &ConfigOverrides {
            language: Some(Language::Glsl),
            ..ConfigOverrides::default()
        },
        Path::new("/p"),
    );
    assert_eq!(config.source_dir(), PathBuf::from("/p/asset/glsl"));
    assert!(config.exclude_dirs().is_empty());
    assert!(config.entry_points().is_empty());
    assert_eq!(config.output_dir(), PathBuf::from("/p/asset/spv"));
}

/// CONTRACT: environment overrides the file
#[test]
fn contract_env_overrides_file() {
    let (config, _) = parse_with_warnings(
        "[build]\nmode = \"release\"\njobs = 2\n[output]\nverbosity = \"normal\"\n",
        Path::new("shaderbake.toml"),
    )
    .unwrap();

    let mut sink = Vec::new();
    let config = apply_env_overrides(
        config,
        lookup(&[
            ("SHADERBAKE_MODE", "debug"),
            ("SHADERBAKE_JOBS", "6"),
            ("SHADERBAKE_INCREMENTAL", "false"),
            ("SHADERBAKE_VERBOSITY", "quiet"),
        ]),
        &mut sink,
    );

    assert_eq!(config.build.mode, BuildMode::Debug);
    assert_eq!(config.build.jobs, 6);
    assert!(!config.build.incremental);
    assert_eq!(config.output.verbosity, Verbosity::Quiet);
    assert!(sink.is_empty());
}

/// CONTRACT: an invalid environment value warns and keeps the previous value
#[test]
fn contract_invalid_env_value_keeps_previous() {
    let (config, _) = parse_with_warnings("[build]\njobs = 3\n", Path::new("shaderbake.toml")).unwrap();

    let mut sink = Vec::new();
    let config = apply_env_overrides(config, lookup(&[("SHADERBAKE_JOBS", "many")]), &mut sink);

    assert_eq!(config.build.jobs, 3);
    let message = String::from_utf8(sink).unwrap();
    assert!(message.contains("SHADERBAKE_JOBS"), "got: {message}");
}

/// CONTRACT: CLI flags override environment and file
#[test]
fn contract_cli_overrides_env() {
    let (config, _) = parse_with_warnings("[build]\nmode = \"release\"\n", Path::new("shaderbake.toml")).unwrap();
    let config = apply_env_overrides(config, lookup(&[("SHADERBAKE_MODE", "debug")]), &mut Vec::new());

    let config = config.with_overrides(
        &ConfigOverrides {
            mode: Some(BuildMode::Release),
            source: Some(PathBuf::from("src/shaders")),
            ..ConfigOverrides::default()
        },
        Path::new("/work"),
    );

    assert_eq!(config.build.mode, BuildMode::Release);
    assert_eq!(config.source_dir(), PathBuf::from("/work/src/shaders"));
}
