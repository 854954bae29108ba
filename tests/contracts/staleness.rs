//! Staleness contracts
//!
//! An output is rebuilt exactly when it is missing or older than its source
//! or anything the source transitively includes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use shaderbake::domain::services::{DependencyResolver, StalenessChecker};
use shaderbake::infrastructure::MemoryFs;
use shaderbake::{BakeError, BuildOptions, BuildUseCase, Language};

use crate::common::*;

fn checker(fs: &MemoryFs) -> StalenessChecker<'_, MemoryFs> {
    StalenessChecker::new(DependencyResolver::new(fs, Language::Glsl.default_directive()))
}

/// CONTRACT: a missing output is always stale
#[test]
fn contract_missing_output_is_stale() {
    let fs = MemoryFs::new();
    fs.add_file("/p/basic.vert", BASIC_VERT);
    assert!(checker(&fs)
        .is_stale(Path::new("/p/basic.vert"), Path::new("/out/basic_vert.spv"))
        .unwrap());
}

/// CONTRACT: equal timestamps count as up to date
#[test]
fn contract_equal_mtime_is_not_stale() {
    let fs = MemoryFs::new();
    let at = fs.tick();
    fs.add_file_at("/p/lit.frag", LIT_FRAG, at);
    fs.add_file_at("/p/common/lighting.glsl", LIGHTING_GLSL, at);
    fs.add_file_at("/out/lit_frag.spv", "SPIRV", at);

    assert!(!checker(&fs)
        .is_stale(Path::new("/p/lit.frag"), Path::new("/out/lit_frag.spv"))
        .unwrap());
}

/// CONTRACT: a newer transitive dependency makes the output stale
#[test]
fn contract_transitive_dependency_is_followed() {
    let fs = MemoryFs::new();
    fs.add_file("/p/lit.frag", LIT_FRAG);
    fs.add_file("/p/common/lighting.glsl", "#include \"brdf.glsl\"\n");
    fs.add_file("/p/common/brdf.glsl", "float brdf() { return 1.0; }\n");
    let built = fs.add_file("/out/lit_frag.spv", "SPIRV");

    let checker = checker(&fs);
    assert!(!checker
        .is_stale(Path::new("/p/lit.frag"), Path::new("/out/lit_frag.spv"))
        .unwrap());

    fs.set_modified(Path::new("/p/common/brdf.glsl"), built + Duration::from_secs(5))
        .unwrap();
    assert!(checker
        .is_stale(Path::new("/p/lit.frag"), Path::new("/out/lit_frag.spv"))
        .unwrap());
}

/// CONTRACT: include cycles terminate
#[test]
fn contract_include_cycle_terminates() {
    let fs = MemoryFs::new();
    fs.add_file("/p/a.frag", "#include \"b.glsl\"\n");
    fs.add_file("/p/b.glsl", "#include \"c.glsl\"\n");
    fs.add_file("/p/c.glsl", "#include \"b.glsl\"\n#include \"../p/a.frag\"\n");
    fs.add_file("/out/a_frag.spv", "SPIRV");

    let checker = checker(&fs);
    assert!(!checker
        .is_stale(Path::new("/p/a.frag"), Path::new("/out/a_frag.spv"))
        .unwrap());
    assert_eq!(checker.dependency_closure(Path::new("/p/a.frag")).unwrap().len(), 2);
}

/// CONTRACT: a directive that resolves to nothing is an error for that source
#[test]
fn contract_missing_dependency_errors() {
    let fs = MemoryFs::new();
    fs.add_file("/p/sky.frag", "#version 450\n#include \"common/atmosphere.glsl\"\n");
    fs.add_file("/out/sky_frag.spv", "SPIRV");

    let err = checker(&fs)
        .is_stale(Path::new("/p/sky.frag"), Path::new("/out/sky_frag.spv"))
        .unwrap_err();
    match err {
        BakeError::MissingDependency { line, directive, .. } => {
            assert_eq!(line, 2);
            assert_eq!(directive, "common/atmosphere.glsl");
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// CONTRACT: a missing dependency fails only its own source
#[test]
fn contract_missing_dependency_is_per_source() {
    let fs = MemoryFs::new();
    fs.add_file("/p/asset/glsl/basic.vert", BASIC_VERT);
    fs.add_file("/p/asset/glsl/sky.frag", "#include \"nope.glsl\"\n");
    fs.add_file("/p/asset/spv/sky_frag.spv", "SPIRV");

    let compiler = MemoryCompiler::new(&fs);
    let use_case = BuildUseCase::new(&fs, &compiler);
    let result = use_case
        .execute(&BuildOptions::new(Language::Glsl, "/p/asset/glsl", "/p/asset/spv"))
        .unwrap();

    assert_eq!(result.summary.total, 1);
    assert_eq!(result.errors.len(), 1);
    assert!(result.is_failure());
    assert_eq!(compiler.outputs(), vec![PathBuf::from("/p/asset/spv/basic_vert.spv")]);
}

/// CONTRACT: non-incremental builds ignore timestamps entirely
#[test]
fn contract_force_rebuilds_fresh_outputs() {
    let fs = MemoryFs::new();
    fs.add_file("/p/asset/glsl/basic.vert", BASIC_VERT);
    fs.add_file("/p/asset/spv/basic_vert.spv", "SPIRV");

    let compiler = MemoryCompiler::new(&fs);
    let use_case = BuildUseCase::new(&fs, &compiler);
    let options = BuildOptions::new(Language::Glsl, "/p/asset/glsl", "/p/asset/spv");

    assert!(use_case.execute(&options).unwrap().is_noop());
    let forced = use_case.execute(&options.with_incremental(false)).unwrap();
    assert_eq!(forced.summary.total, 1);
    assert_eq!(compiler.invocations(), 1);
}
