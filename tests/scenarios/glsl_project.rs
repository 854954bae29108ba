//! GLSL project built through the library against an in-memory tree

use std::path::{Path, PathBuf};

use shaderbake::domain::entities::RunStatus;
use shaderbake::domain::ports::FileSystem;
use shaderbake::infrastructure::MemoryFs;
use shaderbake::{BuildOptions, BuildUseCase, Language};

use crate::common::*;

fn project() -> MemoryFs {
    let fs = MemoryFs::new();
    fs.add_file("/p/asset/glsl/basic.vert", BASIC_VERT);
    fs.add_file("/p/asset/glsl/lit.frag", LIT_FRAG);
    fs.add_file("/p/asset/glsl/common/lighting.glsl", LIGHTING_GLSL);
    fs
}

fn options() -> BuildOptions {
    BuildOptions::new(Language::Glsl, "/p/asset/glsl", "/p/asset/spv").with_jobs(4)
}

#[test]
fn scenario_first_build_compiles_each_stage_once() {
    let fs = project();
    let compiler = MemoryCompiler::new(&fs);
    let use_case = BuildUseCase::new(&fs, &compiler);

    let result = use_case.execute(&options()).unwrap();

    assert_eq!(result.status(), RunStatus::Success);
    assert_eq!(result.summary.total, 2);
    assert_eq!(
        compiler.outputs(),
        vec![
            PathBuf::from("/p/asset/spv/basic_vert.spv"),
            PathBuf::from("/p/asset/spv/lit_frag.spv"),
        ]
    );
}

#[test]
fn scenario_incremental_runs_are_idempotent() {
    let fs = project();
    let compiler = MemoryCompiler::new(&fs);
    let use_case = BuildUseCase::new(&fs, &compiler);
    let options = options();

    use_case.execute(&options).unwrap();
    for _ in 0..3 {
        let again = use_case.execute(&options).unwrap();
        assert!(again.is_noop());
        assert_eq!(again.status(), RunStatus::NoOp);
        assert_eq!(again.up_to_date, 2);
    }
    assert_eq!(compiler.invocations(), 2);
}

#[test]
fn scenario_editing_shared_include_rebuilds_dependents_only() {
    let fs = project();
    let compiler = MemoryCompiler::new(&fs);
    let use_case = BuildUseCase::new(&fs, &compiler);
    let options = options();
    use_case.execute(&options).unwrap();

    fs.touch(Path::new("/p/asset/glsl/common/lighting.glsl")).unwrap();
    let result = use_case.execute(&options).unwrap();

    assert_eq!(result.summary.total, 1);
    assert_eq!(result.up_to_date, 1);
    assert_eq!(compiler.invocations(), 3);
    assert!(use_case.execute(&options).unwrap().is_noop());
}

#[test]
fn scenario_removed_output_is_rebuilt() {
    let fs = project();
    let compiler = MemoryCompiler::new(&fs);
    let use_case = BuildUseCase::new(&fs, &compiler);
    let options = options();
    use_case.execute(&options).unwrap();

    assert!(fs.remove(Path::new("/p/asset/spv/basic_vert.spv")));
    let result = use_case.execute(&options).unwrap();

    assert_eq!(result.summary.total, 1);
    assert!(fs.is_file(Path::new("/p/asset/spv/basic_vert.spv")));
}

#[test]
fn scenario_broken_shader_is_a_partial_failure() {
    let fs = project();
    fs.add_file("/p/asset/glsl/broken.comp", "void main() {");
    let compiler = MemoryCompiler::new(&fs);
    let use_case = BuildUseCase::new(&fs, &compiler);

    let result = use_case.execute(&options()).unwrap();

    assert_eq!(result.status(), RunStatus::PartialFailure);
    assert_eq!(result.summary.total, 3);
    assert_eq!(result.summary.succeeded, 2);
    assert!(result.is_failure());

    // The failed target stays stale; the others are done
    let retry = use_case.plan(&options()).unwrap();
    assert_eq!(retry.tasks.len(), 1);
    assert_eq!(retry.tasks[0].source_path(), Path::new("/p/asset/glsl/broken.comp"));
}

#[test]
fn scenario_missing_include_fails_one_source_only() {
    let fs = project();
    fs.add_file("/p/asset/glsl/sky.frag", "#include \"common/atmosphere.glsl\"\n");
    // An existing output forces the include graph to be walked
    fs.add_file("/p/asset/spv/sky_frag.spv", "SPIRV");
    let compiler = MemoryCompiler::new(&fs);
    let use_case = BuildUseCase::new(&fs, &compiler);

    let result = use_case.execute(&options()).unwrap();

    assert_eq!(result.summary.total, 2);
    assert_eq!(result.summary.succeeded, 2);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, PathBuf::from("/p/asset/glsl/sky.frag"));
    assert!(result.errors[0].message.contains("common/atmosphere.glsl"));
    assert!(result.is_failure());
}

#[test]
fn scenario_debug_build_passes_debug_flags() {
    let fs = project();
    let mut options = options();
    options.settings.mode = shaderbake::BuildMode::Debug;

    let plan = BuildUseCase::new(&fs, MemoryCompiler::new(&fs)).plan(&options).unwrap();
    for task in &plan.tasks {
        assert!(task.args().iter().any(|a| a == "-O0"));
        assert!(task.args().iter().any(|a| a == "-g"));
    }
}
