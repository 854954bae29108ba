//! Output path contracts
//!
//! Output names are derived, never stored: every run must re-derive the
//! same path for the same target, and two targets must never share one.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use shaderbake::domain::services::{OutputMapper, OutputNaming};
use shaderbake::domain::value_objects::{EntryPoint, OutputFormat};
use shaderbake::infrastructure::MemoryFs;
use shaderbake::{BakeError, BuildOptions, BuildUseCase, Language};

use crate::common::*;

fn glsl_mapper() -> OutputMapper {
    OutputMapper::new("/p/asset/glsl", "/p/asset/spv", OutputNaming::SourceExtension)
}

/// CONTRACT: the mapping is a pure function of its inputs
#[test]
fn contract_output_path_is_deterministic() {
    let mapper = glsl_mapper();
    let spv = OutputFormat::spirv();
    let source = Path::new("/p/asset/glsl/post/bloom.frag");

    let first = mapper.map_output(source, None, &spv).unwrap();
    let second = mapper.map_output(source, None, &spv).unwrap();
    let rebuilt = glsl_mapper().map_output(source, None, &spv).unwrap();

    assert_eq!(first, PathBuf::from("/p/asset/spv/post_bloom_frag.spv"));
    assert_eq!(first, second);
    assert_eq!(first, rebuilt);
}

/// CONTRACT: separators inside names cannot make two sources collide
#[test]
fn contract_tricky_names_stay_distinct() {
    let mapper = glsl_mapper();
    let spv = OutputFormat::spirv();
    let sources = [
        "/p/asset/glsl/a/b/x.vert",
        "/p/asset/glsl/a_b/x.vert",
        "/p/asset/glsl/a/b_x.vert",
        "/p/asset/glsl/a~u/b/x.vert",
        "/p/asset/glsl/a~/ub/x.vert",
        "/p/asset/glsl/a_b_x.vert",
    ];

    let outputs: HashSet<PathBuf> = sources
        .iter()
        .map(|s| mapper.map_output(Path::new(s), None, &spv).unwrap())
        .collect();
    assert_eq!(outputs.len(), sources.len());
}

/// CONTRACT: a file directly under the source root has no directory prefix
#[test]
fn contract_root_level_file_has_no_prefix() {
    let mapper = glsl_mapper();
    let out = mapper
        .output_file_name(Path::new("/p/asset/glsl/basic.vert"), None, &OutputFormat::spirv())
        .unwrap();
    assert_eq!(out, "basic_vert.spv");
}

/// CONTRACT: entry points and formats each get their own output
#[test]
fn contract_entry_points_and_formats_are_distinct() {
    let mapper = OutputMapper::new("/p/asset/slang", "/p/asset/spv", OutputNaming::EntryPointSuffix);
    let source = Path::new("/p/asset/slang/mesh.slang");
    let vert = EntryPoint::new("vert_main");
    let frag = EntryPoint::new("frag_main");
    let spv = OutputFormat::spirv();
    let glsl = OutputFormat::new("glsl", "glsl");

    let names: HashSet<String> = [(&vert, &spv), (&frag, &spv), (&vert, &glsl), (&frag, &glsl)]
        .iter()
        .map(|(entry, format)| mapper.output_file_name(source, Some(entry), format).unwrap())
        .collect();

    assert_eq!(
        names,
        ["mesh_vert.spv", "mesh_frag.spv", "mesh_vert.glsl", "mesh_frag.glsl"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    );
}

/// CONTRACT: sources outside the source root are rejected, not flattened
#[test]
fn contract_source_outside_root_is_rejected() {
    let mapper = glsl_mapper();
    let err = mapper
        .map_output(Path::new("/elsewhere/x.vert"), None, &OutputFormat::spirv())
        .unwrap_err();
    assert!(matches!(err, BakeError::PathEscape { .. }));
}

/// CONTRACT: excluded directories produce no targets of their own
#[test]
fn contract_excluded_dirs_produce_no_targets() {
    let fs = MemoryFs::new();
    fs.add_file("/p/asset/slang/mesh.slang", MESH_SLANG);
    fs.add_file("/p/asset/slang/module/common.slang", COMMON_SLANG);
    fs.add_file("/p/asset/slang/pbr_module/brdf.slang", "float brdf() { return 1.0; } void frag_main() {}");

    let compiler = MemoryCompiler::new(&fs);
    let use_case = BuildUseCase::new(&fs, &compiler);
    let plan = use_case
        .plan(&BuildOptions::new(Language::Slang, "/p/asset/slang", "/p/asset/spv"))
        .unwrap();

    assert_eq!(plan.sources, 1);
    for task in &plan.tasks {
        assert_eq!(task.source_path(), Path::new("/p/asset/slang/mesh.slang"));
    }
    assert_eq!(plan.tasks.len(), 2);
}

/// CONTRACT: no two planned tasks write the same file
#[test]
fn contract_planned_outputs_are_unique() {
    let fs = MemoryFs::new();
    fs.add_file("/p/asset/slang/mesh.slang", MESH_SLANG);
    fs.add_file("/p/asset/slang/module/common.slang", COMMON_SLANG);
    fs.add_file("/p/asset/slang/post/mesh.slang", "void vert_main() {}\nvoid comp_main() {}");
    fs.add_file("/p/asset/slang/post_mesh.slang", "void vert_main() {}");

    let mut options = BuildOptions::new(Language::Slang, "/p/asset/slang", "/p/asset/spv");
    options.entry_points = ["vert_main", "vert_main", "frag_main", "comp_main", "frag_main"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    options.settings.formats = vec![OutputFormat::spirv(), OutputFormat::new("glsl", "glsl")];

    let compiler = MemoryCompiler::new(&fs);
    let plan = BuildUseCase::new(&fs, &compiler).plan(&options).unwrap();

    let outputs: HashSet<&Path> = plan.tasks.iter().map(|t| t.output_path()).collect();
    assert_eq!(plan.tasks.len(), 10);
    assert_eq!(outputs.len(), plan.tasks.len());
}

/// CONTRACT: formats that would share a file are refused before anything runs
#[test]
fn contract_shared_extension_is_refused() {
    let fs = MemoryFs::new();
    fs.add_file("/p/asset/slang/mesh.slang", MESH_SLANG);
    fs.add_file("/p/asset/slang/module/common.slang", COMMON_SLANG);

    let mut options = BuildOptions::new(Language::Slang, "/p/asset/slang", "/p/asset/spv");
    options.settings.formats = vec![OutputFormat::spirv(), OutputFormat::new("spirv-asm", "spv")];

    let compiler = MemoryCompiler::new(&fs);
    let err = BuildUseCase::new(&fs, &compiler).execute(&options).unwrap_err();
    assert!(matches!(err, BakeError::OutputCollision { .. }));
    assert_eq!(compiler.invocations(), 0);
}
