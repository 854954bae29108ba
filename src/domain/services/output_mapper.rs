//! Output path mapper
//!
//! Derives flat output file names from nested source paths. The mapping is a
//! pure function of (source, source root, entry point, format): staleness
//! checks on later runs re-derive the same path and compare against it.
//!
//! Every name segment is escaped (`_` -> `~u`, `~` -> `~~`) before being
//! joined with `_`, so `a/b/x.vert` and `a_b/x.vert` cannot collide.

use std::path::{Component, Path, PathBuf};

use crate::domain::value_objects::{EntryPoint, OutputFormat};
use crate::error::{BakeError, BakeResult};

/// Separator placed between flattened segments
pub const FLATTEN_SEPARATOR: char = '_';

/// Which tag follows the file stem in an output name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputNaming {
    /// `lit.frag` -> `lit_frag.spv` (one stage per file)
    SourceExtension,
    /// `mesh.slang` + `vert_main` -> `mesh_vert.spv`
    EntryPointSuffix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputMapper {
    source_root: PathBuf,
    output_root: PathBuf,
    naming: OutputNaming,
}

impl OutputMapper {
    pub fn new(source_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>, naming: OutputNaming) -> Self {
        Self {
            source_root: source_root.into(),
            output_root: output_root.into(),
            naming,
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Map a source (plus optional entry point) to its output path for `format`
    pub fn map_output(
        &self,
        source: &Path,
        entry_point: Option<&EntryPoint>,
        format: &OutputFormat,
    ) -> BakeResult<PathBuf> {
        let file_name = self.output_file_name(source, entry_point, format)?;
        Ok(self.output_root.join(file_name))
    }

    /// File name only, without the output root
    pub fn output_file_name(
        &self,
        source: &Path,
        entry_point: Option<&EntryPoint>,
        format: &OutputFormat,
    ) -> BakeResult<String> {
        let mut segments = relative_dir_segments(source, &self.source_root)?;

        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        segments.push(stem);

        if self.naming == OutputNaming::SourceExtension {
            if let Some(ext) = source.extension() {
                segments.push(ext.to_string_lossy().into_owned());
            }
        }
        if let Some(entry) = entry_point {
            segments.push(entry.suffix().to_string());
        }

        let mut name = flatten(&segments);
        if !format.extension.is_empty() {
            name.push('.');
            name.push_str(&format.extension);
        }
        Ok(name)
    }
}

/// Directory components of `source` relative to `root`; empty at the root
fn relative_dir_segments(source: &Path, root: &Path) -> BakeResult<Vec<String>> {
    let escape = || BakeError::PathEscape {
        path: source.to_path_buf(),
        root: root.to_path_buf(),
    };

    let parent = source.parent().unwrap_or_else(|| Path::new(""));
    let relative = parent.strip_prefix(root).map_err(|_| escape())?;

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => return Err(escape()),
        }
    }
    Ok(segments)
}

/// Escape one segment so it never contains the separator
pub fn escape_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        match c {
            '~' => out.push_str("~~"),
            FLATTEN_SEPARATOR => out.push_str("~u"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape and join segments with the separator
pub fn flatten(segments: &[String]) -> String {
    segments
        .iter()
        .map(|s| escape_segment(s))
        .collect::<Vec<_>>()
        .join(&FLATTEN_SEPARATOR.to_string())
}
