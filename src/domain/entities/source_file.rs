//! SourceFile entity - a discovered shader source and the entry points it defines

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{EntryPoint, EntryPointScan};

/// A shader source read from disk. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    extension: String,
    entry_points: Vec<EntryPoint>,
}

impl SourceFile {
    /// Build from already-known entry points
    pub fn new(path: impl Into<PathBuf>, entry_points: Vec<EntryPoint>) -> Self {
        let path = path.into();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            extension,
            entry_points,
        }
    }

    /// Build from file content, scanning for the recognised entry point names
    pub fn from_content(
        path: impl Into<PathBuf>,
        content: &str,
        recognised: &[String],
        scan: EntryPointScan,
    ) -> Self {
        Self::new(path, scan.find(content, recognised))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extension without the leading dot
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn entry_points(&self) -> &[EntryPoint] {
        &self.entry_points
    }

    pub fn has_entry_points(&self) -> bool {
        !self.entry_points.is_empty()
    }
}
