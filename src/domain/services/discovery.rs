//! Discovery service
//!
//! Walks the source tree and yields candidate shader sources.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::ports::{DirFilter, FileSystem, FsResult};
use crate::error::{BakeError, BakeResult};

/// Finds source files under a root, filtered by extension
pub struct Discovery<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    root: PathBuf,
    extensions: Vec<String>,
    exclude_dirs: Vec<String>,
}

impl<'a, F: FileSystem + ?Sized> Discovery<'a, F> {
    pub fn new(fs: &'a F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
            extensions: Vec::new(),
            exclude_dirs: Vec::new(),
        }
    }

    /// Extensions to accept; a leading dot is ignored
    pub fn with_extensions(mut self, extensions: &[String]) -> Self {
        self.extensions = extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    /// Directory names whose subtrees are skipped
    pub fn with_exclude_dirs(mut self, names: &[String]) -> Self {
        self.exclude_dirs = names.iter().filter(|n| !n.is_empty()).cloned().collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily walk the tree. Single pass; call again to re-run.
    pub fn discover(&self) -> BakeResult<impl Iterator<Item = FsResult<PathBuf>> + 'a> {
        if !self.fs.is_dir(&self.root) {
            return Err(BakeError::DirectoryNotFound {
                path: self.root.clone(),
            });
        }

        let excludes = self.exclude_dirs.clone();
        let prune: DirFilter = Arc::new(move |dir: &Path| {
            dir.file_name()
                .map(|name| is_excluded_dir(&name.to_string_lossy(), &excludes))
                .unwrap_or(false)
        });

        let extensions = self.extensions.clone();
        Ok(self
            .fs
            .walk_files(&self.root, prune)
            .filter(move |entry| match entry {
                Ok(path) => has_valid_extension(path, &extensions),
                Err(_) => true,
            }))
    }
}

/// A directory is excluded when its name ends with any excluded name
pub fn is_excluded_dir(name: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|e| !e.is_empty() && name.ends_with(e.as_str()))
}

/// Extension check without leading dots, case-sensitive
pub fn has_valid_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            extensions.iter().any(|e| e.as_str() == ext)
        })
        .unwrap_or(false)
}
