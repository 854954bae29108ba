//! Staleness checker
//!
//! Decides whether an output must be rebuilt by comparing its modification
//! time against the source and every transitive dependency.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::error::BakeResult;

use super::dependency_resolver::DependencyResolver;

/// Rebuild decision over the include/import graph
///
/// Ties (equal timestamps) are treated as up to date.
pub struct StalenessChecker<'a, F: FileSystem + ?Sized> {
    resolver: DependencyResolver<'a, F>,
}

impl<'a, F: FileSystem + ?Sized> StalenessChecker<'a, F> {
    pub fn new(resolver: DependencyResolver<'a, F>) -> Self {
        Self { resolver }
    }

    /// True when `output` is missing or older than `source` or any dependency
    pub fn is_stale(&self, source: &Path, output: &Path) -> BakeResult<bool> {
        let fs = self.resolver.fs();
        if !fs.is_file(output) {
            tracing::trace!(output = %output.display(), "output missing");
            return Ok(true);
        }

        let out_mtime = fs.modified(output)?;
        if fs.modified(source)? > out_mtime {
            tracing::trace!(source = %source.display(), "source newer than output");
            return Ok(true);
        }

        let mut visited: HashSet<PathBuf> = HashSet::new();
        visited.insert(source.to_path_buf());
        let mut stack = vec![source.to_path_buf()];

        while let Some(file) = stack.pop() {
            for dep in self.resolver.resolve_includes(&file)? {
                if !visited.insert(dep.clone()) {
                    tracing::trace!(
                        file = %file.display(),
                        dep = %dep.display(),
                        "dependency already visited"
                    );
                    continue;
                }
                if fs.modified(&dep)? > out_mtime {
                    tracing::debug!(
                        dep = %dep.display(),
                        output = %output.display(),
                        "dependency newer than output"
                    );
                    return Ok(true);
                }
                stack.push(dep);
            }
        }

        Ok(false)
    }

    /// Every file reachable from `source` through directives, excluding itself
    pub fn dependency_closure(&self, source: &Path) -> BakeResult<Vec<PathBuf>> {
        let mut visited: HashSet<PathBuf> = HashSet::new();
        visited.insert(source.to_path_buf());
        let mut stack = vec![source.to_path_buf()];
        let mut closure = Vec::new();

        while let Some(file) = stack.pop() {
            for dep in self.resolver.resolve_includes(&file)? {
                if visited.insert(dep.clone()) {
                    closure.push(dep.clone());
                    stack.push(dep);
                }
            }
        }

        closure.sort();
        Ok(closure)
    }
}
