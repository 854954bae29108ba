//! In-memory File System
//!
//! A FileSystem with explicit, controllable modification times. Every write
//! advances a logical clock by one second so ordering is unambiguous.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::domain::ports::file_system::{DirFilter, FileSystem, FileWalk, FsError, FsResult};

#[derive(Debug, Clone)]
struct MemFile {
    content: String,
    modified: SystemTime,
}

/// In-memory tree for tests and dry runs
#[derive(Debug)]
pub struct MemoryFs {
    files: RwLock<BTreeMap<PathBuf, MemFile>>,
    dirs: RwLock<BTreeSet<PathBuf>>,
    clock: Mutex<SystemTime>,
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(BTreeMap::new()),
            dirs: RwLock::new(BTreeSet::new()),
            clock: Mutex::new(UNIX_EPOCH + Duration::from_secs(1_700_000_000)),
        }
    }

    /// Advance the logical clock and return the new time
    pub fn tick(&self) -> SystemTime {
        let mut clock = self.clock.lock().unwrap_or_else(|e| e.into_inner());
        *clock += Duration::from_secs(1);
        *clock
    }

    /// Write a file stamped with the next clock tick
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) -> SystemTime {
        let at = self.tick();
        self.add_file_at(path, content, at);
        at
    }

    /// Write a file with an explicit modification time
    pub fn add_file_at(&self, path: impl Into<PathBuf>, content: impl Into<String>, modified: SystemTime) {
        let path = path.into();
        self.register_parents(&path);
        let mut files = self.files.write().unwrap_or_else(|e| e.into_inner());
        files.insert(
            path,
            MemFile {
                content: content.into(),
                modified,
            },
        );
    }

    /// Bump a file's modification time to the next tick without changing content
    pub fn touch(&self, path: &Path) -> FsResult<SystemTime> {
        let at = self.tick();
        self.set_modified(path, at)?;
        Ok(at)
    }

    pub fn set_modified(&self, path: &Path, modified: SystemTime) -> FsResult<()> {
        let mut files = self.files.write().unwrap_or_else(|e| e.into_inner());
        match files.get_mut(path) {
            Some(file) => {
                file.modified = modified;
                Ok(())
            }
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    pub fn remove(&self, path: &Path) -> bool {
        let mut files = self.files.write().unwrap_or_else(|e| e.into_inner());
        files.remove(path).is_some()
    }

    fn register_parents(&self, path: &Path) {
        let mut dirs = self.dirs.write().unwrap_or_else(|e| e.into_inner());
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl FileSystem for MemoryFs {
    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        let files = self.files.read().unwrap_or_else(|e| e.into_inner());
        files
            .get(path)
            .map(|f| f.content.clone())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        let files = self.files.read().unwrap_or_else(|e| e.into_inner());
        files
            .get(path)
            .map(|f| f.modified)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn is_file(&self, path: &Path) -> bool {
        let files = self.files.read().unwrap_or_else(|e| e.into_inner());
        files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let dirs = self.dirs.read().unwrap_or_else(|e| e.into_inner());
        dirs.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        if self.is_file(path) {
            return Err(FsError::Other(format!("{} is a file", path.display())));
        }
        self.register_parents(path);
        let mut dirs = self.dirs.write().unwrap_or_else(|e| e.into_inner());
        dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn walk_files<'a>(&'a self, root: &Path, prune: DirFilter) -> FileWalk<'a> {
        if !self.is_dir(root) {
            return Box::new(std::iter::once(Err(FsError::NotFound(root.to_path_buf()))));
        }

        let files = self.files.read().unwrap_or_else(|e| e.into_inner());
        let matched: Vec<PathBuf> = files
            .keys()
            .filter(|path| {
                let Ok(relative) = path.strip_prefix(root) else {
                    return false;
                };
                let mut dir = root.to_path_buf();
                let components: Vec<_> = relative.components().collect();
                for component in components.iter().take(components.len().saturating_sub(1)) {
                    dir.push(component);
                    if prune(&dir) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        Box::new(matched.into_iter().map(Ok))
    }
}
