//! FileSystem port - abstraction over the filesystem primitives the build needs
//!
//! The domain services only ever walk a tree, read text, look at modification
//! times and create directories. Everything goes through this trait so the
//! staleness logic can run against an in-memory tree in tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// Predicate deciding whether a directory subtree is pruned from a walk
pub type DirFilter = Arc<dyn Fn(&Path) -> bool + Send + Sync>;

/// Lazy, single-pass sequence of regular files
pub type FileWalk<'a> = Box<dyn Iterator<Item = FsResult<PathBuf>> + 'a>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error on a specific path
    Io { path: PathBuf, source: std::io::Error },
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach the offending path to an I/O error
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O, tree walking via `ignore`
/// - `MemoryFs` - in-memory tree with explicit timestamps for tests
pub trait FileSystem: Send + Sync {
    /// Read file content as string
    fn read_to_string(&self, path: &Path) -> FsResult<String>;

    /// Last modification time of a file
    fn modified(&self, path: &Path) -> FsResult<SystemTime>;

    /// Check if a regular file exists at `path`
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a directory exists at `path`
    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and parents; an existing directory is not an error
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Walk `root` depth-first yielding regular files, skipping every
    /// directory for which `prune` returns true (the root is never pruned)
    fn walk_files<'a>(&'a self, root: &Path, prune: DirFilter) -> FileWalk<'a>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        (**self).read_to_string(path)
    }

    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        (**self).modified(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }

    fn walk_files<'a>(&'a self, root: &Path, prune: DirFilter) -> FileWalk<'a> {
        (**self).walk_files(root, prune)
    }
}
