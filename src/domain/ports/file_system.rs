//! FileSystem port - abstraction over file I/O operations
//!
//! Detection, scanning and generation all go through this trait so they can
//! run against an in-memory implementation in tests.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File or directory not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Path exists but is not a directory
    NotADirectory(PathBuf),
    /// I/O error
    Io { path: PathBuf, source: std::io::Error },
}

impl FsError {
    /// Attach a path to an I/O error, classifying common kinds.
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

    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(p) | FsError::PermissionDenied(p) | FsError::NotADirectory(p) => p,
            FsError::Io { path, .. } => path,
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::NotADirectory(path) => write!(f, "not a directory: {}", path.display()),
            FsError::Io { path, source } => write!(f, "I/O error at {}: {}", path.display(), source),
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

/// A child entry of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFileSystem` (tests) - in-memory tree
pub trait FileSystem {
    /// Whether a file or directory exists at `path`. Errors count as absent.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// List the immediate children of a directory, sorted by name
    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>>;

    /// Read raw file content
    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write raw content to a file, creating parent directories
    fn write_bytes(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Write text content to a file, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.write_bytes(path, content.as_bytes())
    }

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;
}
