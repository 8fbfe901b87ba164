//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::ports::file_system::{DirEntry, FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes are atomic: content goes to a temp file in the target directory,
/// which is then renamed over the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let read_dir = match fs::read_dir(path) {
            Ok(rd) => rd,
            Err(_) if path.is_file() => return Err(FsError::NotADirectory(path.to_path_buf())),
            Err(err) => return Err(FsError::from_io(path, err)),
        };

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| FsError::from_io(path, e))?;
            // Symlinks are not followed, matching a plain directory listing.
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>> {
        fs::read(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        atomic_write(path, content).map_err(|e| FsError::from_io(path, e))
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }
}

/// Write `content` to `path` via temp file + rename.
///
/// An existing destination keeps its permissions; new files get the usual
/// `0644` on Unix rather than the temp file's `0600`.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;

    let permissions = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    };
    if let Some(permissions) = permissions {
        tmp.as_file().set_permissions(permissions)?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}
