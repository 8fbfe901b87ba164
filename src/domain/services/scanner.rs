//! Tree scanning and detection deduplication
//!
//! The walk is bounded to depth 2 below the scan root: the root itself, its
//! immediate child directories, and their immediate child directories.
//! Build output and dependency trees are skipped by name at every level.

use std::path::Path;

use tracing::debug;

use super::detector::StackDetector;
use crate::domain::entities::{Detection, DetectionSet};
use crate::domain::ports::{FileSystem, FsError};
use crate::error::ScanError;

/// Directory names never descended into or detected
pub const IGNORED_DIRS: [&str; 12] = [
    ".git",
    ".agent",
    ".claude",
    "node_modules",
    "vendor",
    "venv",
    ".venv",
    "__pycache__",
    "target",
    "bin",
    "dist",
    "build",
];

/// Walks a directory tree and collects stack detections
pub struct TreeScanner<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    detector: StackDetector<'a, FS>,
    extra_ignore: Vec<String>,
}

impl<'a, FS: FileSystem + ?Sized> TreeScanner<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self {
            fs,
            detector: StackDetector::new(fs),
            extra_ignore: Vec::new(),
        }
    }

    /// Skip these directory names in addition to [`IGNORED_DIRS`]
    pub fn with_extra_ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_ignore.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        IGNORED_DIRS.contains(&name) || self.extra_ignore.iter().any(|n| n == name)
    }

    /// Scan `root` and return deduplicated detections.
    ///
    /// Only a failure to list `root` itself is an error; unreadable
    /// subdirectories are skipped.
    pub fn scan(&self, root: &Path) -> Result<DetectionSet, ScanError> {
        let children = self
            .fs
            .list_dir(root)
            .map_err(|err| ScanError::from_fs(root, err))?;

        let mut found = Vec::new();
        self.detect_into(root, &mut found);

        for child in children {
            if !child.is_dir || self.is_ignored(&child.name) {
                continue;
            }
            self.detect_into(&child.path, &mut found);

            let grandchildren = match self.fs.list_dir(&child.path) {
                Ok(entries) => entries,
                Err(err) => {
                    debug!(path = %child.path.display(), error = %err, "skipping unreadable directory");
                    continue;
                }
            };

            for grandchild in grandchildren {
                if !grandchild.is_dir || self.is_ignored(&grandchild.name) {
                    continue;
                }
                self.detect_into(&grandchild.path, &mut found);
            }
        }

        let deduped = deduplicate(found, root);
        debug!(root = %root.display(), count = deduped.len(), "scan complete");
        Ok(deduped)
    }

    fn detect_into(&self, path: &Path, found: &mut Vec<Detection>) {
        let stack = self.detector.detect(path);
        if !stack.is_unknown() {
            debug!(path = %path.display(), %stack, "detected project");
            found.push(Detection::new(path, stack));
        }
    }
}

/// Resolve overlap between a root detection and its subdirectories.
///
/// - 0 or 1 detections, or none at `root`: unchanged.
/// - Every other detection has root's stack: root only.
/// - Otherwise: root is dropped if any other detection shares its stack and
///   kept if none does; all non-root detections are kept.
pub fn deduplicate(detections: Vec<Detection>, root: &Path) -> DetectionSet {
    if detections.len() <= 1 {
        return detections.into();
    }

    let Some(root_stack) = detections
        .iter()
        .find(|d| d.path() == root)
        .map(Detection::stack)
    else {
        return detections.into();
    };

    let all_same_as_root = detections
        .iter()
        .filter(|d| d.path() != root)
        .all(|d| d.stack() == root_stack);

    if all_same_as_root {
        return detections
            .into_iter()
            .filter(|d| d.path() == root)
            .take(1)
            .collect();
    }

    let root_redundant = detections
        .iter()
        .any(|d| d.path() != root && d.stack() == root_stack);

    detections
        .into_iter()
        .filter(|d| !(root_redundant && d.path() == root))
        .collect()
}

impl ScanError {
    fn from_fs(root: &Path, err: FsError) -> Self {
        match err {
            FsError::NotFound(_) => ScanError::NotFound {
                path: root.to_path_buf(),
            },
            FsError::NotADirectory(_) => ScanError::NotADirectory {
                path: root.to_path_buf(),
            },
            other => ScanError::Unreadable {
                path: root.to_path_buf(),
                source: other,
            },
        }
    }
}
