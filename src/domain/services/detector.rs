//! Stack detection for a single directory
//!
//! Checks each stack's marker names, in priority order, as direct children of
//! the directory. Only existence matters; file contents are never read.

use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::StackKind;

/// Classifies directories by the marker files they contain
pub struct StackDetector<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> StackDetector<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// First stack in priority order with a marker present at `path`.
    ///
    /// Returns [`StackKind::Unknown`] when nothing matches. Filesystem errors
    /// on individual checks count as "marker absent".
    pub fn detect(&self, path: &Path) -> StackKind {
        StackKind::PRIORITY
            .into_iter()
            .find(|stack| self.has_marker(path, *stack))
            .unwrap_or(StackKind::Unknown)
    }

    fn has_marker(&self, path: &Path, stack: StackKind) -> bool {
        stack
            .markers()
            .iter()
            .any(|marker| self.fs.exists(&path.join(marker)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    fn detect(fs: &MockFileSystem) -> StackKind {
        StackDetector::new(fs).detect(Path::new("/p"))
    }

    #[test]
    fn every_single_marker_identifies_its_stack() {
        for stack in StackKind::PRIORITY {
            for marker in stack.markers() {
                let fs = MockFileSystem::new().with_file(Path::new("/p").join(marker), "");
                assert_eq!(detect(&fs), stack, "marker {marker}");
            }
        }
    }

    #[test]
    fn mvn_directory_identifies_java() {
        let fs = MockFileSystem::new().with_dir("/p/.mvn");
        assert_eq!(detect(&fs), StackKind::Java);
    }

    #[test]
    fn go_beats_python() {
        let fs = MockFileSystem::new()
            .with_file("/p/requirements.txt", "")
            .with_file("/p/go.mod", "");
        assert_eq!(detect(&fs), StackKind::Go);
    }

    #[test]
    fn python_beats_node() {
        let fs = MockFileSystem::new()
            .with_file("/p/package.json", "{}")
            .with_file("/p/pyproject.toml", "");
        assert_eq!(detect(&fs), StackKind::Python);
    }

    #[test]
    fn node_beats_java() {
        let fs = MockFileSystem::new()
            .with_file("/p/pom.xml", "")
            .with_file("/p/tsconfig.json", "");
        assert_eq!(detect(&fs), StackKind::Node);
    }

    #[test]
    fn no_markers_is_unknown() {
        let fs = MockFileSystem::new()
            .with_file("/p/README.md", "")
            .with_file("/p/Cargo.toml", "");
        assert_eq!(detect(&fs), StackKind::Unknown);
    }

    #[test]
    fn markers_are_case_sensitive() {
        let fs = MockFileSystem::new().with_file("/p/GO.MOD", "");
        assert_eq!(detect(&fs), StackKind::Unknown);
    }

    #[test]
    fn nested_markers_are_ignored() {
        let fs = MockFileSystem::new().with_file("/p/sub/go.mod", "");
        assert_eq!(detect(&fs), StackKind::Unknown);
    }

    #[test]
    fn missing_directory_is_unknown() {
        let fs = MockFileSystem::new();
        assert_eq!(detect(&fs), StackKind::Unknown);
    }
}
