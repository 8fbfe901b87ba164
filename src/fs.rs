//! File system access
//!
//! Re-exports the local implementation of the `FileSystem` port and, for
//! tests, an in-memory tree that can also simulate unreadable directories.

pub use crate::domain::ports::file_system::{DirEntry, FileSystem, FsError, FsResult};
pub use crate::infrastructure::fs::LocalFs;

#[cfg(test)]
pub use mock::MockFileSystem;
