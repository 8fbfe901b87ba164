//! Generate result types

use std::path::PathBuf;

/// Summary of a generate run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResult {
    /// Files written
    pub created: Vec<PathBuf>,
    /// Files that would be written (dry run)
    pub would_create: Vec<PathBuf>,
    /// Existing files left alone
    pub skipped: Vec<PathBuf>,
    /// Primary context files moved to the legacy location
    pub migrated: Vec<PathBuf>,
    /// Primary context files that would be moved (dry run)
    pub would_migrate: Vec<PathBuf>,
}

impl GenerateResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_created(&mut self, path: PathBuf) {
        self.created.push(path);
    }

    pub fn add_would_create(&mut self, path: PathBuf) {
        self.would_create.push(path);
    }

    pub fn add_skipped(&mut self, path: PathBuf) {
        self.skipped.push(path);
    }

    pub fn add_migrated(&mut self, path: PathBuf) {
        self.migrated.push(path);
    }

    pub fn add_would_migrate(&mut self, path: PathBuf) {
        self.would_migrate.push(path);
    }

    /// Files written or planned, not counting skips
    pub fn file_count(&self) -> usize {
        self.created.len() + self.would_create.len()
    }

    /// Whether nothing would change on disk
    pub fn is_noop(&self) -> bool {
        self.file_count() == 0 && self.migrated.is_empty() && self.would_migrate.is_empty()
    }
}
