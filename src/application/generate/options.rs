//! Generate options

/// Options for context generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Overwrite files that already exist
    pub force: bool,
    /// Report what would happen without touching the disk
    pub dry_run: bool,
    /// Also report skipped files and already-present legacy files
    pub verbose: bool,
}

impl GenerateOptions {
    /// Create new generate options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set force
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set verbose
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
