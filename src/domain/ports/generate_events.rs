//! Generate Event Port
//!
//! Observable interface for context generation, so the use case never
//! prints directly. Console and NDJSON sinks live in the presentation layer.

use std::path::PathBuf;

/// Event emitted while generating context files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateEvent {
    /// Existing primary context file moved to the legacy location
    Migrated { from: PathBuf, to: PathBuf },

    /// Dry run: the primary context file would be migrated
    WouldMigrate { from: PathBuf, to: PathBuf },

    /// Legacy file already present; migration left untouched
    LegacyPresent { path: PathBuf },

    /// File was rendered and written
    Created { path: PathBuf },

    /// Dry run: file would be written
    WouldCreate { path: PathBuf },

    /// File exists and `force` was not given
    Skipped { path: PathBuf },
}

impl GenerateEvent {
    /// Events that only matter in verbose output
    pub fn is_detail(&self) -> bool {
        matches!(
            self,
            GenerateEvent::LegacyPresent { .. } | GenerateEvent::Skipped { .. }
        )
    }
}

/// Trait for receiving generate events
pub trait GenerateEventSink {
    fn on_event(&self, event: GenerateEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}
}
