//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system implementation
//! - `templates/` - Embedded template store and Liquid renderer
//! - `events/` - Event sink implementations (NDJSON)

pub mod events;
pub mod fs;
pub mod templates;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use templates::{EmbeddedTemplates, LiquidRenderer};
