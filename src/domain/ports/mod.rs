//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod generate_events;
pub mod templates;

pub use file_system::{DirEntry, FileSystem, FsError, FsResult};
pub use generate_events::{GenerateEvent, GenerateEventSink, NoopEventSink};
pub use templates::{TemplateError, TemplateRenderer, TemplateStore};
