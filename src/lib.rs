//! agentic-repo - initialize repositories with the Agent-Native Repository Standard
//!
//! Detects the technology stack of a directory tree (Go, Python, Node,
//! Java), decides whether it is a single project or a monorepo, and renders
//! a fixed set of agent context files (AGENTS.md, .agent/, tool stubs) from
//! embedded templates.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{
    ContextGenerator, GenerateOptions, GenerateResult, InitOptions, InitUseCase,
};
pub use config::Config;
pub use domain::entities::{is_monorepo, Detection, DetectionSet};
pub use domain::services::{deduplicate, StackDetector, TreeScanner};
pub use domain::value_objects::StackKind;
pub use error::{AgenticError, AgenticResult};
pub use fs::{FileSystem, LocalFs};
