//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `InitUseCase` - Scan a directory, then generate context files
//! - `ContextGenerator` - Migrate legacy context, render and write planned files

pub mod generate;
pub mod init;

pub use generate::{ContextGenerator, GenerateOptions, GenerateResult};
pub use init::{InitOptions, InitUseCase, ScanOutcome};
