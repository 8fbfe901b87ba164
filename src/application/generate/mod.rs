//! Generate Use Case
//!
//! Writes agent context files for a set of detections.
//!
//! This module handles:
//! - Migrating a pre-existing `AGENTS.md` to `.agent/AGENTS_LEGACY.md`
//! - Choosing the file plan (single project, monorepo root, subproject)
//! - Template lookup with generic fallback, rendering and writing

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::GenerateResult;
pub use use_case::ContextGenerator;
