//! Domain Services
//!
//! Stack detection, tree scanning with deduplication, and file planning.

pub mod detector;
pub mod planner;
pub mod scanner;

pub use detector::StackDetector;
pub use planner::{
    generic_template_name, is_generated_context, plan_files, DataSource, PlanKind, PlannedFile,
    GENERATED_MARKER, LEGACY_CONTEXT_FILE, PRIMARY_CONTEXT_FILE,
};
pub use scanner::{deduplicate, TreeScanner, IGNORED_DIRS};
