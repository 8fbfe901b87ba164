//! Domain Entities

mod detection;
mod template_data;

pub use detection::{is_monorepo, Detection, DetectionSet};
pub use template_data::{MonorepoData, ProjectData, ProjectSummary, TemplateData};
