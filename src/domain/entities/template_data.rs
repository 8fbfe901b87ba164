//! Data handed to the template renderer
//!
//! Two shapes exist: per-project data, and the monorepo root summary. Field
//! names are the complete schema; templates referencing anything else fail
//! to render.

use std::path::Path;

use serde::Serialize;

use super::detection::DetectionSet;
use crate::domain::value_objects::StackKind;

/// Data for single-project and per-subproject templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectData {
    pub stack: StackKind,
    pub is_monorepo: bool,
    /// Path of the project relative to the scan root (empty for the root)
    pub rel_path: String,
    pub has_legacy: bool,
}

impl ProjectData {
    pub fn single(stack: StackKind, has_legacy: bool) -> Self {
        Self {
            stack,
            is_monorepo: false,
            rel_path: String::new(),
            has_legacy,
        }
    }

    pub fn subproject(stack: StackKind, rel_path: String, has_legacy: bool) -> Self {
        Self {
            stack,
            is_monorepo: true,
            rel_path,
            has_legacy,
        }
    }
}

/// One entry of the monorepo project list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub path: String,
    pub rel_path: String,
    pub stack: StackKind,
}

/// Data for monorepo root templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonorepoData {
    pub projects: Vec<ProjectSummary>,
    pub root: String,
    pub has_legacy: bool,
}

impl MonorepoData {
    pub fn new(root: &Path, detections: &DetectionSet, has_legacy: bool) -> Self {
        let projects = detections
            .iter()
            .map(|d| ProjectSummary {
                path: d.path().display().to_string(),
                rel_path: d.relative_to(root),
                stack: d.stack(),
            })
            .collect();
        Self {
            projects,
            root: root.display().to_string(),
            has_legacy,
        }
    }
}

/// Either data shape, serialized flat (untagged)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TemplateData {
    Project(ProjectData),
    Monorepo(MonorepoData),
}

impl From<ProjectData> for TemplateData {
    fn from(data: ProjectData) -> Self {
        TemplateData::Project(data)
    }
}

impl From<MonorepoData> for TemplateData {
    fn from(data: MonorepoData) -> Self {
        TemplateData::Monorepo(data)
    }
}
