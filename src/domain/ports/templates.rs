//! Template ports - lookup of template sources and rendering
//!
//! The store is a read-only name -> source map; the renderer turns a source
//! plus [`TemplateData`] into output text.

use thiserror::Error;

use crate::domain::entities::TemplateData;

/// Errors from template lookup and rendering
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// No template registered under this name
    #[error("template not found: {name}")]
    NotFound { name: String },

    /// Template source failed to parse
    #[error("failed to parse template {name}: {message}")]
    Parse { name: String, message: String },

    /// Template failed to render (e.g. references an unknown field)
    #[error("failed to render template {name}: {message}")]
    Render { name: String, message: String },
}

impl TemplateError {
    pub fn not_found(name: impl Into<String>) -> Self {
        TemplateError::NotFound { name: name.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TemplateError::NotFound { .. })
    }
}

/// Read-only template source lookup
pub trait TemplateStore {
    /// Source text for `name`, or [`TemplateError::NotFound`]
    fn lookup(&self, name: &str) -> Result<String, TemplateError>;
}

/// Template rendering engine
pub trait TemplateRenderer {
    /// Render `source` (registered as `name` for error messages) with `data`
    fn render(&self, name: &str, source: &str, data: &TemplateData)
        -> Result<String, TemplateError>;
}
