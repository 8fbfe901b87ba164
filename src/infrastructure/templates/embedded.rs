//! Embedded template store
//!
//! Template sources from the crate's `templates/` directory, compiled into
//! the binary.

use include_dir::{include_dir, Dir};

use crate::domain::ports::{TemplateError, TemplateStore};

static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Template store backed by the embedded `templates/` directory
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    /// All embedded template names, `/`-separated and sorted
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::new();
        collect_names(&TEMPLATES, &mut names);
        names.sort();
        names
    }
}

fn collect_names(dir: &Dir<'_>, names: &mut Vec<String>) {
    for file in dir.files() {
        names.push(file.path().to_string_lossy().replace('\\', "/"));
    }
    for sub in dir.dirs() {
        collect_names(sub, names);
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn lookup(&self, name: &str) -> Result<String, TemplateError> {
        if name.is_empty() || name.starts_with('/') || name.split('/').any(|seg| seg == "..") {
            return Err(TemplateError::not_found(name));
        }
        TEMPLATES
            .get_file(name)
            .and_then(|f| f.contents_utf8())
            .map(str::to_string)
            .ok_or_else(|| TemplateError::not_found(name))
    }
}
