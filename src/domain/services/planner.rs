//! File planning service
//!
//! Pure domain logic deciding which files get generated where, and from
//! which template. No I/O happens here.

use crate::domain::value_objects::StackKind;

/// Primary context file, relative to a project directory
pub const PRIMARY_CONTEXT_FILE: &str = "AGENTS.md";

/// Where a pre-existing primary context file is preserved
pub const LEGACY_CONTEXT_FILE: &str = ".agent/AGENTS_LEGACY.md";

/// First line of every generated primary context file.
///
/// A primary file carrying it came from an earlier run and is not migrated.
pub const GENERATED_MARKER: &str = "<!-- generated by agentic-repo -->";

/// Whether `content` is a primary context file written by this tool
pub fn is_generated_context(content: &[u8]) -> bool {
    let marker = GENERATED_MARKER.as_bytes();
    content.windows(marker.len()).any(|w| w == marker)
}

/// Which layout a plan is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind {
    /// Single project at the scan root
    Single(StackKind),
    /// Root of a monorepo
    MonorepoRoot,
    /// One project inside a monorepo
    Subproject(StackKind),
}

/// Data a planned file is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// The plan's own data (project data, or monorepo data at the root)
    Context,
    /// Project data with an unknown stack
    UnknownStack,
}

/// A file to generate, relative to the plan's directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub output: &'static str,
    pub template: String,
    pub data: DataSource,
}

impl PlannedFile {
    fn new(output: &'static str, template: impl Into<String>) -> Self {
        Self {
            output,
            template: template.into(),
            data: DataSource::Context,
        }
    }

    fn with_unknown_stack(mut self) -> Self {
        self.data = DataSource::UnknownStack;
        self
    }
}

fn stack_template(stack: StackKind, name: &str) -> String {
    format!("{}/{}", stack.as_str(), name)
}

/// Files generated for the given layout, in write order
pub fn plan_files(kind: PlanKind) -> Vec<PlannedFile> {
    match kind {
        PlanKind::Single(stack) => vec![
            PlannedFile::new(PRIMARY_CONTEXT_FILE, "agents.md.tmpl"),
            PlannedFile::new(
                "CODE_REVIEW_RULES.md",
                stack_template(stack, "code-review-rules.md.tmpl"),
            ),
            PlannedFile::new("repo-best-practices.md", "repo-best-practices.md.tmpl"),
            PlannedFile::new("USAGE.md", "usage.md.tmpl"),
            PlannedFile::new("Makefile", stack_template(stack, "Makefile.tmpl")),
            PlannedFile::new(".gitignore", "gitignore.tmpl"),
            PlannedFile::new(".agentignore", "agentignore.tmpl"),
            PlannedFile::new(
                ".pre-commit-config.yaml",
                stack_template(stack, "pre-commit-config.yaml.tmpl"),
            ),
            PlannedFile::new(".agent/stack.md", stack_template(stack, "stack.md.tmpl")),
            PlannedFile::new(".agent/testing.md", stack_template(stack, "testing.md.tmpl")),
            PlannedFile::new(".agent/commands.md", stack_template(stack, "commands.md.tmpl")),
            PlannedFile::new(".agent/architecture.md", "architecture.md.tmpl"),
            PlannedFile::new(".cursorrules", "cursorrules.tmpl"),
            PlannedFile::new(".claude/settings.json", "claude-settings.json.tmpl"),
        ],
        PlanKind::MonorepoRoot => vec![
            PlannedFile::new(PRIMARY_CONTEXT_FILE, "agents-monorepo.md.tmpl"),
            PlannedFile::new("CODE_REVIEW_RULES.md", "code-review-rules.md.tmpl"),
            PlannedFile::new("repo-best-practices.md", "repo-best-practices.md.tmpl"),
            PlannedFile::new("USAGE.md", "usage-monorepo.md.tmpl"),
            PlannedFile::new("Makefile", "Makefile-monorepo.tmpl"),
            PlannedFile::new(".gitignore", "gitignore.tmpl").with_unknown_stack(),
            PlannedFile::new(".agentignore", "agentignore.tmpl").with_unknown_stack(),
            PlannedFile::new(".agent/overview.md", "overview.md.tmpl"),
            PlannedFile::new(".agent/architecture.md", "architecture.md.tmpl"),
            PlannedFile::new(".cursorrules", "cursorrules-monorepo.tmpl"),
            PlannedFile::new(".claude/settings.json", "claude-settings-monorepo.json.tmpl"),
        ],
        PlanKind::Subproject(stack) => vec![
            PlannedFile::new(PRIMARY_CONTEXT_FILE, "agents.md.tmpl"),
            PlannedFile::new(
                "CODE_REVIEW_RULES.md",
                stack_template(stack, "code-review-rules.md.tmpl"),
            ),
            PlannedFile::new("repo-best-practices.md", "repo-best-practices.md.tmpl"),
            PlannedFile::new("USAGE.md", "usage.md.tmpl"),
            PlannedFile::new(
                ".pre-commit-config.yaml",
                stack_template(stack, "pre-commit-config.yaml.tmpl"),
            ),
            PlannedFile::new(".agent/stack.md", stack_template(stack, "stack.md.tmpl")),
            PlannedFile::new(".agent/testing.md", stack_template(stack, "testing.md.tmpl")),
            PlannedFile::new(".agent/commands.md", stack_template(stack, "commands.md.tmpl")),
        ],
    }
}

/// Stack-stripped fallback for a stack-qualified template name.
///
/// `"go/stack.md.tmpl"` falls back to `"stack.md.tmpl"`; unqualified names
/// have no fallback.
pub fn generic_template_name(name: &str) -> Option<&str> {
    name.rsplit_once('/').map(|(_, base)| base)
}
