//! Stack value object - the technology stack a project directory belongs to

use serde::{Deserialize, Serialize};

/// Technology stack detected for a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackKind {
    Go,
    Python,
    Node,
    Java,
    Unknown,
}

impl StackKind {
    /// Known stacks in detection priority order (`Unknown` excluded)
    pub const PRIORITY: [StackKind; 4] = [
        StackKind::Go,
        StackKind::Python,
        StackKind::Node,
        StackKind::Java,
    ];

    /// All stacks, including `Unknown`
    pub const ALL: [StackKind; 5] = [
        StackKind::Go,
        StackKind::Python,
        StackKind::Node,
        StackKind::Java,
        StackKind::Unknown,
    ];

    /// Marker file or directory names identifying this stack.
    ///
    /// Names are matched exactly against direct children of a directory.
    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            StackKind::Go => &["go.mod", "go.sum"],
            StackKind::Python => &[
                "pyproject.toml",
                "requirements.txt",
                "setup.py",
                "setup.cfg",
                "uv.lock",
                "poetry.lock",
                "Pipfile",
            ],
            StackKind::Node => &[
                "package.json",
                "pnpm-lock.yaml",
                "package-lock.json",
                "yarn.lock",
                "tsconfig.json",
            ],
            StackKind::Java => &[
                "pom.xml",
                "build.gradle",
                "build.gradle.kts",
                "settings.gradle",
                "settings.gradle.kts",
                ".mvn",
            ],
            StackKind::Unknown => &[],
        }
    }

    /// Lowercase identifier, also used as the template directory name
    pub fn as_str(&self) -> &'static str {
        match self {
            StackKind::Go => "go",
            StackKind::Python => "python",
            StackKind::Node => "node",
            StackKind::Java => "java",
            StackKind::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, StackKind::Unknown)
    }
}

impl std::fmt::Display for StackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
