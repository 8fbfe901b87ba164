//! Shared helpers for CLI integration tests.
//!
//! Every run gets its own project directory and an empty user config
//! directory so a developer's own config never leaks into a test.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Output of one CLI invocation
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// stdout parsed as newline-delimited JSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", l, e))
            })
            .collect()
    }
}

/// Isolated project and config directories for one test
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_dir: TempDir::new().expect("Failed to create config dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn write_user_config(&self, content: &str) {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write user config");
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Every project file with its content, sorted by relative path
    pub fn snapshot(&self) -> Vec<(String, Vec<u8>)> {
        list_all_files(self.root())
            .into_iter()
            .map(|rel| {
                let bytes = std::fs::read(self.project_path(&rel))
                    .unwrap_or_else(|e| panic!("Failed to read {}: {}", rel, e));
                (rel, bytes)
            })
            .collect()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.project_path(relative).exists()
    }

    /// Run the CLI with the project root as working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("AGENTIC_REPO_CONFIG_DIR", self.config_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("AGENTIC_REPO_FORCE")
            .env_remove("AGENTIC_REPO_VERBOSE")
            .env_remove("AGENTIC_REPO_COLOR")
            .env_remove("AGENTIC_REPO_LOG")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("Failed to execute agentic-repo"))
    }
}

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_agentic-repo")
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// All files below `dir`, relative and sorted, for failure messages
pub fn list_all_files(dir: &Path) -> Vec<String> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    walk(base, &path, out);
                } else if let Ok(rel) = path.strip_prefix(base) {
                    out.push(rel.display().to_string());
                }
            }
        }
    }
    let mut files = Vec::new();
    walk(dir, dir, &mut files);
    files.sort();
    files
}

/// Assert that a file exists relative to the project root.
#[macro_export]
macro_rules! assert_generated {
    ($env:expr, $path:expr) => {
        assert!(
            $env.exists($path),
            "Expected file at '{}', but it doesn't exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files($env.root()).join("\n  ")
        );
    };
}

/// Assert that a file does not exist relative to the project root.
#[macro_export]
macro_rules! assert_not_generated {
    ($env:expr, $path:expr) => {
        assert!(
            !$env.exists($path),
            "Expected '{}' to NOT exist, but it does.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files($env.root()).join("\n  ")
        );
    };
}
