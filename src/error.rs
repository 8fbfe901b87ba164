//! Error types for agentic-repo
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, TemplateError};

/// Result type alias for agentic-repo operations
pub type AgenticResult<T> = Result<T, AgenticError>;

/// Failure to scan the root directory.
///
/// Listing failures below the root are never reported.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("directory does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot read directory {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: FsError,
    },
}

/// Fatal context generation errors, each naming what failed
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("failed to migrate legacy {}: {source}", path.display())]
    Migrate {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("failed to generate {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Main error type for agentic-repo operations
#[derive(Error, Debug)]
pub enum AgenticError {
    #[error("detection failed: {0}")]
    Scan(#[from] ScanError),

    #[error("generation failed: {0}")]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
