use std::path::PathBuf;

use agentic_repo::config::ColorMode;
use clap::{Parser, Subcommand};

/// agentic-repo - initialize repositories with the Agent-Native Repository Standard
#[derive(Parser, Debug)]
#[command(name = "agentic-repo")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Generates structured context files (AGENTS.md, .agent/, tool stubs) that help AI agents understand a codebase."
)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output: auto, always, never
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a repository with agent context files
    ///
    /// Detects the project type (Go, Python, Node/TS, Java), decides whether
    /// the tree is a monorepo, and generates context files (AGENTS.md,
    /// .agent/, .cursorrules, .claude/).
    Init {
        /// Directory to initialize
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Preview changes without writing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show detailed output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the version number
    Version,
}
