//! agentic-repo CLI - initialize repositories with the Agent-Native Repository Standard
//!
//! Usage: agentic-repo <COMMAND>
//!
//! Commands:
//!   init     Detect project stacks and generate agent context files
//!   version  Print the version number

mod cli;
mod commands;
mod ui;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Commands};
use commands::init::{cmd_init, InitFlags};
use commands::version::cmd_version;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;
    let color = cli.color;

    let result = match cli.command {
        Commands::Init {
            path,
            force,
            dry_run,
            verbose,
        } => cmd_init(
            &path,
            InitFlags {
                force,
                dry_run,
                verbose,
                json,
                color,
            },
        ),
        Commands::Version => cmd_version(json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json {
                let _ = ui::json::emit(serde_json::json!({
                    "event": "error",
                    "message": err.to_string(),
                }));
            }
            let caps = ui::terminal::detect_capabilities();
            let supports_color = match color {
                Some(agentic_repo::config::ColorMode::Always) => true,
                Some(agentic_repo::config::ColorMode::Never) => false,
                _ => caps.supports_color,
            };
            eprint!(
                "{}",
                ui::error::format_error(&err, supports_color, caps.supports_unicode)
            );
            ExitCode::FAILURE
        }
    }
}
