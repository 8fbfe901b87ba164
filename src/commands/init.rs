//! Init command - detect project stacks and generate agent context files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use agentic_repo::application::{GenerateOptions, InitOptions, InitUseCase};
use agentic_repo::config::{self, ColorMode};
use agentic_repo::domain::ports::GenerateEventSink;
use agentic_repo::infrastructure::{EmbeddedTemplates, JsonEventSink, LiquidRenderer};
use agentic_repo::logging::{init_logging, LoggingConfig};
use agentic_repo::LocalFs;

use crate::ui::context::UiContext;
use crate::ui::sink::ConsoleEventSink;
use crate::ui::views::config::render_config_warning;
use crate::ui::views::detection::{
    render_detection_report, render_no_stack_warning, render_scan_header,
};
use crate::ui::views::init::render_init_complete;

/// Flags given on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct InitFlags {
    pub force: bool,
    pub dry_run: bool,
    pub verbose: bool,
    pub json: bool,
    pub color: Option<ColorMode>,
}

pub fn cmd_init(path: &Path, flags: InitFlags) -> Result<()> {
    let root = absolute(path)?;

    let loaded = config::load(&root)?;
    let cfg = loaded.config;
    // Flags can switch an option on, never off.
    let force = flags.force || cfg.init.force;
    let verbose = flags.verbose || cfg.init.verbose;

    init_logging(LoggingConfig::from_cli(verbose));
    let ui = UiContext::new(flags.json, verbose, flags.color, &cfg);

    for warning in &loaded.warnings {
        eprintln!("{}", render_config_warning(warning, ui.color, ui.unicode));
    }

    let options = InitOptions::new()
        .with_generate(
            GenerateOptions::new()
                .with_force(force)
                .with_dry_run(flags.dry_run)
                .with_verbose(verbose),
        )
        .with_extra_ignore(cfg.scan.extra_ignore.clone());

    let fs = LocalFs::new();
    let renderer = LiquidRenderer::new().context("failed to initialise template engine")?;
    let use_case = InitUseCase::new(&fs, EmbeddedTemplates::new(), renderer, options);

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "init",
            "root": root.display().to_string(),
            "dry_run": flags.dry_run,
            "force": force,
        }))?;
    } else {
        println!("{}", render_scan_header(&root, ui.color, ui.unicode));
    }

    let scan = use_case.scan(&root)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "detected",
            "command": "init",
            "monorepo": scan.is_monorepo,
            "assumed_unknown": scan.assumed_unknown,
            "projects": scan
                .detections
                .iter()
                .map(|d| serde_json::json!({
                    "path": d.relative_to(&root),
                    "stack": d.stack(),
                }))
                .collect::<Vec<_>>(),
        }))?;
    } else {
        if scan.assumed_unknown {
            println!("{}", render_no_stack_warning(ui.color, ui.unicode));
        }
        if ui.verbose {
            println!();
            println!(
                "{}",
                render_detection_report(&root, &scan, ui.color, ui.unicode)
            );
        }
    }

    let sink: Box<dyn GenerateEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(&root, ui.color, ui.unicode))
    };
    let result = use_case.generate(&root, &scan, sink.as_ref())?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "dry_run": flags.dry_run,
            "created": result.created.len(),
            "would_create": result.would_create.len(),
            "skipped": result.skipped.len(),
            "migrated": result.migrated.len() + result.would_migrate.len(),
        }))?;
    } else {
        println!(
            "{}",
            render_init_complete(&result, flags.dry_run, ui.color, ui.unicode)
        );
    }

    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve path")?;
    let joined = cwd.join(path);
    // Normalise "." and trailing separators so paths print cleanly.
    Ok(joined
        .components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect())
}
