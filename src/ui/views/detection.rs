use std::path::Path;

use crossterm::style::Stylize;

use agentic_repo::application::ScanOutcome;

use crate::ui::primitives::icon::Icon;
use crate::ui::theme;

pub fn render_scan_header(root: &Path, supports_color: bool, supports_unicode: bool) -> String {
    let text = format!("Scanning {}", root.display());
    let text = if supports_color {
        format!("{}", text.with(theme::colors::INFO).bold())
    } else {
        text
    };
    format!(
        "{} {}",
        Icon::Scan.colored(supports_color, supports_unicode),
        text
    )
}

pub fn render_no_stack_warning(supports_color: bool, supports_unicode: bool) -> String {
    let lines = [
        "No recognized project types found",
        "   Generating generic context files...",
    ];
    let body = if supports_color {
        lines
            .iter()
            .map(|l| format!("{}", l.with(theme::colors::WARNING)))
            .collect::<Vec<_>>()
    } else {
        lines.iter().map(|l| l.to_string()).collect()
    };
    format!(
        "{} {}\n{}",
        Icon::Warning.colored(supports_color, supports_unicode),
        body[0],
        body[1]
    )
}

/// Detection summary printed in verbose mode
pub fn render_detection_report(
    root: &Path,
    scan: &ScanOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let kind = if scan.is_monorepo {
        "Monorepo"
    } else {
        "Single project"
    };
    let mut out = format!(
        "{} Detected: {}\n",
        Icon::Package.colored(supports_color, supports_unicode),
        kind
    );

    let width = scan
        .detections
        .iter()
        .map(|d| d.relative_to(root).len())
        .max()
        .unwrap_or(0);
    for detection in &scan.detections {
        let stack = detection.stack().as_str();
        let stack = if supports_color {
            format!("{}", stack.with(theme::colors::INFO))
        } else {
            stack.to_string()
        };
        out.push_str(&format!(
            "   {} {:<width$}  {}\n",
            Icon::Bullet.colored(supports_color, supports_unicode),
            detection.relative_to(root),
            stack,
            width = width
        ));
    }
    out
}
