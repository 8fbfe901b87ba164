use crossterm::style::Stylize;

use agentic_repo::application::GenerateResult;

use crate::ui::primitives::icon::Icon;
use crate::ui::theme;

/// Closing line of `init`
pub fn render_init_complete(
    result: &GenerateResult,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let message = if dry_run {
        format!(
            "Dry run complete (no files written, {} would be created)",
            pluralize(result.would_create.len())
        )
    } else if result.created.is_empty() && result.migrated.is_empty() {
        format!(
            "Nothing to do ({} already exist, use --force to overwrite)",
            pluralize(result.skipped.len())
        )
    } else {
        format!(
            "Repository initialized with Agent-Native Standard ({} created)",
            pluralize(result.created.len())
        )
    };

    let message = if supports_color {
        format!("{}", message.with(theme::colors::SUCCESS).bold())
    } else {
        message
    };
    format!(
        "\n{} {}",
        Icon::Success.colored(supports_color, supports_unicode),
        message
    )
}

fn pluralize(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", count)
    }
}
