use crossterm::style::Stylize;

use crate::ui::primitives::icon::Icon;
use crate::ui::theme;

/// Render a fatal error and its cause chain for stderr
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let label = if supports_color {
        format!("{}", "Error:".with(theme::colors::ERROR).bold())
    } else {
        "Error:".to_string()
    };
    let mut out = format!(
        "{} {} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        label,
        err
    );

    // thiserror messages already embed their source; skip repeated causes.
    let mut shown = err.to_string();
    for cause in err.chain().skip(1) {
        let text = cause.to_string();
        if shown.contains(&text) {
            continue;
        }
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            text
        ));
        shown.push_str(&text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn plain_error_has_single_line() {
        let err = anyhow::anyhow!("directory does not exist: /nope");
        let out = format_error(&err, false, false);
        assert_eq!(out, "[FAIL] Error: directory does not exist: /nope\n");
    }

    #[test]
    fn context_chain_is_listed() {
        let err = Err::<(), _>(std::io::Error::other("disk full"))
            .context("failed to load config")
            .unwrap_err();
        let out = format_error(&err, false, true);
        assert!(out.starts_with("✗ Error: failed to load config"));
        assert!(out.contains("→ disk full"));
    }
}
