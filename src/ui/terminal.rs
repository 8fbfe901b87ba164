//! What the terminal on stdout can display

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Stdout is a terminal, `TERM` is not `dumb` and `NO_COLOR` is unset
    pub supports_color: bool,
    /// No locale is set, or the first one set is UTF-8
    pub supports_unicode: bool,
    /// `CI` is set; auto colour stays off there
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    TerminalCapabilities::from_env(std::io::stdout().is_terminal(), |key| {
        std::env::var(key).ok()
    })
}

impl TerminalCapabilities {
    fn from_env(stdout_tty: bool, var: impl Fn(&str) -> Option<String>) -> Self {
        let dumb = var("TERM").is_some_and(|term| term == "dumb");
        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .into_iter()
            .find_map(|key| var(key).filter(|value| !value.is_empty()));
        let utf8_locale = locale.map_or(true, |value| {
            let value = value.to_ascii_lowercase();
            value.contains("utf-8") || value.contains("utf8")
        });

        Self {
            supports_color: stdout_tty && !dumb && var("NO_COLOR").is_none(),
            supports_unicode: !dumb && utf8_locale,
            is_ci: var("CI").is_some(),
        }
    }
}
