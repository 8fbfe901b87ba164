use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use agentic_repo::config::{ColorMode, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: bool, cli_color: Option<ColorMode>, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: bool,
        cli_color: Option<ColorMode>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color.unwrap_or(config.output.color) {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }
}
