//! Diagnostic logging setup
//!
//! Uses the `tracing` ecosystem with output on stderr, so it never mixes
//! with the progress lines or NDJSON written to stdout.
//!
//! Level resolution:
//! - `RUST_LOG`, when set, is used as-is
//! - otherwise `AGENTIC_REPO_LOG` (trace, debug, info, warn, error)
//! - otherwise `debug` with `--verbose`, `warn` without

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting the crate's log level
pub const LOG_LEVEL_ENV: &str = "AGENTIC_REPO_LOG";

static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum level for this crate's events
    pub level: Level,

    /// Include the module target (e.g. agentic_repo::domain::services::scanner)
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            include_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Level from `--verbose`, overridden by [`LOG_LEVEL_ENV`]
    pub fn from_cli(verbose: bool) -> Self {
        Self::resolve(verbose, std::env::var(LOG_LEVEL_ENV).ok().as_deref())
    }

    fn resolve(verbose: bool, env_level: Option<&str>) -> Self {
        let level = match env_level.and_then(parse_level) {
            Some(level) => level,
            None if verbose => Level::DEBUG,
            None => Level::WARN,
        };
        Self {
            level,
            include_target: level >= Level::DEBUG,
        }
    }
}

/// Parse a level name, case-insensitively
pub fn parse_level(level_str: &str) -> Option<Level> {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        return EnvFilter::from_default_env();
    }
    EnvFilter::new(format!(
        "warn,agentic_repo={}",
        config.level.as_str().to_lowercase()
    ))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(&config);
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.include_target)
            .without_time();

        // A subscriber may already be installed (e.g. by a test harness).
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Some(Level::TRACE));
        assert_eq!(parse_level("Debug"), Some(Level::DEBUG));
        assert_eq!(parse_level("INFO"), Some(Level::INFO));
        assert_eq!(parse_level("warning"), Some(Level::WARN));
        assert_eq!(parse_level("error"), Some(Level::ERROR));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_default_is_warn() {
        assert_eq!(LoggingConfig::default().level, Level::WARN);
        assert_eq!(LoggingConfig::resolve(false, None).level, Level::WARN);
    }

    #[test]
    fn test_verbose_is_debug() {
        let config = LoggingConfig::resolve(true, None);
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.include_target);
    }

    #[test]
    fn test_env_level_wins_over_verbose() {
        assert_eq!(
            LoggingConfig::resolve(true, Some("error")).level,
            Level::ERROR
        );
        assert_eq!(
            LoggingConfig::resolve(false, Some("trace")).level,
            Level::TRACE
        );
    }

    #[test]
    fn test_invalid_env_level_falls_back() {
        assert_eq!(
            LoggingConfig::resolve(true, Some("chatty")).level,
            Level::DEBUG
        );
    }

    #[test]
    fn test_init_logging_twice_is_noop() {
        init_logging(LoggingConfig::with_level(Level::ERROR));
        init_logging(LoggingConfig::with_level(Level::TRACE));
    }
}
