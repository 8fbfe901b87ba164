//! Configuration for agentic-repo
//!
//! Resolution order:
//! 1. CLI flags (highest priority, can only switch options on)
//! 2. Environment variables (AGENTIC_REPO_*)
//! 3. Project config (`<DIR>/.agentic-repo.toml`)
//! 4. User config (`<config dir>/agentic-repo/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    load, load_from, load_with_warnings, user_config_dir, with_env_overrides_from, LoadedConfig,
    CONFIG_DIR_ENV, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, ConfigWarning, InitConfig, OutputConfig, ScanConfig};
