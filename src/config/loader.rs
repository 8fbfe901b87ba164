//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::{ColorMode, Config, ConfigWarning};

/// Project config file name, looked up in the directory being initialised
pub const PROJECT_CONFIG_FILE: &str = ".agentic-repo.toml";

/// Environment variable overriding the user config directory
pub const CONFIG_DIR_ENV: &str = "AGENTIC_REPO_CONFIG_DIR";

/// A loaded configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the project config, else the user config, else defaults; then apply
/// environment overrides.
///
/// A config file that exists but cannot be read or parsed is an error.
pub fn load(project_root: &Path) -> Result<LoadedConfig, ConfigError> {
    load_from(project_root, user_config_dir(), |key| std::env::var(key).ok())
}

/// [`load`] with an explicit user config directory and environment lookup
pub fn load_from<F>(
    project_root: &Path,
    user_dir: Option<PathBuf>,
    get_env: F,
) -> Result<LoadedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let candidates = [
        Some(project_root.join(PROJECT_CONFIG_FILE)),
        user_dir.map(|dir| dir.join("config.toml")),
    ];

    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok(LoadedConfig {
                config: with_env_overrides_from(config, &get_env),
                source: Some(path),
                warnings,
            });
        }
    }

    Ok(LoadedConfig {
        config: with_env_overrides_from(Config::default(), &get_env),
        source: None,
        warnings: Vec::new(),
    })
}

/// Apply environment variable overrides (AGENTIC_REPO_* prefix)
pub fn with_env_overrides_from<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // AGENTIC_REPO_FORCE
    if let Some(val) = get_env("AGENTIC_REPO_FORCE") {
        config.init.force = is_truthy(&val);
    }

    // AGENTIC_REPO_VERBOSE
    if let Some(val) = get_env("AGENTIC_REPO_VERBOSE") {
        config.init.verbose = is_truthy(&val);
    }

    // AGENTIC_REPO_COLOR
    if let Some(mode) = get_env("AGENTIC_REPO_COLOR").and_then(|v| ColorMode::parse(&v)) {
        config.output.color = mode;
    }

    config
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// User config directory: `$AGENTIC_REPO_CONFIG_DIR`, else
/// `<platform config dir>/agentic-repo`
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("agentic-repo")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "init",
        "force",
        "verbose",
        "scan",
        "extra_ignore",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
