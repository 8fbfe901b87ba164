//! Tests for the config module

use super::*;
use crate::error::ConfigError;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(!config.init.force);
    assert!(!config.init.verbose);
    assert!(config.scan.extra_ignore.is_empty());
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[init]
force = true
verbose = true

[scan]
extra_ignore = ["tmp", "third_party"]

[output]
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert!(config.init.force);
    assert!(config.init.verbose);
    assert_eq!(config.scan.extra_ignore, vec!["tmp", "third_party"]);
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_config_partial_toml_uses_defaults() {
    let config: Config = toml::from_str("[scan]\nextra_ignore = [\"out\"]\n").unwrap();

    assert!(!config.init.force);
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".agentic-repo.toml");
    fs::write(&path, "[init]\nforse = true\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert!(!config.init.force);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "forse");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("force"));
}

#[test]
fn test_load_with_warnings_invalid_toml_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".agentic-repo.toml");
    fs::write(&path, "[init\nforce = ").unwrap();

    let err = load_with_warnings(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(".agentic-repo.toml"));
}

#[test]
fn test_load_with_warnings_wrong_type_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".agentic-repo.toml");
    fs::write(&path, "[output]\ncolor = \"rainbow\"\n").unwrap();

    assert!(load_with_warnings(&path).is_err());
}

#[test]
fn test_load_prefers_project_config() {
    let project = tempdir().unwrap();
    let user = tempdir().unwrap();
    fs::write(
        project.path().join(PROJECT_CONFIG_FILE),
        "[init]\nverbose = true\n",
    )
    .unwrap();
    fs::write(user.path().join("config.toml"), "[init]\nforce = true\n").unwrap();

    let loaded = load_from(project.path(), Some(user.path().to_path_buf()), env(&[])).unwrap();

    assert!(loaded.config.init.verbose);
    assert!(!loaded.config.init.force);
    assert_eq!(
        loaded.source.as_deref(),
        Some(project.path().join(PROJECT_CONFIG_FILE).as_path())
    );
}

#[test]
fn test_load_falls_back_to_user_config() {
    let project = tempdir().unwrap();
    let user = tempdir().unwrap();
    fs::write(user.path().join("config.toml"), "[init]\nforce = true\n").unwrap();

    let loaded = load_from(project.path(), Some(user.path().to_path_buf()), env(&[])).unwrap();

    assert!(loaded.config.init.force);
}

#[test]
fn test_load_defaults_when_no_files() {
    let project = tempdir().unwrap();

    let loaded = load_from(project.path(), None, env(&[])).unwrap();

    assert_eq!(loaded.config, Config::default());
    assert!(loaded.source.is_none());
    assert!(loaded.warnings.is_empty());
}

#[test]
fn test_load_invalid_project_config_is_fatal() {
    let project = tempdir().unwrap();
    fs::write(project.path().join(PROJECT_CONFIG_FILE), "not toml [").unwrap();

    assert!(load_from(project.path(), None, env(&[])).is_err());
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides_from(
        Config::default(),
        env(&[
            ("AGENTIC_REPO_FORCE", "1"),
            ("AGENTIC_REPO_VERBOSE", "true"),
            ("AGENTIC_REPO_COLOR", "always"),
        ]),
    );

    assert!(config.init.force);
    assert!(config.init.verbose);
    assert_eq!(config.output.color, ColorMode::Always);
}

#[test]
fn test_env_override_can_disable_file_setting() {
    let mut config = Config::default();
    config.init.force = true;

    let config = with_env_overrides_from(config, env(&[("AGENTIC_REPO_FORCE", "false")]));

    assert!(!config.init.force);
}

#[test]
fn test_env_invalid_color_is_ignored() {
    let config = with_env_overrides_from(
        Config::default(),
        env(&[("AGENTIC_REPO_COLOR", "sometimes")]),
    );

    assert_eq!(config.output.color, ColorMode::Auto);
}
