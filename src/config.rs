// Configuration loading module

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tui_components::{StatusBarConfig, TabBarConfigYaml};

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "INTERACTIVE_TAB_BAR_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub application: ApplicationConfig,
    /// Menu entries, in display order
    #[serde(default)]
    pub screens: Vec<ScreenConfigYaml>,
    /// Tab bar entries keyed by handle
    #[serde(default)]
    pub tab_bars: BTreeMap<String, TabBarConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    #[serde(default)]
    pub bindings: Vec<BindingConfigYaml>,
    #[serde(default)]
    pub status_bar: StatusBarConfigYaml,
    /// Log destination; no file means no logging
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
    #[serde(default)]
    pub drag_text: Option<String>,
}

impl Default for StatusBarConfigYaml {
    fn default() -> Self {
        let status = StatusBarConfig::default();
        Self {
            default_text: status.default_text,
            drag_text: status.drag_text,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScreenConfigYaml {
    pub title: String,
    /// Handle of the entry in `tab_bars`
    pub tab_bar: String,
}

/// Resolve the config path: explicit path, then the environment, then the bundled file
pub fn config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(|| {
            let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
            default_path.push("src");
            default_path.push("config.yaml");
            default_path
        })
}

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Failed to parse config file {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<ConfigFile> {
    let config: ConfigFile = serde_yaml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = load_config(&config_path(Some(
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src").join("config.yaml"),
        )))
        .unwrap();
        assert_eq!(config.application.title, "Interactive Tab Bar");
        assert_eq!(config.screens.len(), 2);
        for screen in &config.screens {
            assert!(config.tab_bars.contains_key(&screen.tab_bar), "no tab bar '{}'", screen.tab_bar);
        }
    }

    #[test]
    fn test_minimal_config() {
        let config = parse_config("application:\n  title: Demo\n").unwrap();
        assert!(config.screens.is_empty());
        assert!(config.tab_bars.is_empty());
        assert!(config.application.log_file.is_none());
        assert_eq!(config.application.status_bar.default_text, StatusBarConfig::default().default_text);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/tab-bar.yaml")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/tab-bar.yaml"));
    }
}
