// Configuration validation module
// Turns the YAML file into screens and tab bars, falling back to built-in defaults
// for anything that cannot be loaded or validated

use std::path::PathBuf;

use tracing::warn;
use tui_components::{
    convert_tab_bar_config, BaseLayoutConfig, BindingConfig, StatusBarConfig, TabBarConfig,
    TabBarDefaults, TabBarVariant,
};

use crate::config::{config_path, load_config, ConfigFile};
use crate::core::AppConfig;

/// One menu entry and the tab bar its screen uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSpec {
    pub title: String,
    pub handle: String,
    pub tab_bar: TabBarConfig,
}

/// Everything the application needs from configuration, already validated
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub layout: BaseLayoutConfig,
    pub log_file: Option<PathBuf>,
    pub screens: Vec<ScreenSpec>,
    /// Problems found while validating; reported once logging is up
    pub warnings: Vec<String>,
}

impl ValidatedConfig {
    /// Built-in screens used when no usable config is available
    pub fn fallback(defaults: &AppConfig) -> Self {
        Self {
            layout: BaseLayoutConfig {
                title: "Interactive Tab Bar".to_string(),
                global_bindings: vec![
                    BindingConfig::new("[←/→]", "Switch tab"),
                    BindingConfig::new("[Esc]", "Back"),
                    BindingConfig::new("[q]", "Quit"),
                ],
                status_bar: StatusBarConfig::default(),
            },
            log_file: None,
            screens: fallback_screens(&defaults.tab_bar_defaults),
            warnings: Vec::new(),
        }
    }

    pub fn report_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

fn fallback_screens(defaults: &TabBarDefaults) -> Vec<ScreenSpec> {
    let bottom = TabBarConfig::from_defaults(defaults);
    let floating = TabBarConfig {
        variant: TabBarVariant::Floating,
        height: TabBarVariant::Floating.default_height(),
        ..bottom.clone()
    };
    vec![
        ScreenSpec {
            title: "Stick to Bottom".to_string(),
            handle: "stick_to_bottom".to_string(),
            tab_bar: bottom,
        },
        ScreenSpec {
            title: "Floating".to_string(),
            handle: "floating".to_string(),
            tab_bar: floating,
        },
    ]
}

/// Load and validate configuration with error recovery
pub fn load_and_validate_config(config_path_override: Option<PathBuf>, defaults: &AppConfig) -> ValidatedConfig {
    let path = config_path(config_path_override);
    match load_config(&path) {
        Ok(config) => validate_config(config, defaults),
        Err(e) => {
            let mut fallback = ValidatedConfig::fallback(defaults);
            fallback
                .warnings
                .push(format!("Failed to load configuration: {:#}; using built-in defaults", e));
            fallback
        }
    }
}

/// Validate a parsed config file; invalid tab bars fall back to the compiled defaults
pub fn validate_config(config: ConfigFile, defaults: &AppConfig) -> ValidatedConfig {
    let mut warnings = Vec::new();
    let tab_bar_defaults = &defaults.tab_bar_defaults;

    let mut screens: Vec<ScreenSpec> = config
        .screens
        .iter()
        .map(|screen| {
            let tab_bar = match config.tab_bars.get(&screen.tab_bar) {
                None => {
                    warnings.push(format!(
                        "Screen '{}' refers to unknown tab bar '{}' (available: {}); using defaults",
                        screen.title,
                        screen.tab_bar,
                        config.tab_bars.keys().map(|k| k.as_str()).collect::<Vec<_>>().join(", ")
                    ));
                    TabBarConfig::from_defaults(tab_bar_defaults)
                }
                Some(yaml) => convert_tab_bar_config(yaml, tab_bar_defaults).unwrap_or_else(|e| {
                    warnings.push(format!("Tab bar '{}': {}; using defaults", screen.tab_bar, e));
                    TabBarConfig::from_defaults(tab_bar_defaults)
                }),
            };
            ScreenSpec {
                title: screen.title.clone(),
                handle: screen.tab_bar.clone(),
                tab_bar,
            }
        })
        .collect();

    if screens.is_empty() {
        warnings.push("No screens configured; using built-in screens".to_string());
        screens = fallback_screens(tab_bar_defaults);
    }

    let application = config.application;
    ValidatedConfig {
        layout: BaseLayoutConfig {
            title: application.title,
            global_bindings: application
                .bindings
                .into_iter()
                .map(|b| BindingConfig::new(b.key, b.description))
                .collect(),
            status_bar: StatusBarConfig {
                default_text: application.status_bar.default_text,
                drag_text: application.status_bar.drag_text,
            },
        },
        log_file: application.log_file,
        screens,
        warnings,
    }
}
