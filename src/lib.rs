// Interactive Tab Bar Library
// Demo application for the gesture-driven tab bar in tui-components

// Configuration file loading and validation
pub mod config;
pub mod config_validation;

// Core infrastructure - state, events, compiled defaults
pub mod core;

// File logging setup
pub mod logging;

// UI - screens, pages and the main loop
pub mod ui;

// Re-export commonly used items for convenience
pub use config_validation::{load_and_validate_config, ScreenSpec, ValidatedConfig};
pub use crate::core::{App, AppConfig, AppEvent, Tab};
pub use ui::run_app;
