// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::time::Duration;

use tui_components::TabBarDefaults;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Built-in application settings
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Terminal and frame pacing
    pub ui: UiSettings,

    /// Used for anything a tab bar entry leaves out
    pub tab_bar_defaults: TabBarDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
    /// Enable mouse capture (drag and tap)
    pub mouse_enabled: bool,

    /// Poll interval while the indicator or a page is moving
    pub frame_interval: Duration,

    /// Poll interval when the screen is still
    pub idle_poll: Duration,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse_enabled: compiled::MOUSE_ENABLED,
            frame_interval: Duration::from_millis(compiled::FRAME_INTERVAL_MS),
            idle_poll: Duration::from_millis(compiled::IDLE_POLL_MS),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            tab_bar_defaults: TabBarDefaults {
                hover_transition_ms: compiled::HOVER_TRANSITION_MS,
                tap_transition_ms: compiled::TAP_TRANSITION_MS,
                drag_from_any_tab: compiled::DRAG_FROM_ANY_TAB,
            },
        }
    }
}
