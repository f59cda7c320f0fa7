// Tab Bar Manager
// YAML configuration structures, validation and a constructor for configured tab bars

use std::time::Duration;

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::core::{TabItem, TransitionSet};
use crate::elements::{BottomBar, FloatingBar, InteractiveTabBar, TabBarPalette, TabButtonRenderer};
use crate::utilities::try_parse_color;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Tab bar colors from YAML; any omitted role keeps the default palette color
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TabBarColorsYaml {
    pub accent: Option<String>,
    pub on_accent: Option<String>,
    pub foreground: Option<String>,
    pub muted: Option<String>,
}

/// Tab bar configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabBarConfigYaml {
    /// "bottom" or "floating"
    #[serde(default = "default_variant")]
    pub variant: String,
    #[serde(default)]
    pub colors: TabBarColorsYaml,
    /// Bar height in rows (variant default when omitted)
    pub height: Option<u16>,
    /// Indicator transition while dragging across tabs
    pub hover_transition_ms: Option<u64>,
    /// Indicator and page transition after a tap or keyboard selection
    pub tap_transition_ms: Option<u64>,
    /// Arm drags from any button instead of only the active one
    pub drag_from_any_tab: Option<bool>,
    /// "slide" or "instant"
    #[serde(default = "default_page_transition")]
    pub page_transition: String,
}

fn default_variant() -> String {
    "bottom".to_string()
}

fn default_page_transition() -> String {
    "slide".to_string()
}

impl Default for TabBarConfigYaml {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            colors: TabBarColorsYaml::default(),
            height: None,
            hover_transition_ms: None,
            tap_transition_ms: None,
            drag_from_any_tab: None,
            page_transition: default_page_transition(),
        }
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Validated Configuration                                     │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabBarVariant {
    Bottom,
    Floating,
}

impl TabBarVariant {
    pub fn default_height(self) -> u16 {
        match self {
            TabBarVariant::Bottom => 4,
            TabBarVariant::Floating => 3,
        }
    }
}

/// How the page view follows a committed selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTransition {
    Slide,
    Instant,
}

/// Values used where the YAML entry leaves a field out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBarDefaults {
    pub hover_transition_ms: u64,
    pub tap_transition_ms: u64,
    pub drag_from_any_tab: bool,
}

impl Default for TabBarDefaults {
    fn default() -> Self {
        let transitions = TransitionSet::default();
        Self {
            hover_transition_ms: transitions.hover.duration.as_millis() as u64,
            tap_transition_ms: transitions.tap.duration.as_millis() as u64,
            drag_from_any_tab: false,
        }
    }
}

/// Tab bar configuration after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBarConfig {
    pub variant: TabBarVariant,
    pub palette: TabBarPalette,
    pub height: u16,
    pub transitions: TransitionSet,
    pub drag_from_any_tab: bool,
    pub page_transition: PageTransition,
}

impl TabBarConfig {
    /// Configuration built purely from defaults
    pub fn from_defaults(defaults: &TabBarDefaults) -> Self {
        let transitions = TransitionSet::default();
        Self {
            variant: TabBarVariant::Bottom,
            palette: TabBarPalette::default(),
            height: TabBarVariant::Bottom.default_height(),
            transitions: TransitionSet {
                hover: transitions.hover.with_duration(Duration::from_millis(defaults.hover_transition_ms)),
                tap: transitions.tap.with_duration(Duration::from_millis(defaults.tap_transition_ms)),
            },
            drag_from_any_tab: defaults.drag_from_any_tab,
            page_transition: PageTransition::Slide,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabBarConfigError {
    #[error("unknown tab bar variant '{0}' (expected 'bottom' or 'floating')")]
    UnknownVariant(String),
    #[error("unknown {role} color '{value}'")]
    UnknownColor { role: &'static str, value: String },
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
    #[error("unknown page transition '{0}' (expected 'slide' or 'instant')")]
    UnknownPageTransition(String),
    #[error("tab set is empty")]
    NoTabs,
    #[error("tab '{0}' has no icon")]
    EmptyIcon(String),
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Convert a YAML tab bar entry into a validated configuration
pub fn convert_tab_bar_config(
    config: &TabBarConfigYaml,
    defaults: &TabBarDefaults,
) -> Result<TabBarConfig, TabBarConfigError> {
    let variant = match config.variant.to_lowercase().as_str() {
        "bottom" => TabBarVariant::Bottom,
        "floating" => TabBarVariant::Floating,
        other => return Err(TabBarConfigError::UnknownVariant(other.to_string())),
    };

    let page_transition = match config.page_transition.to_lowercase().as_str() {
        "slide" => PageTransition::Slide,
        "instant" => PageTransition::Instant,
        other => return Err(TabBarConfigError::UnknownPageTransition(other.to_string())),
    };

    let hover_ms = config.hover_transition_ms.unwrap_or(defaults.hover_transition_ms);
    if hover_ms == 0 {
        return Err(TabBarConfigError::ZeroDuration("hover_transition_ms"));
    }
    let tap_ms = config.tap_transition_ms.unwrap_or(defaults.tap_transition_ms);
    if tap_ms == 0 {
        return Err(TabBarConfigError::ZeroDuration("tap_transition_ms"));
    }

    let fallback = TabBarPalette::default();
    let colors = &config.colors;
    let palette = TabBarPalette {
        accent: color_or(&colors.accent, "accent", fallback.accent)?,
        on_accent: color_or(&colors.on_accent, "on_accent", fallback.on_accent)?,
        foreground: color_or(&colors.foreground, "foreground", fallback.foreground)?,
        muted: color_or(&colors.muted, "muted", fallback.muted)?,
    };

    let transitions = TransitionSet::default();
    Ok(TabBarConfig {
        variant,
        palette,
        height: config.height.unwrap_or_else(|| variant.default_height()),
        transitions: TransitionSet {
            hover: transitions.hover.with_duration(Duration::from_millis(hover_ms)),
            tap: transitions.tap.with_duration(Duration::from_millis(tap_ms)),
        },
        drag_from_any_tab: config.drag_from_any_tab.unwrap_or(defaults.drag_from_any_tab),
        page_transition,
    })
}

fn color_or(value: &Option<String>, role: &'static str, fallback: Color) -> Result<Color, TabBarConfigError> {
    match value {
        None => Ok(fallback),
        Some(value) => try_parse_color(value).ok_or_else(|| TabBarConfigError::UnknownColor {
            role,
            value: value.clone(),
        }),
    }
}

/// Check that a tab set can be drawn: at least one tab, every tab with an icon
pub fn validate_tab_items<T: TabItem>() -> Result<(), TabBarConfigError> {
    if T::ALL.is_empty() {
        return Err(TabBarConfigError::NoTabs);
    }
    match T::ALL.iter().find(|tab| tab.icon().trim().is_empty()) {
        Some(tab) => Err(TabBarConfigError::EmptyIcon(tab.label().to_string())),
        None => Ok(()),
    }
}

/// Build a tab bar with the renderer the configuration asks for
pub fn create_tab_bar_from_config<T: TabItem>(
    config: &TabBarConfig,
) -> InteractiveTabBar<T, Box<dyn TabButtonRenderer>> {
    let renderer: Box<dyn TabButtonRenderer> = match config.variant {
        TabBarVariant::Bottom => Box::new(BottomBar::new(config.height)),
        TabBarVariant::Floating => Box::new(FloatingBar::new(config.height)),
    };
    debug!(variant = ?config.variant, height = config.height, "creating tab bar");
    InteractiveTabBar::new(renderer, config.transitions)
        .with_palette(config.palette)
        .with_drag_from_any_tab(config.drag_from_any_tab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tab_item::test_tabs::DemoTab;
    use crate::core::{DragState, PointerEvent};
    use ratatui::layout::{Position, Rect};

    fn parse(yaml: &str) -> TabBarConfigYaml {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_empty_entry_uses_defaults() {
        let config = convert_tab_bar_config(&parse("{}"), &TabBarDefaults::default()).unwrap();
        assert_eq!(config, TabBarConfig::from_defaults(&TabBarDefaults::default()));
        assert_eq!(config.transitions, TransitionSet::default());
    }

    #[test]
    fn test_full_entry() {
        let yaml = r##"
variant: floating
colors:
  accent: "#0a84ff"
  muted: gray
height: 5
hover_transition_ms: 300
tap_transition_ms: 150
drag_from_any_tab: true
page_transition: instant
"##;
        let config = convert_tab_bar_config(&parse(yaml), &TabBarDefaults::default()).unwrap();
        assert_eq!(config.variant, TabBarVariant::Floating);
        assert_eq!(config.palette.accent, Color::Rgb(0x0a, 0x84, 0xff));
        assert_eq!(config.palette.muted, Color::Gray);
        assert_eq!(config.palette.on_accent, TabBarPalette::default().on_accent);
        assert_eq!(config.height, 5);
        assert_eq!(config.transitions.hover.duration, Duration::from_millis(300));
        assert_eq!(config.transitions.tap.duration, Duration::from_millis(150));
        assert!(config.drag_from_any_tab);
        assert_eq!(config.page_transition, PageTransition::Instant);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let defaults = TabBarDefaults {
            hover_transition_ms: 400,
            tap_transition_ms: 100,
            drag_from_any_tab: true,
        };
        let config = convert_tab_bar_config(&parse("variant: bottom"), &defaults).unwrap();
        assert_eq!(config.transitions.hover.duration, Duration::from_millis(400));
        assert_eq!(config.transitions.tap.duration, Duration::from_millis(100));
        assert!(config.drag_from_any_tab);
        assert_eq!(config.height, TabBarVariant::Bottom.default_height());
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        let defaults = TabBarDefaults::default();
        assert_eq!(
            convert_tab_bar_config(&parse("variant: sidebar"), &defaults),
            Err(TabBarConfigError::UnknownVariant("sidebar".to_string()))
        );
        assert_eq!(
            convert_tab_bar_config(&parse("colors: { accent: chartreuse }"), &defaults),
            Err(TabBarConfigError::UnknownColor { role: "accent", value: "chartreuse".to_string() })
        );
        assert_eq!(
            convert_tab_bar_config(&parse("hover_transition_ms: 0"), &defaults),
            Err(TabBarConfigError::ZeroDuration("hover_transition_ms"))
        );
        assert_eq!(
            convert_tab_bar_config(&parse("page_transition: fade"), &defaults),
            Err(TabBarConfigError::UnknownPageTransition("fade".to_string()))
        );
    }

    #[test]
    fn test_demo_tabs_validate() {
        assert_eq!(validate_tab_items::<DemoTab>(), Ok(()));
    }

    #[test]
    fn test_created_bar_honours_drag_from_any_tab() {
        let mut config = TabBarConfig::from_defaults(&TabBarDefaults::default());
        config.drag_from_any_tab = true;
        let bar = create_tab_bar_from_config::<DemoTab>(&config);
        // Record a layout without drawing
        let buttons: Vec<Rect> = (0..4).map(|i| Rect::new(i * 10, 0, 10, 4)).collect();
        let mut active = DemoTab::Home;
        let mut interaction = bar.interaction().clone();
        interaction.record_layout(&buttons);
        interaction.handle_pointer(PointerEvent::Down(Position::new(25, 1)), &mut active);
        assert!(matches!(interaction.state(), DragState::Dragging { .. }));
    }
}
