// UI Styles
// Color schemes and styling for the demo screens

use ratatui::style::{Color, Modifier, Style};
use tui_components::DimmingContext;

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Menu ===

    pub fn menu_selected() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn menu_normal() -> Style {
        Style::default()
    }

    pub fn menu_hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // === Pages ===

    pub fn page_title(dimming: &DimmingContext) -> Style {
        Style::default()
            .fg(dimming.text_color(true))
            .add_modifier(Modifier::BOLD)
    }

    pub fn page_body(dimming: &DimmingContext) -> Style {
        Style::default().fg(dimming.text_color(false))
    }

    pub fn screen_border(dimming: &DimmingContext) -> Style {
        Style::default().fg(dimming.border_color(false))
    }
}
