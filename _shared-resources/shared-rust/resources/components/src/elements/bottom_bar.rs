// Bottom Tab Bar Renderer
// Full-width bar anchored to the bottom edge: icon + label per button,
// the active icon is raised onto the bar's top edge inside a filled bubble
//
//   ──────(⌂)─────────────────────────────
//               ⌕          ⍾         ⚙
//     Home    Search  Notifications Settings

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::tab_bar::{equal_columns, ButtonView, TabBarPalette, TabButtonRenderer};

/// Smallest height that still fits raised icon, resting icon and label
pub const BOTTOM_BAR_MIN_HEIGHT: u16 = 3;

/// Width of the bubble drawn behind the raised icon
const BUBBLE_WIDTH: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BottomBar {
    height: u16,
}

impl BottomBar {
    pub fn new(height: u16) -> Self {
        Self {
            height: height.max(BOTTOM_BAR_MIN_HEIGHT),
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn row(area: Rect, y: u16) -> Rect {
        Rect {
            x: area.x,
            y,
            width: area.width,
            height: 1,
        }
    }

    /// Single row just wide enough for `text`, centered in `area`
    fn centered_row(area: Rect, y: u16, text: &str) -> Rect {
        let width = (text.chars().count() as u16).clamp(1, area.width.max(1));
        Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y,
            width: width.min(area.width),
            height: 1,
        }
    }
}

impl TabButtonRenderer for BottomBar {
    fn bar_area(&self, area: Rect) -> Rect {
        let height = self.height.min(area.height);
        Rect {
            x: area.x,
            y: area.bottom().saturating_sub(height),
            width: area.width,
            height,
        }
    }

    fn content_area(&self, area: Rect) -> Rect {
        Rect {
            height: area.height.saturating_sub(self.height),
            ..area
        }
    }

    fn layout(&self, bar: Rect, count: usize) -> Vec<Rect> {
        // One column of horizontal padding on each side
        let row = Rect {
            x: bar.x.saturating_add(1),
            y: bar.y,
            width: bar.width.saturating_sub(2),
            height: bar.height,
        };
        equal_columns(row, count)
    }

    fn indicator_rect(&self, button: Rect) -> Rect {
        let width = BUBBLE_WIDTH.min(button.width);
        Rect {
            x: button.x + (button.width - width) / 2,
            y: button.y,
            width,
            height: 1.min(button.height),
        }
    }

    fn render_background(&self, f: &mut Frame, bar: Rect, palette: &TabBarPalette) {
        f.render_widget(Clear, bar);
        // Top border stands in for the drop shadow
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.muted));
        f.render_widget(block, bar);
    }

    fn render_indicator(&self, f: &mut Frame, rect: Rect, palette: &TabBarPalette) {
        if rect.is_empty() {
            return;
        }
        let bubble = Block::default().style(Style::default().bg(palette.accent));
        f.render_widget(bubble, rect);
    }

    fn render_button(&self, f: &mut Frame, button: &ButtonView<'_>, palette: &TabBarPalette) {
        let area = button.area;
        if area.is_empty() {
            return;
        }

        let label_y = area.bottom() - 1;
        // Active icon sits on the top edge, resting icons one row above the label
        let icon_y = if button.is_active {
            area.y
        } else {
            label_y.saturating_sub(1).max(area.y)
        };

        let icon_style = if button.is_active {
            Style::default().fg(palette.on_accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.foreground)
        };
        // Narrow rect so the icon style does not spill over the top border
        let icon = Paragraph::new(button.icon).style(icon_style);
        f.render_widget(icon, Self::centered_row(area, icon_y, button.icon));

        if label_y > icon_y {
            let label_style = if button.is_active {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            let label = Paragraph::new(button.label)
                .style(label_style)
                .alignment(Alignment::Center);
            f.render_widget(label, Self::row(area, label_y));
        }
    }
}
