// Floating Tab Bar Renderer
// Rounded capsule inset from the screen edges, icons only, with a filled
// capsule behind the active button
//
//     ╭──────────────────────────────╮
//     │  ⌂    [ ⌕ ]    ⍾      ⚙     │
//     ╰──────────────────────────────╯

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

use super::tab_bar::{equal_columns, ButtonView, TabBarPalette, TabButtonRenderer};

/// Border plus one row of buttons
pub const FLOATING_BAR_MIN_HEIGHT: u16 = 3;

const HORIZONTAL_MARGIN: u16 = 2;
const BOTTOM_MARGIN: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingBar {
    height: u16,
}

impl FloatingBar {
    pub fn new(height: u16) -> Self {
        Self {
            height: height.max(FLOATING_BAR_MIN_HEIGHT),
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }
}

impl TabButtonRenderer for FloatingBar {
    fn bar_area(&self, area: Rect) -> Rect {
        let margin = HORIZONTAL_MARGIN.min(area.width / 2);
        let height = self.height.min(area.height.saturating_sub(BOTTOM_MARGIN));
        Rect {
            x: area.x + margin,
            y: area.bottom().saturating_sub(BOTTOM_MARGIN + height).max(area.y),
            width: area.width - margin * 2,
            height,
        }
    }

    // Floats over the page, content keeps the whole area

    fn layout(&self, bar: Rect, count: usize) -> Vec<Rect> {
        let inner = Rect {
            x: bar.x.saturating_add(1),
            y: bar.y.saturating_add(1),
            width: bar.width.saturating_sub(2),
            height: bar.height.saturating_sub(2),
        };
        equal_columns(inner, count)
    }

    fn indicator_rect(&self, button: Rect) -> Rect {
        button
    }

    fn render_background(&self, f: &mut Frame, bar: Rect, palette: &TabBarPalette) {
        f.render_widget(Clear, bar);
        let capsule = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.muted));
        f.render_widget(capsule, bar);
    }

    fn render_indicator(&self, f: &mut Frame, rect: Rect, palette: &TabBarPalette) {
        if rect.is_empty() {
            return;
        }
        f.render_widget(Block::default().style(Style::default().bg(palette.accent)), rect);
    }

    fn render_button(&self, f: &mut Frame, button: &ButtonView<'_>, palette: &TabBarPalette) {
        let area = button.area;
        if area.is_empty() {
            return;
        }
        let style = if button.is_active {
            Style::default().fg(palette.on_accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.foreground)
        };
        let row = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        f.render_widget(
            Paragraph::new(button.icon).style(style).alignment(Alignment::Center),
            row,
        );
    }
}
