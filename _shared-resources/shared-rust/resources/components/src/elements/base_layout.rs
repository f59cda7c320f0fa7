// Base layout component for TUI applications
// Provides title header, context bindings, footer divider and status bar
use crate::utilities::DimmingContext;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the chrome: title(3) + bindings(1) + divider(1) + status(1)
const CHROME_HEIGHT: u16 = 6;

/// Configuration for the base layout UI elements
#[derive(Debug, Clone, Default)]
pub struct BaseLayoutConfig {
    pub title: String,
    pub global_bindings: Vec<BindingConfig>,
    pub status_bar: StatusBarConfig,
}

/// Configuration for a keyboard binding display
#[derive(Debug, Clone)]
pub struct BindingConfig {
    pub key: String,        // e.g., "[←/→]", "[q]"
    pub description: String, // e.g., "Switch tab"
}

impl BindingConfig {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// Configuration for the status bar
#[derive(Debug, Clone)]
pub struct StatusBarConfig {
    pub default_text: String,
    pub drag_text: Option<String>, // Text to show while a tab drag is in progress
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            default_text: "Status: Ready | Click or drag across the tab bar | 'q' to quit".to_string(),
            drag_text: Some("Dragging - release over a tab to select it, Esc to cancel".to_string()),
        }
    }
}

/// Result of rendering the base layout
/// Provides the content area where application-specific content should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseLayoutResult {
    pub content_area: Rect,
}

/// Base layout component that renders the standard TUI frame structure
pub struct BaseLayout<'a> {
    config: &'a BaseLayoutConfig,
    dimming: &'a DimmingContext,
}

impl<'a> BaseLayout<'a> {
    pub fn new(config: &'a BaseLayoutConfig, dimming: &'a DimmingContext) -> Self {
        Self { config, dimming }
    }

    /// Render the base layout and return the content area
    pub fn render(&self, f: &mut Frame, area: Rect) -> BaseLayoutResult {
        // Too small for chrome: hand everything to the content
        if area.width == 0 || area.height <= CHROME_HEIGHT {
            return BaseLayoutResult { content_area: area };
        }

        let title_banner = Rect { height: 3, ..area };
        let status_bar = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        let footer_div = Rect {
            y: status_bar.y - 1,
            ..status_bar
        };
        let context_bindings = Rect {
            y: footer_div.y - 1,
            ..status_bar
        };
        let content_area = Rect {
            y: title_banner.bottom(),
            height: context_bindings.y - title_banner.bottom(),
            ..area
        };

        self.render_title(f, title_banner);
        self.render_context_bindings(f, context_bindings);
        self.render_footer_divider(f, footer_div);
        self.render_status_bar(f, status_bar);

        BaseLayoutResult { content_area }
    }

    /// Render the title header with borders
    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.dimming.border_color(true)));

        let title = Paragraph::new(Line::from(format!(" {}", self.config.title)))
            .block(title_block)
            .style(Style::default()
                .fg(self.dimming.text_color(true))
                .add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, area);
    }

    /// Render the status bar (dim grey colored)
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if self.dimming.dimmed {
            self.config.status_bar.drag_text.as_deref()
                .unwrap_or(&self.config.status_bar.default_text)
        } else {
            &self.config.status_bar.default_text
        };

        let dim_grey = Color::Rgb(0x44, 0x44, 0x44);
        f.render_widget(Paragraph::new(status_text).style(Style::default().fg(dim_grey)), area);
    }

    fn render_footer_divider(&self, f: &mut Frame, area: Rect) {
        let divider = Paragraph::new("─".repeat(area.width as usize))
            .style(Style::default().fg(self.dimming.border_color(false)));
        f.render_widget(divider, area);
    }

    fn render_context_bindings(&self, f: &mut Frame, area: Rect) {
        if self.config.global_bindings.is_empty() {
            return;
        }
        let separator = Style::default().fg(self.dimming.text_color(false));
        let mut spans = Vec::new();
        for (idx, binding) in self.config.global_bindings.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" | ", separator));
            }
            spans.push(Span::styled(
                binding.key.as_str(),
                Style::default()
                    .fg(self.dimming.text_color(true))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {}", binding.description), separator));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
