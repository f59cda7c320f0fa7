// Page View
// Paged tab content that slides horizontally when the active tab changes

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_components::{shift_and_clip, DimmingContext, PageTransition, TabItem, Transition};

use super::Styles;
use crate::core::Tab;

/// Slide in progress from `previous` to the current page
#[derive(Debug, Clone, Copy)]
struct Slide {
    previous: Tab,
    started: Instant,
    transition: Transition,
}

/// One full-size page per tab; only the current page is drawn when idle
#[derive(Debug, Clone)]
pub struct PageView {
    current: Tab,
    slide: Option<Slide>,
    mode: PageTransition,
}

impl PageView {
    pub fn new(current: Tab, mode: PageTransition) -> Self {
        Self {
            current,
            slide: None,
            mode,
        }
    }

    pub fn current(&self) -> Tab {
        self.current
    }

    /// Switch to `tab`; sliding restarts from the page currently shown
    pub fn show(&mut self, tab: Tab, transition: Transition, now: Instant) {
        if tab == self.current {
            return;
        }
        let previous = self.current;
        self.current = tab;
        self.slide = match self.mode {
            PageTransition::Slide if !transition.is_instant() => Some(Slide {
                previous,
                started: now,
                transition,
            }),
            _ => None,
        };
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.slide
            .map(|slide| now.saturating_duration_since(slide.started) < slide.transition.duration)
            .unwrap_or(false)
    }

    /// Horizontal offsets of (previous, current) pages for a view `width` wide
    fn offsets(&self, width: u16, now: Instant) -> Option<(Tab, i32, i32)> {
        let slide = self.slide.filter(|_| self.is_animating(now))?;
        let t = slide.transition.progress(now.saturating_duration_since(slide.started));
        // Moving to a later tab brings the new page in from the right
        let direction: i32 = if self.current.index() > slide.previous.index() { 1 } else { -1 };
        let width = i32::from(width);
        let current_dx = (direction as f32 * width as f32 * (1.0 - t)).round() as i32;
        Some((slide.previous, current_dx - direction * width, current_dx))
    }

    pub fn render(&self, f: &mut Frame, area: Rect, dimming: &DimmingContext, now: Instant) {
        match self.offsets(area.width, now) {
            Some((previous, previous_dx, current_dx)) => {
                render_page(f, previous, shift_and_clip(area, previous_dx, area), dimming);
                render_page(f, self.current, shift_and_clip(area, current_dx, area), dimming);
            }
            None => render_page(f, self.current, area, dimming),
        }
    }
}

fn render_page(f: &mut Frame, tab: Tab, area: Rect, dimming: &DimmingContext) {
    if area.is_empty() {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(dimming.border_color(true)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    let text = vec![
        Line::from(tab.icon()),
        Line::from(tab.label()).style(Styles::page_title(dimming)),
    ];
    let top = inner.y + inner.height.saturating_sub(2) / 2;
    let body = Rect {
        y: top,
        height: inner.bottom() - top,
        ..inner
    };
    f.render_widget(
        Paragraph::new(text).style(Styles::page_body(dimming)).alignment(Alignment::Center),
        body,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    #[test]
    fn test_slide_moves_new_page_in_from_the_right() {
        let start = Instant::now();
        let mut pages = PageView::new(Tab::Home, PageTransition::Slide);
        pages.show(Tab::Notifications, Transition::snappy(), start);

        let (previous, previous_dx, current_dx) = pages.offsets(40, start).unwrap();
        assert_eq!(previous, Tab::Home);
        assert_eq!((previous_dx, current_dx), (0, 40));

        let (_, previous_dx, current_dx) = pages.offsets(40, start + Duration::from_millis(100)).unwrap();
        assert!(current_dx > 0 && current_dx < 40);
        assert_eq!(previous_dx, current_dx - 40);

        assert!(pages.offsets(40, start + Duration::from_millis(200)).is_none());
        assert!(!pages.is_animating(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_slide_back_comes_from_the_left() {
        let start = Instant::now();
        let mut pages = PageView::new(Tab::Settings, PageTransition::Slide);
        pages.show(Tab::Search, Transition::snappy(), start);
        let (_, previous_dx, current_dx) = pages.offsets(40, start).unwrap();
        assert_eq!((previous_dx, current_dx), (0, -40));
    }

    #[test]
    fn test_instant_mode_and_same_tab() {
        let now = Instant::now();
        let mut pages = PageView::new(Tab::Home, PageTransition::Instant);
        pages.show(Tab::Search, Transition::snappy(), now);
        assert_eq!(pages.current(), Tab::Search);
        assert!(!pages.is_animating(now));

        let mut pages = PageView::new(Tab::Home, PageTransition::Slide);
        pages.show(Tab::Home, Transition::snappy(), now);
        assert!(!pages.is_animating(now));
    }

    #[test]
    fn test_renders_current_page_label() {
        let mut terminal = Terminal::new(TestBackend::new(30, 9)).unwrap();
        let pages = PageView::new(Tab::Search, PageTransition::Slide);
        let dimming = DimmingContext::new(false);
        terminal
            .draw(|f| {
                let area = f.area();
                pages.render(f, area, &dimming, Instant::now());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let screen: String = (0..9u16)
            .flat_map(|y| (0..30u16).map(move |x| (x, y)))
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect();
        assert!(screen.contains("Search"));
    }
}
