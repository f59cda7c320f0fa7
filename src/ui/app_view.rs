// Application View
// Base layout around either the menu or the open tab screen

use std::time::Instant;

use ratatui::{
    widgets::{Block, Borders},
    Frame,
};
use tui_components::{BaseLayout, DimmingContext};

use super::{render_menu, Styles};
use crate::core::App;

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &mut App, now: Instant) {
    let area = f.area();

    // Content behind the bar dims while a drag is uncommitted
    let dimming = DimmingContext::new(app.is_dragging());
    let content_area = BaseLayout::new(&app.layout, &dimming).render(f, area).content_area;

    match app.screen.as_mut() {
        None => render_menu(f, content_area, app, &dimming),
        Some(screen) => {
            let block = Block::default()
                .borders(Borders::TOP)
                .title(format!(" ‹ {} ", screen.title))
                .border_style(Styles::screen_border(&dimming));
            let screen_area = block.inner(content_area);
            f.render_widget(block, content_area);

            let pages_area = screen.bar.content_area(screen_area);
            screen.pages.render(f, pages_area, &dimming, now);
            // Drawn last so the floating bar sits over the pages
            screen.bar.render(f, screen_area, screen.active, now);
        }
    }
}
