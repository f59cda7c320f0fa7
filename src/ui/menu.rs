// Menu Screen
// List of demo screens; rows are clickable

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_components::DimmingContext;

use super::Styles;
use crate::core::App;

/// Render the menu and record each entry's row for click handling
pub fn render_menu(f: &mut Frame, area: Rect, app: &mut App, dimming: &DimmingContext) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Screens ")
        .border_style(Styles::screen_border(dimming));
    let inner = block.inner(area);
    f.render_widget(block, area);

    app.menu_rows.clear();
    for (idx, screen) in app.screens.iter().enumerate() {
        let y = inner.y + idx as u16;
        if y >= inner.bottom() {
            break;
        }
        let row = Rect {
            y,
            height: 1,
            ..inner
        };
        let style = if idx == app.menu_index {
            Styles::menu_selected()
        } else {
            Styles::menu_normal()
        };
        let line = Line::from(vec![
            Span::styled(format!(" {} ", screen.title), style),
            Span::styled(" ›", Styles::menu_hint()),
        ]);
        f.render_widget(Paragraph::new(line), row);
        app.menu_rows.push(row);
    }
}
