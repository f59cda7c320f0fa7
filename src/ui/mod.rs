// UI module
// Screens, paged content and the main event loop

pub mod app_view;
pub mod menu;
pub mod pages;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::time::Instant;

use crate::core::{App, AppEvent, EventHandler};

pub use app_view::render_app;
pub use menu::render_menu;
pub use pages::PageView;
pub use styles::Styles;

/// Run the main application event loop
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Layout is recorded during the draw, before the next event is read
        let now = Instant::now();
        terminal.draw(|f| render_app(f, app, now))?;

        // Poll fast only while something is moving
        let timeout = if app.is_animating(Instant::now()) {
            app.config.ui.frame_interval
        } else {
            app.config.ui.idle_poll
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            let app_event = EventHandler::handle(event);

            handle_event(app, app_event, Instant::now());
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}

/// Handle an application event
pub fn handle_event(app: &mut App, event: AppEvent, now: Instant) {
    match event {
        AppEvent::Quit => app.quit(),
        AppEvent::Back => app.back(),
        AppEvent::Previous => app.previous(now),
        AppEvent::Next => app.next(now),
        AppEvent::Select => app.select(),
        AppEvent::JumpTo(index) => app.jump_to(index, now),
        AppEvent::Pointer(pointer) => app.pointer(pointer, now),
        AppEvent::Cancel => app.cancel_gesture(),
        AppEvent::Resize => app.resize(),
        AppEvent::None => {}
    }
}
