// Application State
// Menu, the open tab screen, and the routing of input to them

use std::time::Instant;

use ratatui::layout::{Position, Rect};
use tracing::{debug, info};
use tui_components::{
    create_tab_bar_from_config, BaseLayoutConfig, Interaction, InteractiveTabBar, PointerEvent,
    TabButtonRenderer, TabItem,
};

use super::{AppConfig, Tab};
use crate::config_validation::{ScreenSpec, ValidatedConfig};
use crate::ui::PageView;

/// A screen of paged content with its tab bar
/// The screen owns the committed active tab and hands `&mut` to the bar
pub struct TabScreen {
    pub title: String,
    pub active: Tab,
    pub bar: InteractiveTabBar<Tab, Box<dyn TabButtonRenderer>>,
    pub pages: PageView,
}

impl TabScreen {
    /// Fresh screen state: first tab active, nothing measured yet
    pub fn new(spec: &ScreenSpec) -> Self {
        let active = Tab::ALL[0];
        Self {
            title: spec.title.clone(),
            active,
            bar: create_tab_bar_from_config(&spec.tab_bar),
            pages: PageView::new(active, spec.tab_bar.page_transition),
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) -> Interaction<Tab> {
        let outcome = self.bar.handle_pointer(event, &mut self.active);
        self.follow(outcome, now)
    }

    pub fn select_previous(&mut self, now: Instant) -> Interaction<Tab> {
        let outcome = self.bar.select_previous(&mut self.active);
        self.follow(outcome, now)
    }

    pub fn select_next(&mut self, now: Instant) -> Interaction<Tab> {
        let outcome = self.bar.select_next(&mut self.active);
        self.follow(outcome, now)
    }

    pub fn select_index(&mut self, index: usize, now: Instant) -> Interaction<Tab> {
        let outcome = self.bar.select_index(index, &mut self.active);
        self.follow(outcome, now)
    }

    /// Pages follow every committed change with the tap transition
    fn follow(&mut self, outcome: Interaction<Tab>, now: Instant) -> Interaction<Tab> {
        if let Some(tab) = outcome.committed() {
            self.pages.show(tab, self.bar.interaction().transitions().tap, now);
        }
        outcome
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.bar.is_animating(now) || self.pages.is_animating(now)
    }
}

/// Main application state
pub struct App {
    /// Built-in defaults (compiled from config.yaml)
    pub config: AppConfig,

    /// Title, bindings and status text
    pub layout: BaseLayoutConfig,

    /// Menu entries
    pub screens: Vec<ScreenSpec>,

    /// Highlighted menu entry
    pub menu_index: usize,

    /// Screen pushed on top of the menu, rebuilt every time it opens
    pub screen: Option<TabScreen>,

    /// Menu row rectangles from the last frame, for click handling
    pub(crate) menu_rows: Vec<Rect>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, validated: ValidatedConfig) -> Self {
        Self {
            config,
            layout: validated.layout,
            screens: validated.screens,
            menu_index: 0,
            screen: None,
            menu_rows: Vec::new(),
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn open_screen(&mut self, index: usize) {
        if let Some(spec) = self.screens.get(index) {
            info!(screen = %spec.title, tab_bar = %spec.handle, "opening screen");
            self.menu_index = index;
            self.screen = Some(TabScreen::new(spec));
        }
    }

    pub fn close_screen(&mut self) {
        if let Some(screen) = self.screen.take() {
            info!(screen = %screen.title, "closing screen");
        }
    }

    /// Esc: cancel a drag first, then leave the screen, then quit
    pub fn back(&mut self) {
        match self.screen.as_mut() {
            Some(screen) if screen.bar.is_dragging() => {
                screen.bar.cancel();
            }
            Some(_) => self.close_screen(),
            None => self.quit(),
        }
    }

    pub fn previous(&mut self, now: Instant) {
        match self.screen.as_mut() {
            Some(screen) => {
                screen.select_previous(now);
            }
            None if !self.screens.is_empty() => {
                self.menu_index = (self.menu_index + self.screens.len() - 1) % self.screens.len();
            }
            None => {}
        }
    }

    pub fn next(&mut self, now: Instant) {
        match self.screen.as_mut() {
            Some(screen) => {
                screen.select_next(now);
            }
            None if !self.screens.is_empty() => {
                self.menu_index = (self.menu_index + 1) % self.screens.len();
            }
            None => {}
        }
    }

    pub fn select(&mut self) {
        if self.screen.is_none() {
            self.open_screen(self.menu_index);
        }
    }

    /// Number keys pick a tab on a screen, or an entry in the menu
    pub fn jump_to(&mut self, index: usize, now: Instant) {
        match self.screen.as_mut() {
            Some(screen) => {
                screen.select_index(index, now);
            }
            None => self.open_screen(index),
        }
    }

    pub fn pointer(&mut self, event: PointerEvent, now: Instant) {
        match self.screen.as_mut() {
            Some(screen) => {
                let outcome = screen.handle_pointer(event, now);
                debug!(?event, ?outcome, "pointer");
            }
            None => {
                if let PointerEvent::Down(pos) = event {
                    if let Some(index) = self.menu_row_at(pos) {
                        self.open_screen(index);
                    }
                }
            }
        }
    }

    fn menu_row_at(&self, position: Position) -> Option<usize> {
        self.menu_rows.iter().position(|row| row.contains(position))
    }

    /// Focus lost: drop any gesture without touching the selection
    pub fn cancel_gesture(&mut self) {
        if let Some(screen) = self.screen.as_mut() {
            screen.bar.cancel();
        }
    }

    /// Geometry is stale until the next frame is drawn
    pub fn resize(&mut self) {
        if let Some(screen) = self.screen.as_mut() {
            screen.bar.cancel();
            screen.bar.invalidate_layout();
        }
        self.menu_rows.clear();
    }

    pub fn is_dragging(&self) -> bool {
        self.screen.as_ref().map(|s| s.bar.is_dragging()).unwrap_or(false)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.screen.as_ref().map(|s| s.is_animating(now)).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_components::PageTransition;

    fn app() -> App {
        let config = AppConfig::default();
        let validated = ValidatedConfig::fallback(&config);
        App::new(config, validated)
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut app = app();
        let now = Instant::now();
        app.previous(now);
        assert_eq!(app.menu_index, 1);
        app.next(now);
        assert_eq!(app.menu_index, 0);
    }

    #[test]
    fn test_screen_opens_fresh_each_time() {
        let mut app = app();
        let now = Instant::now();
        app.select();
        app.next(now);
        assert_eq!(app.screen.as_ref().unwrap().active, Tab::Search);

        app.back();
        assert!(app.screen.is_none());
        app.open_screen(0);
        let screen = app.screen.as_ref().unwrap();
        assert_eq!(screen.active, Tab::Home);
        assert!(!screen.bar.interaction().geometry().is_measured());
    }

    #[test]
    fn test_keyboard_selection_moves_pages() {
        let mut app = app();
        let now = Instant::now();
        app.open_screen(1);
        app.jump_to(3, now);
        let screen = app.screen.as_ref().unwrap();
        assert_eq!(screen.active, Tab::Settings);
        assert_eq!(screen.pages.current(), Tab::Settings);
        assert!(screen.pages.is_animating(now));
    }

    #[test]
    fn test_instant_page_transition() {
        let config = AppConfig::default();
        let mut validated = ValidatedConfig::fallback(&config);
        validated.screens[0].tab_bar.page_transition = PageTransition::Instant;
        let mut app = App::new(config, validated);
        let now = Instant::now();
        app.open_screen(0);
        app.next(now);
        assert!(!app.screen.as_ref().unwrap().pages.is_animating(now));
    }

    #[test]
    fn test_menu_click_opens_screen() {
        let mut app = app();
        app.menu_rows = vec![Rect::new(0, 5, 20, 1), Rect::new(0, 6, 20, 1)];
        app.pointer(PointerEvent::Down(Position::new(3, 6)), Instant::now());
        assert_eq!(app.menu_index, 1);
        assert_eq!(app.screen.as_ref().unwrap().title, "Floating");
    }

    #[test]
    fn test_back_from_menu_quits() {
        let mut app = app();
        app.back();
        assert!(app.should_quit);
    }
}
