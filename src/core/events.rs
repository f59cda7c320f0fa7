// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use tui_components::PointerEvent;

/// Application events that can be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Cancel a drag, leave the current screen, or quit from the menu
    Back,

    /// Previous menu entry / previous tab
    Previous,

    /// Next menu entry / next tab
    Next,

    /// Open the highlighted menu entry
    Select,

    /// Jump straight to a tab (zero-based)
    JumpTo(usize),

    /// Left-button pointer input
    Pointer(PointerEvent),

    /// Abandon any gesture in progress (focus lost)
    Cancel,

    /// Terminal size changed
    Resize,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::FocusLost => AppEvent::Cancel,
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Navigation
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Char('k') => {
                AppEvent::Previous
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('l') | KeyCode::Char('j') => {
                AppEvent::Next
            }
            KeyCode::Char(c @ '1'..='9') => AppEvent::JumpTo(c as usize - '1' as usize),
            KeyCode::Enter | KeyCode::Char(' ') => AppEvent::Select,

            // Back / Escape
            KeyCode::Esc | KeyCode::Backspace => AppEvent::Back,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events (left button only)
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        PointerEvent::from_mouse(&mouse)
            .map(AppEvent::Pointer)
            .unwrap_or(AppEvent::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseButton, MouseEventKind};
    use ratatui::layout::Position;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_keys() {
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        assert_eq!(EventHandler::handle(key(KeyCode::Char('q'))), AppEvent::Quit);
        assert_eq!(EventHandler::handle(key(KeyCode::Left)), AppEvent::Previous);
        assert_eq!(EventHandler::handle(key(KeyCode::Tab)), AppEvent::Next);
        assert_eq!(EventHandler::handle(key(KeyCode::Char('3'))), AppEvent::JumpTo(2));
        assert_eq!(EventHandler::handle(key(KeyCode::Esc)), AppEvent::Back);
        assert_eq!(EventHandler::handle(key(KeyCode::Char('x'))), AppEvent::None);
    }

    #[test]
    fn test_left_button_maps_to_pointer() {
        assert_eq!(
            EventHandler::handle(mouse(MouseEventKind::Down(MouseButton::Left), 4, 9)),
            AppEvent::Pointer(PointerEvent::Down(Position::new(4, 9)))
        );
        assert_eq!(
            EventHandler::handle(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 9)),
            AppEvent::Pointer(PointerEvent::Move(Position::new(5, 9)))
        );
        assert_eq!(
            EventHandler::handle(mouse(MouseEventKind::Down(MouseButton::Right), 4, 9)),
            AppEvent::None
        );
        assert_eq!(EventHandler::handle(mouse(MouseEventKind::ScrollUp, 4, 9)), AppEvent::None);
    }

    #[test]
    fn test_window_events() {
        assert_eq!(EventHandler::handle(Event::FocusLost), AppEvent::Cancel);
        assert_eq!(EventHandler::handle(Event::Resize(80, 24)), AppEvent::Resize);
    }
}
