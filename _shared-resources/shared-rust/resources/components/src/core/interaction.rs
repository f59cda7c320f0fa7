// Tab Interaction State Machine
// Drag tracking and selection committing shared by every tab bar variant
//
// States (per bar instance):
//   Idle                      - no gesture in progress
//   Pressed { tab }           - press on a button that cannot start a drag; resolves as a tap
//   Dragging { origin, hover } - press on the draggable button; pointer moves update `hover`
//
// The committed active tab is owned by the caller and passed in as `&mut T`.
// It is only written on release, tap, or keyboard selection.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

use super::geometry::ButtonGeometry;
use super::tab_item::TabItem;
use super::transition::{Transition, TransitionSet};

/// Single-pointer input in the bar's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(Position),
    Move(Position),
    Up(Position),
}

impl PointerEvent {
    /// Position the event happened at
    pub fn position(&self) -> Position {
        match *self {
            PointerEvent::Down(pos) | PointerEvent::Move(pos) | PointerEvent::Up(pos) => pos,
        }
    }

    /// Translate a terminal mouse event (left button only)
    pub fn from_mouse(event: &MouseEvent) -> Option<Self> {
        let pos = Position::new(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down(pos)),
            MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Move(pos)),
            MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up(pos)),
            _ => None,
        }
    }
}

/// Gesture state of one tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState<T> {
    Idle,
    /// Press landed on a button that does not arm dragging
    Pressed { tab: T },
    /// Drag armed by a press on `origin`; `hover` is the uncommitted candidate
    Dragging { origin: T, hover: Option<T> },
}

/// Outcome of feeding one input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction<T> {
    /// Input had no effect
    Ignored,
    /// Press recorded as a pending tap
    Pressed(T),
    /// Press armed a drag
    Armed(T),
    /// Hover tab changed during a drag
    Hovered { tab: T, transition: Transition },
    /// Active tab changed (outbound change notification)
    Committed { from: T, to: T, transition: Transition },
    /// Selection resolved to the already-active tab
    Unchanged(T),
    /// Gesture abandoned without touching the active tab
    Cancelled,
}

impl<T: Copy> Interaction<T> {
    /// The newly committed tab, if this outcome changed the active tab
    pub fn committed(&self) -> Option<T> {
        match *self {
            Interaction::Committed { to, .. } => Some(to),
            _ => None,
        }
    }
}

/// Drag tracker and selection committer for one tab bar
#[derive(Debug, Clone)]
pub struct TabInteraction<T: TabItem> {
    geometry: ButtonGeometry,
    state: DragState<T>,
    drag_from_any_tab: bool,
    transitions: TransitionSet,
}

impl<T: TabItem> TabInteraction<T> {
    /// Create a tracker with unmeasured geometry for every tab in `T::ALL`
    pub fn new(transitions: TransitionSet) -> Self {
        Self {
            geometry: ButtonGeometry::new(T::count()),
            state: DragState::Idle,
            drag_from_any_tab: false,
            transitions,
        }
    }

    /// Allow a drag to start from any button instead of only the active one
    pub fn with_drag_from_any_tab(mut self, enabled: bool) -> Self {
        self.drag_from_any_tab = enabled;
        self
    }

    pub fn transitions(&self) -> TransitionSet {
        self.transitions
    }

    pub fn state(&self) -> DragState<T> {
        self.state
    }

    pub fn geometry(&self) -> &ButtonGeometry {
        &self.geometry
    }

    /// Layout probe entry point: record this frame's button rectangles (ordinal order)
    pub fn record_layout(&mut self, buttons: &[Rect]) {
        self.geometry.record_layout(buttons);
    }

    /// Forget measured geometry until the next layout pass
    pub fn invalidate_layout(&mut self) {
        self.geometry.invalidate();
    }

    /// Uncommitted candidate tab while dragging
    pub fn hover(&self) -> Option<T> {
        match self.state {
            DragState::Dragging { hover, .. } => hover,
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The tab the bar should draw as selected right now
    pub fn visual_active(&self, active: T) -> T {
        self.hover().unwrap_or(active)
    }

    /// Tab whose button contains the position, if any
    pub fn tab_at(&self, position: Position) -> Option<T> {
        self.geometry.hit_test(position).and_then(T::from_index)
    }

    /// Feed one pointer event through the state machine
    pub fn handle_pointer(&mut self, event: PointerEvent, active: &mut T) -> Interaction<T> {
        match event {
            PointerEvent::Down(pos) => self.pointer_down(pos, *active),
            PointerEvent::Move(pos) => self.pointer_move(pos),
            PointerEvent::Up(pos) => self.pointer_up(pos, active),
        }
    }

    fn pointer_down(&mut self, pos: Position, active: T) -> Interaction<T> {
        if self.state != DragState::Idle {
            // The release of the previous gesture was lost (e.g. outside the terminal)
            debug!(state = ?self.state, "discarding stale gesture on new press");
            self.state = DragState::Idle;
        }

        let Some(tab) = self.tab_at(pos) else {
            return Interaction::Ignored;
        };

        if tab == active || self.drag_from_any_tab {
            debug!(tab = tab.id(), "drag armed");
            self.state = DragState::Dragging { origin: tab, hover: None };
            Interaction::Armed(tab)
        } else {
            self.state = DragState::Pressed { tab };
            Interaction::Pressed(tab)
        }
    }

    fn pointer_move(&mut self, pos: Position) -> Interaction<T> {
        let DragState::Dragging { origin, hover } = self.state else {
            return Interaction::Ignored;
        };

        // Outside every button: keep the last hover rather than flicker back
        let Some(tab) = self.tab_at(pos) else {
            return Interaction::Ignored;
        };

        if hover == Some(tab) {
            return Interaction::Ignored;
        }

        debug!(tab = tab.id(), "hover changed");
        self.state = DragState::Dragging { origin, hover: Some(tab) };
        Interaction::Hovered {
            tab,
            transition: self.transitions.hover,
        }
    }

    fn pointer_up(&mut self, pos: Position, active: &mut T) -> Interaction<T> {
        let state = std::mem::replace(&mut self.state, DragState::Idle);
        match state {
            DragState::Idle => Interaction::Ignored,
            DragState::Pressed { tab } => {
                if self.tab_at(pos) == Some(tab) {
                    Self::commit(active, tab, self.transitions.tap)
                } else {
                    Interaction::Cancelled
                }
            }
            DragState::Dragging { origin, hover } => match hover {
                // The indicator already sits on the hover tab, so the commit itself is not animated
                Some(tab) => Self::commit(active, tab, Transition::INSTANT),
                // Press and release on the origin without a resolved hover is a tap on it
                None if self.tab_at(pos) == Some(origin) => {
                    Self::commit(active, origin, self.transitions.tap)
                }
                None => Interaction::Unchanged(*active),
            },
        }
    }

    /// Direct selection path (tap or programmatic); always enabled
    pub fn tap(&mut self, tab: T, active: &mut T) -> Interaction<T> {
        self.state = DragState::Idle;
        Self::commit(active, tab, self.transitions.tap)
    }

    /// Select the next tab in ordinal order, wrapping around
    pub fn select_next(&mut self, active: &mut T) -> Interaction<T> {
        let next = active.next();
        self.tap(next, active)
    }

    /// Select the previous tab in ordinal order, wrapping around
    pub fn select_previous(&mut self, active: &mut T) -> Interaction<T> {
        let previous = active.previous();
        self.tap(previous, active)
    }

    /// Select the tab at an ordinal; out-of-range indices are ignored
    pub fn select_index(&mut self, index: usize, active: &mut T) -> Interaction<T> {
        match T::from_index(index) {
            Some(tab) => self.tap(tab, active),
            None => Interaction::Ignored,
        }
    }

    /// Abandon any gesture in progress; the active tab is untouched
    pub fn cancel(&mut self) -> Interaction<T> {
        if self.state == DragState::Idle {
            return Interaction::Ignored;
        }
        debug!(state = ?self.state, "gesture cancelled");
        self.state = DragState::Idle;
        Interaction::Cancelled
    }

    fn commit(active: &mut T, to: T, transition: Transition) -> Interaction<T> {
        let from = *active;
        if from == to {
            return Interaction::Unchanged(to);
        }
        *active = to;
        info!(from = from.id(), to = to.id(), "active tab committed");
        Interaction::Committed { from, to, transition }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tab_item::test_tabs::DemoTab;

    /// Tracker laid out as four 100x70 buttons in a row
    fn tracker() -> TabInteraction<DemoTab> {
        let mut interaction = TabInteraction::new(TransitionSet::default());
        interaction.record_layout(&[
            Rect::new(0, 0, 100, 70),
            Rect::new(100, 0, 100, 70),
            Rect::new(200, 0, 100, 70),
            Rect::new(300, 0, 100, 70),
        ]);
        interaction
    }

    fn at(x: u16, y: u16) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_drag_from_active_tab_commits_on_release() {
        let mut interaction = tracker();
        let mut active = DemoTab::Home;

        assert_eq!(
            interaction.handle_pointer(PointerEvent::Down(at(50, 35)), &mut active),
            Interaction::Armed(DemoTab::Home)
        );
        let hovered = interaction.handle_pointer(PointerEvent::Move(at(250, 35)), &mut active);
        assert_eq!(
            hovered,
            Interaction::Hovered { tab: DemoTab::Notifications, transition: Transition::hover() }
        );
        assert_eq!(interaction.hover(), Some(DemoTab::Notifications));
        // Not committed until release
        assert_eq!(active, DemoTab::Home);
        assert_eq!(interaction.visual_active(active), DemoTab::Notifications);

        let released = interaction.handle_pointer(PointerEvent::Up(at(250, 35)), &mut active);
        assert_eq!(released.committed(), Some(DemoTab::Notifications));
        assert_eq!(active, DemoTab::Notifications);
        assert_eq!(interaction.hover(), None);
        assert_eq!(interaction.state(), DragState::Idle);
    }

    #[test]
    fn test_move_outside_buttons_keeps_last_hover() {
        let mut interaction = tracker();
        let mut active = DemoTab::Home;
        interaction.handle_pointer(PointerEvent::Down(at(50, 35)), &mut active);
        interaction.handle_pointer(PointerEvent::Move(at(150, 35)), &mut active);

        let outcome = interaction.handle_pointer(PointerEvent::Move(at(150, 200)), &mut active);
        assert_eq!(outcome, Interaction::Ignored);
        assert_eq!(interaction.hover(), Some(DemoTab::Search));

        // Released off the bar: hover still wins
        interaction.handle_pointer(PointerEvent::Up(at(500, 500)), &mut active);
        assert_eq!(active, DemoTab::Search);
        assert_eq!(interaction.hover(), None);
    }

    #[test]
    fn test_drag_without_hover_leaves_active_unchanged() {
        let mut interaction = tracker();
        let mut active = DemoTab::Search;
        interaction.handle_pointer(PointerEvent::Down(at(150, 35)), &mut active);
        interaction.handle_pointer(PointerEvent::Move(at(150, 300)), &mut active);
        interaction.handle_pointer(PointerEvent::Move(at(900, 300)), &mut active);
        assert_eq!(interaction.hover(), None);

        let outcome = interaction.handle_pointer(PointerEvent::Up(at(900, 300)), &mut active);
        assert_eq!(outcome, Interaction::Unchanged(DemoTab::Search));
        assert_eq!(active, DemoTab::Search);
        assert_eq!(interaction.hover(), None);
    }

    #[test]
    fn test_press_on_inactive_tab_does_not_arm_drag() {
        let mut interaction = tracker();
        let mut active = DemoTab::Home;
        assert_eq!(
            interaction.handle_pointer(PointerEvent::Down(at(150, 35)), &mut active),
            Interaction::Pressed(DemoTab::Search)
        );
        let outcome = interaction.handle_pointer(PointerEvent::Move(at(250, 35)), &mut active);
        assert_eq!(outcome, Interaction::Ignored);
        assert_eq!(interaction.hover(), None);
        assert!(!interaction.is_dragging());
    }

    #[test]
    fn test_tap_on_other_tab_selects_without_hover() {
        let mut interaction = tracker();
        let mut active = DemoTab::Home;
        interaction.handle_pointer(PointerEvent::Down(at(350, 10)), &mut active);
        assert_eq!(interaction.hover(), None);

        let outcome = interaction.handle_pointer(PointerEvent::Up(at(360, 12)), &mut active);
        assert_eq!(
            outcome,
            Interaction::Committed {
                from: DemoTab::Home,
                to: DemoTab::Settings,
                transition: Transition::snappy(),
            }
        );
        assert_eq!(active, DemoTab::Settings);
        assert_eq!(interaction.hover(), None);
    }

    #[test]
    fn test_press_released_on_other_button_is_dropped() {
        let mut interaction = tracker();
        let mut active = DemoTab::Home;
        interaction.handle_pointer(PointerEvent::Down(at(150, 10)), &mut active);
        let outcome = interaction.handle_pointer(PointerEvent::Up(at(250, 10)), &mut active);
        assert_eq!(outcome, Interaction::Cancelled);
        assert_eq!(active, DemoTab::Home);
    }

    #[test]
    fn test_selecting_active_tab_is_a_no_op() {
        let mut interaction = tracker();
        let mut active = DemoTab::Search;

        // Direct tap
        assert_eq!(interaction.tap(DemoTab::Search, &mut active), Interaction::Unchanged(DemoTab::Search));

        // Drag that resolves back onto the active tab
        interaction.handle_pointer(PointerEvent::Down(at(150, 35)), &mut active);
        interaction.handle_pointer(PointerEvent::Move(at(250, 35)), &mut active);
        interaction.handle_pointer(PointerEvent::Move(at(160, 35)), &mut active);
        let outcome = interaction.handle_pointer(PointerEvent::Up(at(160, 35)), &mut active);
        assert_eq!(outcome, Interaction::Unchanged(DemoTab::Search));
        assert_eq!(outcome.committed(), None);
        assert_eq!(active, DemoTab::Search);
    }

    #[test]
    fn test_nothing_arms_before_first_layout() {
        let mut interaction: TabInteraction<DemoTab> = TabInteraction::new(TransitionSet::default());
        let mut active = DemoTab::Home;
        assert_eq!(
            interaction.handle_pointer(PointerEvent::Down(at(0, 0)), &mut active),
            Interaction::Ignored
        );
        assert_eq!(
            interaction.handle_pointer(PointerEvent::Up(at(0, 0)), &mut active),
            Interaction::Ignored
        );
        assert_eq!(active, DemoTab::Home);
    }

    #[test]
    fn test_drag_from_any_tab_when_enabled() {
        let mut interaction = tracker().with_drag_from_any_tab(true);
        let mut active = DemoTab::Home;
        assert_eq!(
            interaction.handle_pointer(PointerEvent::Down(at(250, 35)), &mut active),
            Interaction::Armed(DemoTab::Notifications)
        );
        interaction.handle_pointer(PointerEvent::Move(at(350, 35)), &mut active);
        interaction.handle_pointer(PointerEvent::Up(at(350, 35)), &mut active);
        assert_eq!(active, DemoTab::Settings);

        // Press and release without moving still behaves like a tap
        interaction.handle_pointer(PointerEvent::Down(at(150, 35)), &mut active);
        interaction.handle_pointer(PointerEvent::Up(at(150, 35)), &mut active);
        assert_eq!(active, DemoTab::Search);
    }

    #[test]
    fn test_cancel_keeps_active_and_clears_hover() {
        let mut interaction = tracker();
        let mut active = DemoTab::Home;
        interaction.handle_pointer(PointerEvent::Down(at(50, 35)), &mut active);
        interaction.handle_pointer(PointerEvent::Move(at(350, 35)), &mut active);
        assert_eq!(interaction.cancel(), Interaction::Cancelled);
        assert_eq!(interaction.hover(), None);
        assert_eq!(active, DemoTab::Home);
        // Release after cancel does nothing
        assert_eq!(
            interaction.handle_pointer(PointerEvent::Up(at(350, 35)), &mut active),
            Interaction::Ignored
        );
        assert_eq!(interaction.cancel(), Interaction::Ignored);
    }

    #[test]
    fn test_new_press_discards_stale_drag() {
        let mut interaction = tracker();
        let mut active = DemoTab::Home;
        interaction.handle_pointer(PointerEvent::Down(at(50, 35)), &mut active);
        interaction.handle_pointer(PointerEvent::Move(at(250, 35)), &mut active);
        // Release never arrived; next press starts over
        interaction.handle_pointer(PointerEvent::Down(at(350, 35)), &mut active);
        assert_eq!(interaction.hover(), None);
        assert_eq!(interaction.state(), DragState::Pressed { tab: DemoTab::Settings });
        assert_eq!(active, DemoTab::Home);
    }

    #[test]
    fn test_keyboard_selection_wraps() {
        let mut interaction = tracker();
        let mut active = DemoTab::Settings;
        assert_eq!(interaction.select_next(&mut active).committed(), Some(DemoTab::Home));
        assert_eq!(interaction.select_previous(&mut active).committed(), Some(DemoTab::Settings));
        assert_eq!(interaction.select_index(1, &mut active).committed(), Some(DemoTab::Search));
        assert_eq!(interaction.select_index(9, &mut active), Interaction::Ignored);
        assert_eq!(active, DemoTab::Search);
    }

    #[test]
    fn test_mouse_events_map_to_pointer_events() {
        use crossterm::event::KeyModifiers;

        let mouse = |kind| MouseEvent { kind, column: 7, row: 3, modifiers: KeyModifiers::NONE };
        assert_eq!(
            PointerEvent::from_mouse(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(PointerEvent::Down(at(7, 3)))
        );
        assert_eq!(
            PointerEvent::from_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left))),
            Some(PointerEvent::Move(at(7, 3)))
        );
        assert_eq!(
            PointerEvent::from_mouse(&mouse(MouseEventKind::Up(MouseButton::Left))),
            Some(PointerEvent::Up(at(7, 3)))
        );
        assert_eq!(PointerEvent::from_mouse(&mouse(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(PointerEvent::from_mouse(&mouse(MouseEventKind::Moved)), None);
    }
}
