// Interactive Tab Bar Component
// One gesture-driven tab bar shared by every visual variant
//
// The bar owns its button geometry and drag state. The committed active tab is
// owned by the parent screen and passed in on every call:
//
//   let mut active = Tab::Home;
//   let mut bar = InteractiveTabBar::<Tab, _>::new(BottomBar::new(4), TransitionSet::default());
//   terminal.draw(|f| { let area = f.area(); bar.render(f, area, active, Instant::now()) })?;
//   if let Some(tab) = bar.handle_pointer(event, &mut active).committed() {
//       pages.show(tab.index(), ...);
//   }

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Color,
    Frame,
};

use crate::core::{Interaction, PointerEvent, RectMetrics, TabInteraction, TabItem, Transition, TransitionSet};
use crate::elements::indicator::IndicatorAnimation;

/// Colors shared by all tab bar renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBarPalette {
    /// Indicator fill and active label color
    pub accent: Color,
    /// Icon color on top of the indicator
    pub on_accent: Color,
    /// Inactive icon color
    pub foreground: Color,
    /// Inactive labels, borders and shadow
    pub muted: Color,
}

impl Default for TabBarPalette {
    fn default() -> Self {
        Self {
            accent: Color::Blue,
            on_accent: Color::White,
            foreground: Color::White,
            muted: Color::DarkGray,
        }
    }
}

/// Everything a renderer needs to draw one button
#[derive(Debug, Clone, Copy)]
pub struct ButtonView<'a> {
    pub area: Rect,
    pub label: &'a str,
    pub icon: &'a str,
    /// Drawn as selected (hover tab while dragging, otherwise the active tab)
    pub is_active: bool,
}

/// Rendering strategy for one tab bar variant
///
/// The interaction logic lives in [`InteractiveTabBar`]; implementations only
/// decide where things go and how they look.
pub trait TabButtonRenderer {
    /// Rectangle the bar occupies inside the screen area
    fn bar_area(&self, area: Rect) -> Rect;

    /// Area left for page content (the bar may overlay it)
    fn content_area(&self, area: Rect) -> Rect {
        area
    }

    /// Button rectangles inside `bar`, one per tab in ordinal order
    fn layout(&self, bar: Rect, count: usize) -> Vec<Rect>;

    /// Rectangle the indicator occupies when resting on `button`
    fn indicator_rect(&self, button: Rect) -> Rect;

    fn render_background(&self, f: &mut Frame, bar: Rect, palette: &TabBarPalette);

    fn render_indicator(&self, f: &mut Frame, rect: Rect, palette: &TabBarPalette);

    fn render_button(&self, f: &mut Frame, button: &ButtonView<'_>, palette: &TabBarPalette);
}

impl<R: TabButtonRenderer + ?Sized> TabButtonRenderer for Box<R> {
    fn bar_area(&self, area: Rect) -> Rect {
        (**self).bar_area(area)
    }

    fn content_area(&self, area: Rect) -> Rect {
        (**self).content_area(area)
    }

    fn layout(&self, bar: Rect, count: usize) -> Vec<Rect> {
        (**self).layout(bar, count)
    }

    fn indicator_rect(&self, button: Rect) -> Rect {
        (**self).indicator_rect(button)
    }

    fn render_background(&self, f: &mut Frame, bar: Rect, palette: &TabBarPalette) {
        (**self).render_background(f, bar, palette)
    }

    fn render_indicator(&self, f: &mut Frame, rect: Rect, palette: &TabBarPalette) {
        (**self).render_indicator(f, rect, palette)
    }

    fn render_button(&self, f: &mut Frame, button: &ButtonView<'_>, palette: &TabBarPalette) {
        (**self).render_button(f, button, palette)
    }
}

/// Split a row into `count` equal-width button columns
pub fn equal_columns(row: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || row.width == 0 || row.height == 0 {
        return Vec::new();
    }
    let count_u32 = count as u32;
    Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count_u32)))
        .split(row)
        .to_vec()
}

/// Gesture-driven tab bar parameterized by a rendering strategy
pub struct InteractiveTabBar<T: TabItem, R: TabButtonRenderer> {
    renderer: R,
    interaction: TabInteraction<T>,
    indicator: IndicatorAnimation,
    palette: TabBarPalette,
    /// Transition for the next indicator move, set by the latest interaction
    next_transition: Transition,
    bar_area: Rect,
}

impl<T: TabItem, R: TabButtonRenderer> InteractiveTabBar<T, R> {
    pub fn new(renderer: R, transitions: TransitionSet) -> Self {
        Self {
            renderer,
            interaction: TabInteraction::new(transitions),
            indicator: IndicatorAnimation::new(),
            palette: TabBarPalette::default(),
            next_transition: transitions.tap,
            bar_area: Rect::default(),
        }
    }

    pub fn with_palette(mut self, palette: TabBarPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_drag_from_any_tab(mut self, enabled: bool) -> Self {
        self.interaction = self.interaction.with_drag_from_any_tab(enabled);
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn palette(&self) -> &TabBarPalette {
        &self.palette
    }

    pub fn interaction(&self) -> &TabInteraction<T> {
        &self.interaction
    }

    /// Uncommitted candidate while dragging
    pub fn hover(&self) -> Option<T> {
        self.interaction.hover()
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    /// Area the bar occupied on the last render
    pub fn bar_area(&self) -> Rect {
        self.bar_area
    }

    /// Area left for page content within `area`
    pub fn content_area(&self, area: Rect) -> Rect {
        self.renderer.content_area(area)
    }

    /// Current indicator rectangle
    pub fn indicator_rect(&self, now: Instant) -> RectMetrics {
        self.indicator.sample(now)
    }

    /// True while the indicator is still sliding
    pub fn is_animating(&self, now: Instant) -> bool {
        self.indicator.is_animating(now)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent, active: &mut T) -> Interaction<T> {
        let outcome = self.interaction.handle_pointer(event, active);
        self.note(outcome);
        outcome
    }

    pub fn tap(&mut self, tab: T, active: &mut T) -> Interaction<T> {
        let outcome = self.interaction.tap(tab, active);
        self.note(outcome);
        outcome
    }

    pub fn select_next(&mut self, active: &mut T) -> Interaction<T> {
        let outcome = self.interaction.select_next(active);
        self.note(outcome);
        outcome
    }

    pub fn select_previous(&mut self, active: &mut T) -> Interaction<T> {
        let outcome = self.interaction.select_previous(active);
        self.note(outcome);
        outcome
    }

    pub fn select_index(&mut self, index: usize, active: &mut T) -> Interaction<T> {
        let outcome = self.interaction.select_index(index, active);
        self.note(outcome);
        outcome
    }

    pub fn cancel(&mut self) -> Interaction<T> {
        let outcome = self.interaction.cancel();
        self.note(outcome);
        outcome
    }

    /// Drop measured geometry (terminal resized); the indicator jumps on the next frame
    pub fn invalidate_layout(&mut self) {
        self.interaction.invalidate_layout();
        self.next_transition = Transition::INSTANT;
    }

    fn note(&mut self, outcome: Interaction<T>) {
        match outcome {
            Interaction::Hovered { transition, .. } | Interaction::Committed { transition, .. } => {
                self.next_transition = transition;
            }
            // Slide back to the committed tab
            Interaction::Cancelled => self.next_transition = self.interaction.transitions().hover,
            _ => {}
        }
    }

    /// Lay out, record geometry, and draw the bar
    pub fn render(&mut self, f: &mut Frame, area: Rect, active: T, now: Instant) {
        let bar = self.renderer.bar_area(area);
        self.bar_area = bar;
        if bar.is_empty() {
            self.interaction.invalidate_layout();
            return;
        }

        // Layout probe: geometry is committed before any event from this frame is hit-tested
        let buttons = self.renderer.layout(bar, T::count());
        self.interaction.record_layout(&buttons);

        self.renderer.render_background(f, bar, &self.palette);

        let visual = self.interaction.visual_active(active);
        if let Some(button) = buttons.get(visual.index()) {
            let target = RectMetrics::from(self.renderer.indicator_rect(*button));
            if self.indicator.retarget(target, self.next_transition, now) {
                self.next_transition = self.interaction.transitions().tap;
            }
            self.renderer.render_indicator(f, self.indicator.sample(now).into(), &self.palette);
        }

        for (tab, button) in T::ALL.iter().zip(buttons.iter()) {
            let view = ButtonView {
                area: *button,
                label: tab.label(),
                icon: tab.icon(),
                is_active: *tab == visual,
            };
            self.renderer.render_button(f, &view, &self.palette);
        }
    }
}
