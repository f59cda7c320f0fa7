// Active Tab Indicator Animation
// Slides the indicator rectangle between button positions

use std::time::Instant;

use crate::core::{RectMetrics, Transition};

/// Animated rectangle that moves from its current position to a target
///
/// Sampled with an explicit `Instant` so rendering and tests agree on time.
#[derive(Debug, Clone)]
pub struct IndicatorAnimation {
    from: RectMetrics,
    to: RectMetrics,
    started: Option<Instant>,
    transition: Transition,
}

impl Default for IndicatorAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorAnimation {
    pub fn new() -> Self {
        Self {
            from: RectMetrics::ZERO,
            to: RectMetrics::ZERO,
            started: None,
            transition: Transition::INSTANT,
        }
    }

    /// Where the indicator is heading
    pub fn target(&self) -> RectMetrics {
        self.to
    }

    /// Move towards a new target, starting from wherever the indicator is now
    /// Returns true if the target changed
    pub fn retarget(&mut self, target: RectMetrics, transition: Transition, now: Instant) -> bool {
        if target == self.to {
            return false;
        }

        // First placement (or an instant change) jumps without sliding in from the origin
        if self.to.is_empty() || transition.is_instant() {
            self.snap(target);
            return true;
        }

        self.from = self.sample(now);
        self.to = target;
        self.started = Some(now);
        self.transition = transition;
        true
    }

    /// Place the indicator at a target with no animation
    pub fn snap(&mut self, target: RectMetrics) {
        self.from = target;
        self.to = target;
        self.started = None;
        self.transition = Transition::INSTANT;
    }

    /// Indicator rectangle at `now`
    pub fn sample(&self, now: Instant) -> RectMetrics {
        let Some(started) = self.started else {
            return self.to;
        };
        let t = self.transition.progress(now.saturating_duration_since(started));
        RectMetrics {
            x: lerp(self.from.x, self.to.x, t),
            y: lerp(self.from.y, self.to.y, t),
            width: lerp(self.from.width, self.to.width, t),
            height: lerp(self.from.height, self.to.height, t),
        }
    }

    /// True while the indicator has not reached its target
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started
            .map(|started| now.saturating_duration_since(started) < self.transition.duration)
            .unwrap_or(false)
    }
}

fn lerp(from: u16, to: u16, t: f32) -> u16 {
    let value = f32::from(from) + (f32::from(to) - f32::from(from)) * t;
    value.round().clamp(0.0, f32::from(u16::MAX)) as u16
}
