// Transitions
// Duration-and-curve parameters handed to the rendering layer with each visible state change

use std::time::Duration;

/// Easing curve applied to linear progress
/// All curves are monotonic and end exactly at 1.0 (no overshoot)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    /// Gentle deceleration, used while dragging between tabs
    EaseOutCubic,
    /// Fast start with a short settle, used for taps
    EaseOutQuint,
}

impl Curve {
    /// Map linear progress in [0, 1] onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Curve::EaseOutQuint => 1.0 - (1.0 - t).powi(5),
        }
    }
}

/// How a visual change should be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub curve: Curve,
}

impl Transition {
    /// Jump straight to the end state
    pub const INSTANT: Self = Self {
        duration: Duration::ZERO,
        curve: Curve::Linear,
    };

    pub const fn new(duration: Duration, curve: Curve) -> Self {
        Self { duration, curve }
    }

    /// Indicator following the pointer during a drag
    pub const fn hover() -> Self {
        Self::new(Duration::from_millis(250), Curve::EaseOutCubic)
    }

    /// Direct selection (tap or keyboard)
    pub const fn snappy() -> Self {
        Self::new(Duration::from_millis(200), Curve::EaseOutQuint)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }

    /// Eased progress after `elapsed`, clamped to [0, 1]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.is_instant() || elapsed >= self.duration {
            return 1.0;
        }
        self.curve.apply(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }
}

/// The transitions a tab bar uses for its two kinds of change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSet {
    /// Hover tab changed during a drag
    pub hover: Transition,
    /// Active tab changed by tap or keyboard
    pub tap: Transition,
}

impl Default for TransitionSet {
    fn default() -> Self {
        Self {
            hover: Transition::hover(),
            tap: Transition::snappy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_hit_endpoints() {
        for curve in [Curve::Linear, Curve::EaseOutCubic, Curve::EaseOutQuint] {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
            // Out-of-range input is clamped
            assert_eq!(curve.apply(1.5), 1.0);
            assert_eq!(curve.apply(-0.5), 0.0);
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for curve in [Curve::EaseOutCubic, Curve::EaseOutQuint] {
            let mut last = 0.0;
            for step in 1..=20 {
                let value = curve.apply(step as f32 / 20.0);
                assert!(value >= last, "{:?} went backwards at step {}", curve, step);
                assert!(value <= 1.0);
                last = value;
            }
        }
    }

    #[test]
    fn test_progress_clamps_after_duration() {
        let transition = Transition::hover();
        assert_eq!(transition.progress(Duration::ZERO), 0.0);
        assert_eq!(transition.progress(Duration::from_millis(250)), 1.0);
        assert_eq!(transition.progress(Duration::from_secs(3)), 1.0);
        let halfway = transition.progress(Duration::from_millis(125));
        assert!(halfway > 0.5 && halfway < 1.0);
    }

    #[test]
    fn test_instant_is_always_complete() {
        assert!(Transition::INSTANT.is_instant());
        assert_eq!(Transition::INSTANT.progress(Duration::ZERO), 1.0);
        assert!(Transition::snappy().with_duration(Duration::ZERO).is_instant());
    }
}
