// Button Geometry (layout probe storage)
// Records the last-measured rectangle of every tab button for pointer hit-testing
//
// Usage:
//   let mut geometry = ButtonGeometry::new(4);
//   geometry.record(0, Rect::new(0, 0, 10, 3));
//   // Later, on pointer input...
//   if let Some(index) = geometry.hit_test(Position::new(4, 1)) {
//       println!("Pointer is over button {}", index);
//   }

use ratatui::layout::{Position, Rect};

/// Metrics for a measured rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectMetrics {
    /// Top-left X coordinate
    pub x: u16,
    /// Top-left Y coordinate
    pub y: u16,
    /// Width of the rectangle
    pub width: u16,
    /// Height of the rectangle
    pub height: u16,
}

impl RectMetrics {
    /// Zero-area rectangle, used for buttons that have not been laid out yet
    pub const ZERO: Self = Self { x: 0, y: 0, width: 0, height: 0 };

    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// True when the rectangle covers no cells
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point lies within this rectangle
    /// Zero-area rectangles never contain anything
    pub fn contains(&self, position: Position) -> bool {
        if self.is_empty() {
            return false;
        }
        // Widen to u32 so rectangles touching the u16 edge don't overflow
        let (px, py) = (u32::from(position.x), u32::from(position.y));
        let (x, y) = (u32::from(self.x), u32::from(self.y));
        px >= x && px < x + u32::from(self.width) && py >= y && py < y + u32::from(self.height)
    }
}

impl From<Rect> for RectMetrics {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl From<RectMetrics> for Rect {
    fn from(metrics: RectMetrics) -> Self {
        Self {
            x: metrics.x,
            y: metrics.y,
            width: metrics.width,
            height: metrics.height,
        }
    }
}

/// Last-measured rectangle of each tab button, indexed by tab ordinal
///
/// Owned by a single tab bar instance. Entries start out zero-area so that
/// hit-testing before the first layout pass never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonGeometry {
    rects: Vec<RectMetrics>,
}

impl ButtonGeometry {
    /// Create geometry storage for `count` buttons, all unmeasured
    pub fn new(count: usize) -> Self {
        Self {
            rects: vec![RectMetrics::ZERO; count],
        }
    }

    /// Number of button slots
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Overwrite the rectangle recorded for one button
    /// Returns false if the index is outside the fixed button set
    pub fn record(&mut self, index: usize, rect: impl Into<RectMetrics>) -> bool {
        match self.rects.get_mut(index) {
            Some(slot) => {
                *slot = rect.into();
                true
            }
            None => false,
        }
    }

    /// Record a whole layout pass, in ordinal order
    /// Slots without a rectangle in `rects` are reset to zero-area
    pub fn record_layout(&mut self, rects: &[Rect]) {
        for (idx, slot) in self.rects.iter_mut().enumerate() {
            *slot = rects.get(idx).copied().map(RectMetrics::from).unwrap_or(RectMetrics::ZERO);
        }
    }

    /// Last-measured rectangle for a button
    pub fn get(&self, index: usize) -> Option<RectMetrics> {
        self.rects.get(index).copied()
    }

    /// Index of the first button (in ordinal order) whose rectangle contains the point
    pub fn hit_test(&self, position: Position) -> Option<usize> {
        self.rects.iter().position(|rect| rect.contains(position))
    }

    /// True once at least one button has a non-zero rectangle
    pub fn is_measured(&self) -> bool {
        self.rects.iter().any(|rect| !rect.is_empty())
    }

    /// Forget every measurement (e.g. the terminal was resized)
    pub fn invalidate(&mut self) {
        self.rects.fill(RectMetrics::ZERO);
    }
}
