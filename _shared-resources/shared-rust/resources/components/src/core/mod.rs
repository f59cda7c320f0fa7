// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod tab_item;
pub mod geometry;
pub mod transition;
pub mod interaction;

pub use tab_item::TabItem;
pub use geometry::{ButtonGeometry, RectMetrics};
pub use transition::{Curve, Transition, TransitionSet};
pub use interaction::{DragState, Interaction, PointerEvent, TabInteraction};
