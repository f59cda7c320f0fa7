// Shared TUI components library
// Reusable components for all TUI applications

// Core infrastructure (tab items, geometry, interaction state machine)
pub mod core;
// GUI elements (visual components)
pub mod elements;
// Configuration-driven constructors
pub mod managers;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
// Note: ambiguous_glob_reexports warning is intentional - tab_bar exists in both elements and managers
// but refers to different things (the widget vs its YAML config), so disambiguation is expected
#[allow(ambiguous_glob_reexports)]
pub use crate::core::*;
#[allow(ambiguous_glob_reexports)]
pub use elements::*;
#[allow(ambiguous_glob_reexports)]
pub use managers::*;
pub use utilities::*;
