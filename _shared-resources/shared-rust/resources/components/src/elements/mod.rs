// GUI Elements module
// Visual components that render UI elements

pub mod base_layout;
pub mod bottom_bar;
pub mod floating_bar;
pub mod indicator;
pub mod tab_bar;

pub use base_layout::*;
pub use bottom_bar::BottomBar;
pub use floating_bar::FloatingBar;
pub use indicator::IndicatorAnimation;
pub use tab_bar::*;
