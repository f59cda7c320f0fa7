// Core infrastructure module
// Application state, compiled defaults, tabs and events

pub mod app;
pub mod app_config;
pub mod events;
pub mod tabs;

pub use app::{App, TabScreen};
pub use app_config::AppConfig;
pub use events::{AppEvent, EventHandler};
pub use tabs::Tab;
