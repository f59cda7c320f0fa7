// Interactive Tab Bar
// Terminal demo of a gesture-driven tab bar: drag across the bar, release to select

// IMPORTS ------------------>>

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;
use tui_components::validate_tab_items;

use interactive_tab_bar::{load_and_validate_config, logging, run_app, App, AppConfig, Tab};

//--------------------------------------------------------<<

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let defaults = AppConfig::default();

    // Load and validate configuration from YAML file (falls back to compiled defaults)
    let validated = load_and_validate_config(None, &defaults);
    logging::init(validated.log_file.as_deref())?;
    validated.report_warnings();

    validate_tab_items::<Tab>().context("Tab set cannot be drawn")?;

    let mouse_enabled = defaults.ui.mouse_enabled;
    let mut app = App::new(defaults, validated);
    info!(screens = app.screens.len(), mouse_enabled, "starting");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}
