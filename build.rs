// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const FRAME_INTERVAL_MS: u64 = {frame_interval_ms};
pub const IDLE_POLL_MS: u64 = {idle_poll_ms};
pub const HOVER_TRANSITION_MS: u64 = {hover_transition_ms};
pub const TAP_TRANSITION_MS: u64 = {tap_transition_ms};
pub const DRAG_FROM_ANY_TAB: bool = {drag_from_any_tab};
"#,
        mouse_enabled = config.mouse_enabled,
        frame_interval_ms = config.frame_interval_ms,
        idle_poll_ms = config.idle_poll_ms,
        hover_transition_ms = config.hover_transition_ms,
        tap_transition_ms = config.tap_transition_ms,
        drag_from_any_tab = config.drag_from_any_tab,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    mouse_enabled: bool,
    frame_interval_ms: u64,
    idle_poll_ms: u64,
    hover_transition_ms: u64,
    tap_transition_ms: u64,
    drag_from_any_tab: bool,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            frame_interval_ms: 16,
            idle_poll_ms: 250,
            hover_transition_ms: 250,
            tap_transition_ms: 200,
            drag_from_any_tab: false,
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    // Only the top-level `ui:` section feeds the compiled defaults
    let mut in_ui = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Any unindented key starts a new top-level section
        if !line.starts_with(' ') && !line.starts_with('\t') {
            in_ui = trimmed.starts_with("ui:");
            continue;
        }

        if !in_ui {
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            match key {
                "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                "frame_interval_ms" => config.frame_interval_ms = parse_ms(value, config.frame_interval_ms),
                "idle_poll_ms" => config.idle_poll_ms = parse_ms(value, config.idle_poll_ms),
                "hover_transition_ms" => config.hover_transition_ms = parse_ms(value, config.hover_transition_ms),
                "tap_transition_ms" => config.tap_transition_ms = parse_ms(value, config.tap_transition_ms),
                "drag_from_any_tab" => config.drag_from_any_tab = parse_bool(value),
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

/// Zero or unparsable durations keep the fallback
fn parse_ms(s: &str, fallback: u64) -> u64 {
    match s.trim_matches('"').parse::<u64>() {
        Ok(0) | Err(_) => fallback,
        Ok(ms) => ms,
    }
}
