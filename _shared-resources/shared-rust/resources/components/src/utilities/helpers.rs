// Helper utilities for TUI components
use ratatui::layout::Rect;
use ratatui::style::Color;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Dimming context - tracks whether content sits behind an uncommitted interaction
/// (e.g. page content while a tab drag is in progress)
pub struct DimmingContext {
    pub dimmed: bool,
}

impl DimmingContext {
    pub fn new(dimmed: bool) -> Self {
        Self { dimmed }
    }

    /// Get dimmed text color
    pub fn text_color(&self, is_active: bool) -> Color {
        if self.dimmed {
            hex_color(0x444444)  // Dimmed while dragging
        } else if is_active {
            hex_color(0xFFFFFF)  // White when focused
        } else {
            hex_color(0x777777)  // Grey when unfocused
        }
    }

    /// Get dimmed border color
    pub fn border_color(&self, is_active: bool) -> Color {
        if self.dimmed {
            hex_color(0x222222)
        } else if is_active {
            Color::White
        } else {
            hex_color(0x333333)
        }
    }
}

/// Parse a named or `#rrggbb` color; None for anything unrecognised
pub fn try_parse_color(color: &str) -> Option<Color> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() == 6 {
            return u32::from_str_radix(hex, 16).ok().map(hex_color);
        }
        return None;
    }

    let parsed = match color.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_yellow" | "darkyellow" => Color::Rgb(184, 134, 11),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_magenta" | "darkmagenta" => Color::Rgb(139, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        _ => return None,
    };
    Some(parsed)
}

/// Shift a rectangle horizontally and clip it to `bounds`
/// Returns an empty rect when nothing remains visible
pub fn shift_and_clip(rect: Rect, dx: i32, bounds: Rect) -> Rect {
    let x = i32::from(rect.x) + dx;
    let left = x.max(i32::from(bounds.x));
    let right = (x + i32::from(rect.width)).min(i32::from(bounds.right()));
    if right <= left {
        return Rect::new(bounds.x, rect.y, 0, 0);
    }
    Rect {
        x: left as u16,
        y: rect.y,
        width: (right - left) as u16,
        height: rect.height,
    }
}
