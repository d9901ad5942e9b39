//! Color string handling.
//!
//! Threshold colors travel as strings (whatever the host stored). The widget
//! needs `Color32` to paint, and the color picker hands back `#rrggbb`.

use egui::Color32;

/// Named colors accepted in threshold data, beyond plain hex.
const NAMED_COLORS: [(&str, Color32); 12] = [
    ("black", Color32::from_rgb(0, 0, 0)),
    ("white", Color32::from_rgb(255, 255, 255)),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("purple", Color32::from_rgb(128, 0, 128)),
    ("cyan", Color32::from_rgb(0, 255, 255)),
    ("magenta", Color32::from_rgb(255, 0, 255)),
    ("gray", Color32::from_rgb(128, 128, 128)),
    ("transparent", Color32::TRANSPARENT),
];

/// Parses a hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) or named color.
///
/// Returns `None` for anything else.
pub fn parse_color(color: &str) -> Option<Color32> {
    let color = color.trim();
    if color.starts_with('#') {
        return Color32::from_hex(color).ok();
    }
    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(color))
        .map(|(_, c)| *c)
}

/// Like [`parse_color`], with a fallback for unparseable strings.
pub fn color_or(color: &str, fallback: Color32) -> Color32 {
    parse_color(color).unwrap_or(fallback)
}

/// Formats a color as lowercase `#rrggbb`, dropping alpha.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
