//! Color swatch with a popup chooser.
//!
//! Threshold colors are plain strings; this converts to `Color32` for
//! egui's picker and back to `#rrggbb` when the user picks something.

use egui::color_picker::{color_edit_button_srgba, Alpha};
use egui::{Color32, Ui};

use crate::color::{parse_color, to_hex};

/// Swatch shown for color strings that do not parse.
const UNKNOWN_COLOR: Color32 = Color32::GRAY;

/// Shows a swatch for `color`; returns the newly picked color, if any.
pub fn color_swatch(ui: &mut Ui, color: &str) -> Option<String> {
    let mut current = parse_color(color).unwrap_or(UNKNOWN_COLOR);
    let response = color_edit_button_srgba(ui, &mut current, Alpha::Opaque);
    response.changed().then(|| to_hex(current))
}
