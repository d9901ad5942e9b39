//! Color indicator strip.
//!
//! Each threshold gets one segment split into two click targets: the upper
//! half inserts a threshold above it, the lower half inserts at its own
//! index. The base segment requests position 0, which the editor ignores.

use egui::{vec2, Color32, Sense, Ui};

use crate::color::color_or;
use crate::editor::Mutation;
use crate::threshold::Threshold;

/// Width of the indicator strip.
pub const INDICATOR_WIDTH: f32 = 14.0;

/// Fill for colors that do not parse.
const FALLBACK_FILL: Color32 = Color32::GRAY;

/// Renders one threshold's segment.
pub fn threshold_segment(ui: &mut Ui, threshold: &Threshold, height: f32) -> Option<Mutation> {
    let fill = color_or(&threshold.color, FALLBACK_FILL);
    let mut clicked = None;

    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 0.0;

        let (upper, upper_response) =
            ui.allocate_exact_size(vec2(INDICATOR_WIDTH, height / 2.0), Sense::click());
        let (lower, lower_response) =
            ui.allocate_exact_size(vec2(INDICATOR_WIDTH, height / 2.0), Sense::click());

        let painter = ui.painter();
        painter.rect_filled(upper, 0.0, hover_tint(fill, upper_response.hovered()));
        painter.rect_filled(lower, 0.0, hover_tint(fill, lower_response.hovered()));

        if upper_response.on_hover_text("Add threshold above").clicked() {
            clicked = Some(Mutation::AddThreshold {
                at: threshold.index.saturating_add(1),
            });
        }
        if lower_response.on_hover_text("Add threshold").clicked() {
            clicked = Some(Mutation::AddThreshold {
                at: threshold.index,
            });
        }
    });

    clicked
}

/// Renders the base band's segment.
pub fn base_segment(ui: &mut Ui, base_color: &str, height: f32) -> Option<Mutation> {
    let fill = color_or(base_color, FALLBACK_FILL);
    let (rect, response) = ui.allocate_exact_size(vec2(INDICATOR_WIDTH, height), Sense::click());
    ui.painter().rect_filled(rect, 0.0, fill);

    response
        .clicked()
        .then_some(Mutation::AddThreshold { at: 0 })
}

fn hover_tint(color: Color32, hovered: bool) -> Color32 {
    if hovered {
        color.gamma_multiply(0.8)
    } else {
        color
    }
}
