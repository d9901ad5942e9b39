//! Editable threshold rows.

use egui::{Align, Layout, RichText, Ui};

use crate::editor::{EditorState, Mutation};
use crate::threshold::{format_value, Threshold};
use crate::widget::color_picker::color_swatch;
use crate::widget::indicator;

/// Height of one row, shared with its indicator segment.
pub const ROW_HEIGHT: f32 = 28.0;
const VALUE_FIELD_WIDTH: f32 = 90.0;

/// Renders one threshold row, pushing any resulting mutations.
pub fn threshold_row(
    ui: &mut Ui,
    state: &EditorState,
    threshold: &Threshold,
    mutations: &mut Vec<Mutation>,
) {
    ui.horizontal(|ui| {
        ui.set_min_height(ROW_HEIGHT);

        if let Some(mutation) = indicator::threshold_segment(ui, threshold, ROW_HEIGHT) {
            mutations.push(mutation);
        }

        if let Some(color) = color_swatch(ui, &threshold.color) {
            mutations.push(Mutation::ChangeThresholdColor {
                id: threshold.id,
                color,
            });
        }

        // While editing, show the raw text rather than the parsed value
        let mut text = state
            .draft_text(threshold.id)
            .map(str::to_owned)
            .unwrap_or_else(|| format_value(threshold.value));
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .id_salt(("threshold_value", threshold.id.0))
                .desired_width(VALUE_FIELD_WIDTH),
        );
        if response.changed() {
            mutations.push(Mutation::ChangeThresholdValue {
                id: threshold.id,
                raw: text,
            });
        }
        if response.lost_focus() {
            mutations.push(Mutation::Blur);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let remove_color = ui.visuals().error_fg_color;
            let remove = ui
                .small_button(RichText::new("✖").color(remove_color))
                .on_hover_text("Remove threshold");
            if remove.clicked() {
                mutations.push(Mutation::RemoveThreshold { id: threshold.id });
            }
        });
    });
}

/// Renders the fixed base row.
pub fn base_row(ui: &mut Ui, state: &EditorState, mutations: &mut Vec<Mutation>) {
    ui.horizontal(|ui| {
        ui.set_min_height(ROW_HEIGHT);

        if let Some(mutation) = indicator::base_segment(ui, state.base_color(), ROW_HEIGHT) {
            mutations.push(mutation);
        }
        if let Some(color) = color_swatch(ui, state.base_color()) {
            mutations.push(Mutation::ChangeBaseColor { color });
        }
        ui.label(RichText::new("Base").weak());
    });
}
