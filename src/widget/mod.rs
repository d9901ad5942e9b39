//! egui rendering of the thresholds editor.
//!
//! Rendering never changes state. It returns the mutations the user asked
//! for this frame, in order, and [`ThresholdsEditor::ui`] dispatches them.
//!
//! - `indicator` - clickable color strip for inserting thresholds
//! - `rows` - color swatch, value field and remove button per threshold
//! - `color_picker` - swatch with popup chooser
//! - `options_group` - titled frame around the whole editor

pub mod color_picker;
pub mod indicator;
pub mod options_group;
pub mod rows;

use egui::Ui;

use crate::editor::{EditorState, Mutation, Outcome, ThresholdsEditor};
use crate::palette::Palette;
use crate::threshold::Threshold;

/// Renders the editor for `state` and returns the requested mutations.
pub fn show(ui: &mut Ui, state: &EditorState) -> Vec<Mutation> {
    let mut mutations = Vec::new();

    options_group::options_group(ui, "Thresholds", |ui| {
        ui.spacing_mut().item_spacing.y = 0.0;
        for threshold in state.thresholds() {
            rows::threshold_row(ui, state, threshold, &mut mutations);
        }
        rows::base_row(ui, state, &mut mutations);
    });

    mutations
}

impl<P: Palette> ThresholdsEditor<P> {
    /// Renders the editor and dispatches whatever the user did.
    ///
    /// Returns true if at least one mutation committed this frame.
    pub fn ui<F>(&mut self, ui: &mut Ui, mut on_change: F) -> bool
    where
        F: FnMut(&[Threshold]),
    {
        let mutations = show(ui, self.state());
        let mut committed = false;
        for mutation in mutations {
            committed |= self.dispatch(mutation, &mut on_change) == Outcome::Committed;
        }
        committed
    }
}
