//! Status bar UI rendering
//!
//! Summarizes what the host has received from the editor.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Builds the status line text.
pub fn status_text(state: &AppState) -> String {
    let editing = if state.editor.state().is_editing() {
        " | Editing…"
    } else {
        ""
    };
    format!(
        "Editor: {} thresholds | Host: {} thresholds | Commits: {}{}",
        state.editor.thresholds().len(),
        state.host.thresholds().len(),
        state.host.commit_count(),
        editing
    )
}

/// Renders the status panel at the bottom of the window
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(status_text(state)).strong());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_counts() {
        let state = AppState::default();
        assert_eq!(
            status_text(&state),
            "Editor: 1 thresholds | Host: 0 thresholds | Commits: 0"
        );
    }
}
