//! Header panel UI rendering
//!
//! Shows where the host data came from, the theme selector and any load
//! error.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Renders the application header.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Gauge Thresholds").strong());
        ui.separator();

        let source = state
            .host
            .source_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "no input file".to_string());
        ui.label(RichText::new(source).weak());

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            let manager = state.theme.theme_manager();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in manager.list_themes() {
                        let option =
                            ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                        if let Some(theme) = manager.get_theme(theme_name) {
                            option.on_hover_text(&theme.description);
                        }
                    }
                })
                .response
                .on_hover_text(&state.theme.current_theme().description);

            if old_theme != current_theme {
                tracing::debug!(theme = %current_theme, "theme changed");
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        let color = ui.visuals().error_fg_color;
        ui.colored_label(color, err);
    }
}
