//! Panel orchestration and layout management.
//!
//! Lays out the header, status bar, the thresholds editor and the gauge
//! preview, and routes editor commits to the host.

use crate::app::{AppState, HostCoordinator};
use crate::ui::{gauge_panel, header, status_bar};

/// Width of the side panel holding the editor.
const EDITOR_PANEL_WIDTH: f32 = 320.0;

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) {
        let theme_colors = state.theme.current_theme().colors.clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header::render_header(ui, state);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let editor_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(theme_colors.group_background);

        egui::SidePanel::left("editor_panel")
            .default_width(EDITOR_PANEL_WIDTH)
            .resizable(true)
            .frame(editor_frame)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let host = &mut state.host;
                    state.editor.ui(ui, |thresholds| {
                        HostCoordinator::on_thresholds_changed(host, thresholds);
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Gauge Preview");
            ui.separator();
            gauge_panel::render_gauge_panel(ui, &mut state.host, &theme_colors);
        });
    }
}
