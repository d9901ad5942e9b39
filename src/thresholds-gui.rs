//! Gauge Thresholds GUI Application
//!
//! Hosts the thresholds editor widget in an eframe window, the way a panel
//! options pane would:
//! - Editable threshold bands on the left, committed to the host on add,
//!   remove, recolor and value-field blur
//! - A gauge preview colored by whatever the host last received
//! - Theme selection with persistent preferences
//!
//! An optional first argument names a JSON file with the initial thresholds.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state, coordinators and logging setup
//! - `state/` - Host and theme state
//! - `presentation/` - Gauge segment computation
//! - `ui/` - Panel rendering

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod app;
mod presentation;
mod state;
mod ui;

use app::{AppState, HostCoordinator, Preferences, SettingsCoordinator, ThemeCoordinator};
use state::{HostState, ThemeState};
use ui::panel_manager::PanelManager;

/// Application entry point.
fn main() -> eframe::Result {
    app::logging::setup_tracing();

    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 560.0])
            .with_title("Gauge Thresholds"),
        ..Default::default()
    };

    eframe::run_native(
        "Gauge Thresholds",
        options,
        Box::new(move |cc| Ok(Box::new(ThresholdsApp::new(cc, initial_file)))),
    )
}

/// The host application around the thresholds editor.
struct ThresholdsApp {
    /// Centralized application state
    state: AppState,
}

impl ThresholdsApp {
    /// Creates the app, loading preferences from storage and the initial
    /// thresholds from `initial_file` if given.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let preferences = SettingsCoordinator::load_preferences(cc.storage);

        let mut error_message = None;
        let thresholds = match initial_file.as_deref().map(HostCoordinator::load_thresholds) {
            Some(Ok(thresholds)) => thresholds,
            Some(Err(err)) => {
                tracing::error!("{err:#}");
                error_message = Some(format!("{err:#}"));
                Vec::new()
            }
            None => Vec::new(),
        };

        let host = HostState::new(thresholds, initial_file, preferences.preview_value);
        let mut state = AppState::new(host, ThemeState::with_theme(preferences.theme));
        state.error_message = error_message;

        Self { state }
    }

    fn preferences(&self) -> Preferences {
        Preferences {
            theme: self.state.theme.current_theme_name().to_string(),
            preview_value: self.state.host.preview_value(),
        }
    }
}

impl eframe::App for ThresholdsApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_preferences(storage, &self.preferences());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);
        PanelManager::render_all_panels(ctx, &mut self.state);
    }
}
