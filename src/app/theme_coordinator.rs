//! Applies the selected theme to the egui context.

use crate::app::AppState;

/// Coordinates theme application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the current theme to the egui context.
    ///
    /// Called every frame so a theme switch takes effect immediately.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme = state.theme.current_theme();
        let visuals = state.theme.theme_manager().visuals_for(theme);
        ctx.set_visuals(visuals);
    }
}
