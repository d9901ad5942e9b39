//! Theme state management.
//!
//! Holds the theme manager and the currently selected theme name.

use thresholds::theme::DEFAULT_THEME;
use thresholds::{Theme, ThemeManager};

/// State related to visual theme.
pub struct ThemeState {
    theme_manager: ThemeManager,
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::with_theme(DEFAULT_THEME.to_string())
    }
}

impl ThemeState {
    /// Creates theme state with a specific theme; unknown names fall back to the default.
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.get_theme(&theme_name).is_some() {
            theme_name
        } else {
            DEFAULT_THEME.to_string()
        };
        Self {
            theme_manager,
            current_theme_name,
        }
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    pub fn current_theme(&self) -> &Theme {
        self.theme_manager.theme_or_default(&self.current_theme_name)
    }

    pub fn set_theme(&mut self, theme_name: String) {
        self.current_theme_name = theme_name;
    }
}
