//! Theme support for the thresholds editor and its host window.
//!
//! Provides Light and Dark color schemes plus a manager that applies them to
//! egui visuals.
//!
//! # Examples
//!
//! ```
//! use thresholds::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! println!("Dark panel: {:?}", dark.colors.panel_background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when nothing else is selected.
pub const DEFAULT_THEME: &str = "Dark";

/// Color palette for the editor chrome (not the threshold colors themselves)
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub group_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Row remove button
    pub remove: Color32,
    // Gauge needle in the host preview
    pub needle: Color32,
}

/// A theme definition with metadata and colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub dark_mode: bool,
    pub colors: ThemeColors,
}

/// Lookup of the built-in themes by name
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a manager holding every built-in theme
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [light_theme(), dark_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self { themes }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Looks up a theme, falling back to the default one for unknown names
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .unwrap_or_else(|| unreachable!("default theme is always registered"))
    }

    /// Returns all theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Builds egui visuals for a theme
    pub fn visuals_for(&self, theme: &Theme) -> egui::Visuals {
        let mut visuals = if theme.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.error_fg_color = colors.remove;
        visuals
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with egui default colors".to_string(),
        dark_mode: false,
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),
            group_background: Color32::from_rgb(238, 238, 240),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),

            remove: Color32::from_rgb(200, 40, 40),
            needle: Color32::from_rgb(30, 30, 30),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default colors".to_string(),
        dark_mode: true,
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),
            group_background: Color32::from_rgb(30, 30, 32),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            remove: Color32::from_rgb(231, 76, 60),
            needle: Color32::from_rgb(240, 240, 240),
        },
    }
}
