//! Centralized application state for the thresholds host.
//!
//! Composes the editor with the host's own view of the thresholds. The
//! editor and the host state are separate fields so the editor's commit
//! callback can borrow the host mutably while the editor renders.

use crate::state::{HostState, ThemeState};
use thresholds::ThresholdsEditor;

/// Main application state.
pub struct AppState {
    /// The thresholds editor widget and its working state
    pub editor: ThresholdsEditor,

    /// What the host has received from the editor
    pub host: HostState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates the application state from loaded host data and preferences.
    pub fn new(host: HostState, theme: ThemeState) -> Self {
        // The editor takes its own copy; the host list only changes on commit
        let editor = ThresholdsEditor::new(host.thresholds().to_vec());
        Self {
            editor,
            host,
            theme,
            error_message: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(HostState::new(Vec::new(), None, 0.0), ThemeState::default())
    }
}
