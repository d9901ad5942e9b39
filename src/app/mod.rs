//! Application-level modules for the thresholds host.
//!
//! Centralized state plus the coordinators that load host data, persist
//! preferences, apply themes and set up logging.

mod app_state;
mod host_coordinator;
pub mod logging;
mod settings_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use host_coordinator::HostCoordinator;
pub use settings_coordinator::{Preferences, SettingsCoordinator};
pub use theme_coordinator::ThemeCoordinator;
