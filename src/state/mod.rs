//! State management modules for the thresholds host application.
//!
//! - Host state (committed thresholds, commit count, gauge preview reading)
//! - Theme state (theme manager, current theme)

mod host_state;
mod theme_state;

pub use host_state::{HostState, GAUGE_MAX, GAUGE_MIN};
pub use theme_state::ThemeState;
