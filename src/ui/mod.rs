//! UI panel rendering for the thresholds host
//!
//! - Header panel (input source, theme selector, errors)
//! - Gauge panel (preview colored by the committed thresholds)
//! - Status bar (editor and host summaries)
//! - Panel manager (panel orchestration and layout)

pub mod gauge_panel;
pub mod header;
pub mod panel_manager;
pub mod status_bar;
