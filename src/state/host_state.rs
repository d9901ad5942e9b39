//! Host-side threshold state.
//!
//! This is what the embedding application knows about thresholds: only the
//! lists the editor has committed, never its in-progress edits.

use std::path::PathBuf;
use thresholds::Threshold;

/// Lowest value shown on the gauge preview.
pub const GAUGE_MIN: f64 = 0.0;
/// Highest value shown on the gauge preview.
pub const GAUGE_MAX: f64 = 100.0;

/// State owned by the host of the thresholds editor.
///
/// Responsibilities:
/// - Holding the last committed threshold list
/// - Counting commits received from the editor
/// - Tracking the gauge preview reading
#[derive(Debug, Clone, Default)]
pub struct HostState {
    /// Last list received from the editor (or the initial host data)
    thresholds: Vec<Threshold>,
    /// File the initial thresholds came from, if any
    source_path: Option<PathBuf>,
    /// Number of commits received since startup
    commit_count: u64,
    /// Value the gauge preview needle points at
    preview_value: f64,
}

impl HostState {
    /// Creates host state around the initial threshold list.
    pub fn new(thresholds: Vec<Threshold>, source_path: Option<PathBuf>, preview_value: f64) -> Self {
        Self {
            thresholds,
            source_path,
            commit_count: 0,
            preview_value: preview_value.clamp(GAUGE_MIN, GAUGE_MAX),
        }
    }

    // ===== Queries =====

    pub fn thresholds(&self) -> &[Threshold] {
        &self.thresholds
    }

    pub fn source_path(&self) -> Option<&PathBuf> {
        self.source_path.as_ref()
    }

    pub fn commit_count(&self) -> u64 {
        self.commit_count
    }

    pub fn preview_value(&self) -> f64 {
        self.preview_value
    }

    // ===== Mutations =====

    /// Replaces the host's list with a freshly committed one.
    pub fn receive_commit(&mut self, thresholds: &[Threshold]) {
        self.thresholds = thresholds.to_vec();
        self.commit_count += 1;
    }

    /// Mutable access for the preview slider.
    pub fn preview_value_mut(&mut self) -> &mut f64 {
        &mut self.preview_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thresholds::ThresholdId;

    #[test]
    fn test_receive_commit_replaces_list() {
        let mut host = HostState::new(Vec::new(), None, 30.0);
        let list = vec![Threshold::new(ThresholdId(0), 0, f64::NEG_INFINITY, "green")];

        host.receive_commit(&list);
        host.receive_commit(&list);

        assert_eq!(host.thresholds(), list.as_slice());
        assert_eq!(host.commit_count(), 2);
    }

    #[test]
    fn test_preview_value_is_clamped() {
        assert_eq!(HostState::new(Vec::new(), None, 250.0).preview_value(), GAUGE_MAX);
        assert_eq!(HostState::new(Vec::new(), None, -5.0).preview_value(), GAUGE_MIN);
    }
}
