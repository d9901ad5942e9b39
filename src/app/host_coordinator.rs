//! Host-side workflows: loading the initial thresholds and receiving
//! commits from the editor.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use thresholds::{thresholds_from_json, Threshold};

use crate::state::HostState;

/// Coordinates the host's side of the editor contract.
pub struct HostCoordinator;

impl HostCoordinator {
    /// Reads the initial threshold list from a JSON file.
    pub fn load_thresholds(path: &Path) -> Result<Vec<Threshold>> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read thresholds from {}", path.display()))?;
        let thresholds = thresholds_from_json(&json)
            .with_context(|| format!("invalid thresholds JSON in {}", path.display()))?;
        tracing::info!(count = thresholds.len(), path = %path.display(), "loaded host thresholds");
        Ok(thresholds)
    }

    /// Callback target for editor commits.
    pub fn on_thresholds_changed(host: &mut HostState, thresholds: &[Threshold]) {
        host.receive_commit(thresholds);
        tracing::info!(
            count = thresholds.len(),
            commit = host.commit_count(),
            "host received thresholds"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_thresholds_from_file() -> Result<()> {
        let path = env::temp_dir().join("thresholds_host_load.json");
        fs::write(
            &path,
            r##"[{"index": 1, "value": 80, "color": "#EAB839"},
                {"index": 0, "value": null, "color": "#7EB26D"}]"##,
        )?;

        let thresholds = HostCoordinator::load_thresholds(&path)?;
        assert_eq!(thresholds.len(), 2);
        assert_eq!(thresholds[0].value, 80.0);
        assert!(thresholds[1].is_base());

        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_load_errors_name_the_file() {
        let path = env::temp_dir().join("thresholds_host_missing.json");
        let _ = fs::remove_file(&path);

        let err = HostCoordinator::load_thresholds(&path).unwrap_err();
        assert!(format!("{err:#}").contains("thresholds_host_missing.json"));
    }

    #[test]
    fn test_invalid_json_is_reported() -> Result<()> {
        let path = env::temp_dir().join("thresholds_host_invalid.json");
        fs::write(&path, "[{\"index\": 0}]")?;

        let err = HostCoordinator::load_thresholds(&path).unwrap_err();
        assert!(err.to_string().contains("invalid thresholds JSON"));

        fs::remove_file(&path)?;
        Ok(())
    }
}
