//! Preference persistence.
//!
//! Preferences are stored as one JSON document in eframe's storage. The
//! threshold list itself is never persisted; only UI choices are.

use serde::{Deserialize, Serialize};
use thresholds::theme::DEFAULT_THEME;

const PREFERENCES_KEY: &str = "preferences";

/// UI preferences remembered across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Name of the selected theme
    pub theme: String,
    /// Last gauge preview reading
    pub preview_value: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            preview_value: 42.0,
        }
    }
}

/// Coordinates loading and saving of preferences.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads preferences, falling back to defaults when absent or unreadable.
    pub fn load_preferences(storage: Option<&dyn eframe::Storage>) -> Preferences {
        Self::try_load_setting(storage, PREFERENCES_KEY).unwrap_or_default()
    }

    /// Saves preferences.
    pub fn save_preferences(storage: &mut dyn eframe::Storage, preferences: &Preferences) {
        Self::save_setting(storage, PREFERENCES_KEY, preferences);
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, %err, "ignoring unreadable setting");
                None
            }
        }
    }

    /// Saves a setting as JSON.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(err) => tracing::warn!(key, %err, "failed to serialize setting"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_preferences_round_trip() {
        let mut storage = MockStorage::default();
        let prefs = Preferences {
            theme: "Light".to_string(),
            preview_value: 73.5,
        };

        SettingsCoordinator::save_preferences(&mut storage, &prefs);
        let loaded = SettingsCoordinator::load_preferences(Some(&storage));
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_missing_storage_gives_defaults() {
        assert_eq!(SettingsCoordinator::load_preferences(None), Preferences::default());
    }

    #[test]
    fn test_corrupt_setting_gives_defaults() {
        let mut storage = MockStorage::default();
        storage.data.insert(PREFERENCES_KEY.to_string(), "{not json".to_string());
        assert_eq!(
            SettingsCoordinator::load_preferences(Some(&storage)),
            Preferences::default()
        );
    }

    #[test]
    fn test_partial_preferences_fill_defaults() {
        let mut storage = MockStorage::default();
        storage
            .data
            .insert(PREFERENCES_KEY.to_string(), r#"{"theme":"Light"}"#.to_string());
        let loaded = SettingsCoordinator::load_preferences(Some(&storage));
        assert_eq!(loaded.theme, "Light");
        assert_eq!(loaded.preview_value, Preferences::default().preview_value);
    }
}
