//! Persistence of demo preferences.
//!
//! Preferences are stored as JSON strings in eframe's storage, one key per
//! setting. Missing or unparsable values fall back to defaults so a stale
//! storage file never prevents startup.

use serde::{Deserialize, Serialize};

const DEMO_SETTINGS_KEY: &str = "upwidgets_demo_settings";

/// User preferences carried across sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Last page size picked in the pager
    pub page_size: Option<u64>,
    /// Dark visuals instead of light
    pub dark_mode: bool,
}

/// Loads and saves serializable settings.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads the demo preferences, or defaults when none are stored.
    pub fn load_demo_settings(storage: Option<&dyn eframe::Storage>) -> DemoSettings {
        Self::try_load_setting(storage, DEMO_SETTINGS_KEY).unwrap_or_default()
    }

    pub fn save_demo_settings(storage: &mut dyn eframe::Storage, settings: &DemoSettings) {
        Self::save_setting(storage, DEMO_SETTINGS_KEY, settings);
    }

    /// Serializes `value` under `key` and flushes.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => log::warn!("failed to serialize setting '{}': {}", key, err),
        }
    }

    /// Loads `key`, returning None if it is missing or does not parse.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("ignoring stored setting '{}': {}", key, err);
                None
            }
        }
    }
}
