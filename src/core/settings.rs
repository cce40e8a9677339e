//! Dashboard settings persisted in localStorage.
//!
//! The stored value is the JSON form of [`Settings`]; missing or corrupt
//! entries fall back to defaults field by field.

use crate::config::SETTINGS_KEY;
use crate::core::error::StorageError;
use crate::models::Settings;
use crate::utils::dom;

/// Parse stored settings, falling back to defaults.
pub fn parse_settings(raw: Option<&str>) -> Settings {
    raw.and_then(|json| match serde_json::from_str(json) {
        Ok(settings) => Some(settings),
        Err(err) => {
            log::warn!("ignoring corrupt settings: {}", err);
            None
        }
    })
    .unwrap_or_default()
}

/// Load settings from localStorage.
pub fn load_settings() -> Settings {
    let raw = dom::local_storage().and_then(|s| s.get_item(SETTINGS_KEY).ok().flatten());
    parse_settings(raw.as_deref())
}

/// Save settings to localStorage.
pub fn save_settings(settings: &Settings) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
    let json = serde_json::to_string(settings).map_err(|_| StorageError::SerializationFailed)?;
    storage
        .set_item(SETTINGS_KEY, &json)
        .map_err(|_| StorageError::SaveFailed)
}
