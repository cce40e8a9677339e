use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SEARCH_THRESHOLD;
use crate::models::PreviewPrefs;

/// Per-browser dashboard preferences.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Never render media inline until the user clicks through.
    pub disable_media_preview: bool,
    /// Fuzzy-search threshold forwarded to the files API.
    pub search_threshold: f64,
    /// Ask before deleting files.
    pub warn_deletion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            disable_media_preview: false,
            search_threshold: DEFAULT_SEARCH_THRESHOLD,
            warn_deletion: true,
        }
    }
}

impl Settings {
    pub fn preview_prefs(&self) -> PreviewPrefs {
        PreviewPrefs {
            disable_media_preview: self.disable_media_preview,
        }
    }
}
