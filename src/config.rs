//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use serde::{Deserialize, Serialize};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the dashboard header.
pub const APP_NAME: &str = "shareview";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Routes
// =============================================================================

/// Route serving raw file content.
pub const RAW_ROUTE: &str = "/raw";

/// Route serving the public view page.
pub const VIEW_ROUTE: &str = "/view";

/// Default route for "returned" file links when the server config has none.
pub const DEFAULT_FILES_ROUTE: &str = "/u";

/// Base path of the JSON API.
pub const API_BASE: &str = "/api";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Dashboard Configuration
// =============================================================================

/// Page sizes offered by the file table.
pub const PER_PAGE_OPTIONS: &[usize] = &[10, 20, 50];

/// Page size used when none has been chosen.
pub const DEFAULT_PER_PAGE: usize = 20;

/// localStorage key for persisted user settings.
pub const SETTINGS_KEY: &str = "settings";

/// Default fuzzy search threshold sent with table searches.
pub const DEFAULT_SEARCH_THRESHOLD: f64 = 0.1;

// =============================================================================
// Media Configuration
// =============================================================================

/// Maximum image height (px) for previews.
pub const IMAGE_MAX_HEIGHT: u32 = 400;

/// Player dimensions advertised in link-preview tags.
pub mod player {
    pub const WIDTH: u32 = 720;
    pub const HEIGHT: u32 = 480;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Server-side View Configuration
// =============================================================================

/// Server settings consulted while building a view page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    /// Always emit `https://` links regardless of request headers.
    pub return_https_urls: bool,
    /// Route prefix for "returned" links (e.g. `/u`).
    pub files_route: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            return_https_urls: false,
            files_route: DEFAULT_FILES_ROUTE.to_string(),
        }
    }
}
