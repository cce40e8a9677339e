//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileRecord`], [`MediaKind`], [`FileSummary`] - Files as the resolver and API see them
//! - [`RevealState`], [`RenderDirective`] - Preview resolution inputs and outputs
//! - [`User`], [`ViewSettings`] - Owners and their view-page preferences
//! - [`Settings`] - Per-browser dashboard preferences
//! - [`AppRoute`] - History-API navigation

mod file;
mod preview;
mod route;
mod settings;
mod user;

pub use file::{FileOrigin, FilePage, FileRecord, FileSummary, Folder, MediaKind, Thumbnail};
pub use preview::{
    ImageFit, PlaceholderReason, PreviewPrefs, RenderDirective, RenderMode, RevealState,
    TextState,
};
pub use route::{AppRoute, query_param};
pub use settings::Settings;
pub use user::{ContentAlign, User, UserMetrics, ViewSettings};
