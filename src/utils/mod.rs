//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_text`], [`fetch_json`], [`send_json`] - Network fetching with timeout
//! - [`markdown_to_html`], [`sanitize_user_html`] - HTML rendering with XSS sanitization
//! - [`logger`] - `log` backend for the browser console

pub mod dom;
mod fetch;
pub mod format;
mod html;
pub mod logger;

pub use fetch::{Method, RaceResult, fetch_json, fetch_text, race_with_timeout, send_json};
pub use html::{markdown_to_html, sanitize_user_html};
