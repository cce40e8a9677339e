//! Inline file preview.
//!
//! [`use_preview`] resolves a [`RenderDirective`](crate::models::RenderDirective)
//! from the file, reveal state and settings, fetching raw text when the
//! directive needs it. [`FilePreview`] renders the directive.

mod content;
mod hook;

pub use content::FilePreview;
pub use hook::use_preview;
