//! Core logic, independent of the UI layer.
//!
//! - [`resolver`] - Preview resolution (access gate plus rendering choice)
//! - [`text_loader`] - Cancellable raw-text retrieval bookkeeping
//! - [`view`] - Server-side data loading for the public view page
//! - [`embed`], [`template`] - Link-preview metadata and template strings
//! - [`table`] - File table search/sort/pagination/selection state
//! - [`api`] - Dashboard JSON API client

pub mod api;
pub mod code;
pub mod content_url;
pub mod crypto;
pub mod embed;
pub mod error;
pub mod host;
pub mod resolver;
pub mod settings;
pub mod table;
pub mod template;
pub mod text_loader;
pub mod view;

pub use content_url::ContentUrl;
pub use resolver::{resolve, text_source};
pub use text_loader::{CancelToken, LoadTicket, TextLoader};
