//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`preview`] - Inline file preview driven by the preview resolver
//! - [`table`] - Dashboard file table with search, sorting and bulk actions
//! - [`view`] - Public view page for a single shared file

pub mod icons;
pub mod preview;
pub mod router;
pub mod table;
pub mod view;

pub use router::AppRouter;
