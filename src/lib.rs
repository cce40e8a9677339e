//! File sharing dashboard and public view page.
//!
//! - [`app`] - Root component and application context
//! - [`components`] - Leptos UI components
//! - [`config`] - Compile-time configuration
//! - [`core`] - Preview resolution, view loading and API client
//! - [`models`] - Data types shared across layers
//! - [`utils`] - Fetch, DOM, formatting and logging helpers

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
