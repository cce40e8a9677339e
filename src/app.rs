//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AppRouter;
use crate::config::ViewConfig;
use crate::core::api;
use crate::core::settings::{load_settings, save_settings};
use crate::models::{AppRoute, Settings};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Per-browser dashboard settings (persisted in localStorage).
    pub settings: RwSignal<Settings>,
    /// Current route, kept in sync with the browser location.
    pub route: RwSignal<AppRoute>,
    /// Server view settings; defaults until the server answers.
    pub view_config: RwSignal<ViewConfig>,
}

impl AppContext {
    /// Creates the context from localStorage and the current location.
    pub fn new() -> Self {
        Self {
            settings: RwSignal::new(load_settings()),
            route: RwSignal::new(AppRoute::current()),
            view_config: RwSignal::new(ViewConfig::default()),
        }
    }

    /// Fetch the server's view settings in the background.
    pub fn load_view_config(&self) {
        let view_config = self.view_config;
        spawn_local(async move {
            match api::fetch_view_config().await {
                Ok(config) => view_config.set(config),
                Err(err) => log::warn!("view config unavailable, using defaults: {}", err),
            }
        });
    }

    /// Navigate to `route`, adding a history entry.
    pub fn navigate(&self, route: AppRoute) {
        route.push();
        self.route.set(route);
    }

    /// Navigate to `route`, replacing the current history entry.
    pub fn redirect(&self, route: AppRoute) {
        route.replace();
        self.route.set(route);
    }

    /// Apply a change to the settings and persist it.
    pub fn update_settings(&self, f: impl FnOnce(&mut Settings)) {
        self.settings.update(f);
        if let Err(err) = self.settings.with_untracked(save_settings) {
            log::warn!("settings not saved: {}", err);
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    ctx.load_view_config();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #e03131; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #868e96;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
