//! Application router component.
//!
//! Handles path-based routing over the history API. Uses native popstate
//! events instead of leptos_router so the same route type drives both the
//! dashboard and the public view page.
//!
//! # Architecture
//!
//! - **Location is the source of truth**: `AppContext::route` is derived from it
//! - **Each route remounts its page**: a new `?pw=` or folder loads fresh data
//! - **popstate events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::table::FileTable;
use crate::components::view::ViewPage;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// - `/dashboard/files?page=N` → file table
/// - `/dashboard/folders/{id}` → file table scoped to a folder
/// - `/view/{name}?pw=...` → public view page
/// - anything else → not found
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up popstate listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    move || match ctx.route.get() {
        AppRoute::Files { folder, page } => view! { <FileTable folder=folder page=page /> }.into_any(),
        AppRoute::View { name, pw } => view! { <ViewPage name=name pw=pw /> }.into_any(),
        AppRoute::NotFound => view! { <NotFound /> }.into_any(),
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::notFound>
            <h1 class=css::code>"404"</h1>
            <p class=css::message>"This page does not exist."</p>
            <button
                class=css::link
                on:click=move |_| ctx.navigate(AppRoute::Files { folder: None, page: 1 })
            >
                "Back to dashboard"
            </button>
        </div>
    }
}
