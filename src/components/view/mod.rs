//! Public view page for a single shared file.
//!
//! Loads the server-computed [`ViewPage`], then shows either the password
//! prompt, the code layout (source files) or the standard layout with a
//! download button and the owner's templated content.

mod password;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::preview::FilePreview;
use crate::components::router::NotFound;
use crate::core::api;
use crate::core::template::{self, TemplateContext};
use crate::core::view::ViewPage as ViewData;
use crate::utils::{dom, sanitize_user_html};

use password::PasswordPrompt;

stylance::import_crate_style!(css, "src/components/view/view.module.css");

#[component]
pub fn ViewPage(name: String, pw: Option<String>) -> impl IntoView {
    let page = LocalResource::new(move || {
        let name = name.clone();
        let pw = pw.clone();
        async move { api::fetch_view(&name, pw.as_deref()).await }
    });

    view! {
        <main class=css::page>
            <Suspense fallback=move || view! { <div class=css::status>"Loading..."</div> }>
                {move || page.get().map(|result| match result {
                    Ok(data) => view! { <ViewBody data=data /> }.into_any(),
                    Err(err) if err.status() == Some(404) => view! { <NotFound /> }.into_any(),
                    Err(err) => {
                        log::error!("view page failed: {}", err);
                        view! { <div class=css::status>{err.to_string()}</div> }.into_any()
                    }
                })}
            </Suspense>
        </main>
    }
}

#[component]
fn ViewBody(data: ViewData) -> impl IntoView {
    {
        let meta = data.meta.clone();
        let title = data.file.name.clone();
        Effect::new(move |_| dom::apply_head(&meta, &title));
    }

    if data.password_required {
        return view! { <PasswordPrompt file_id=data.file.id.clone() name=data.file.name.clone() /> }
            .into_any();
    }

    if data.code {
        view! { <CodeLayout data=data /> }.into_any()
    } else {
        view! { <StandardLayout data=data /> }.into_any()
    }
}

#[component]
fn StandardLayout(data: ViewData) -> impl IntoView {
    let mimetype = data
        .user
        .view
        .show_mimetype
        .then(|| data.file.mime_type.clone());
    let content = user_content(&data);
    let align = data.user.view.align.as_css();

    view! {
        <header class=css::header>
            <div class=css::titleBlock>
                <h1 class=css::title>{data.file.name.clone()}</h1>
                {mimetype.map(|m| view! { <span class=css::mimetype>{m}</span> })}
            </div>
            <a class=css::button href=data.download_url() target="_blank" rel="noopener">
                <Icon icon=ic::DOWNLOAD />
                "Download"
            </a>
        </header>

        <FilePreview file=Signal::stored(data.record()) reveal=Signal::stored(data.reveal()) />

        {content.map(|html| view! {
            <div class=css::content style=format!("text-align: {}", align) inner_html=html></div>
        })}
    }
}

/// Source files: full-width code with collapsible details.
#[component]
fn CodeLayout(data: ViewData) -> impl IntoView {
    let details_open = RwSignal::new(false);
    let content = user_content(&data);
    let align = data.user.view.align.as_css();
    let mimetype = data.file.mime_type.clone();

    view! {
        <header class=css::header>
            <h1 class=css::title>{data.file.name.clone()}</h1>
            <div class=css::actions>
                <button class=css::button on:click=move |_| details_open.update(|open| *open = !*open)>
                    {move || if details_open.get() { "Hide details" } else { "Show details" }}
                </button>
                <a class=css::button href=data.download_url() target="_blank" rel="noopener">
                    <Icon icon=ic::DOWNLOAD />
                    "Download"
                </a>
            </div>
        </header>

        <Show when=move || details_open.get()>
            <section class=css::details>
                <span class=css::mimetype>{mimetype.clone()}</span>
                {content.clone().map(|html| view! {
                    <div class=css::content style=format!("text-align: {}", align) inner_html=html></div>
                })}
            </section>
        </Show>

        <FilePreview file=Signal::stored(data.record()) reveal=Signal::stored(data.reveal()) />
    }
}

/// The owner's template, rendered and sanitized.
fn user_content(data: &ViewData) -> Option<String> {
    let template = data.user.view.content.as_deref()?.trim();
    if template.is_empty() {
        return None;
    }
    let links = data.links();
    let ctx = TemplateContext {
        file: Some(&data.file),
        user: Some(&data.user),
        link: Some(&links),
        metrics: Some(&data.metrics),
    };
    Some(sanitize_user_html(&template::render(template, &ctx)))
}
