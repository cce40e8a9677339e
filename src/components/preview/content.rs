//! Directive rendering.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::use_preview;
use crate::components::icons as ic;
use crate::config::{IMAGE_MAX_HEIGHT, VIEW_ROUTE};
use crate::core::code::is_code;
use crate::models::{
    FileRecord, ImageFit, PlaceholderReason, RenderDirective, RenderMode, RevealState,
};
use crate::utils::{dom, markdown_to_html};

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");
stylance::import_crate_style!(md_css, "src/components/preview/markdown.module.css");

/// Preview of one file.
///
/// `on_reveal` fires when the user clicks through a placeholder or a video
/// poster; the parent decides what the new reveal state is.
#[component]
pub fn FilePreview(
    #[prop(into)] file: Signal<FileRecord>,
    #[prop(into)] reveal: Signal<RevealState>,
    #[prop(optional)] on_reveal: Option<Callback<()>>,
) -> impl IntoView {
    let directive = use_preview(file, reveal);
    let request_reveal = move || {
        if let Some(cb) = on_reveal {
            cb.run(());
        }
    };

    view! {
        <div class=css::preview>
            {move || {
                let name = file.with(|f| f.name.clone());
                match directive.get() {
                    RenderDirective::Locked => {
                        let target = format!("{}/{}", VIEW_ROUTE, urlencoding::encode(&name));
                        view! {
                            <Placeholder
                                icon=ic::LOCK
                                message=PlaceholderReason::Protected.message(&name)
                                on_click=Callback::new(move |_| dom::open_in_new_tab(&target))
                            />
                        }.into_any()
                    }
                    RenderDirective::Placeholder { reason } => {
                        let icon = match reason {
                            PlaceholderReason::Protected => ic::LOCK,
                            PlaceholderReason::PlayVideo | PlaceholderReason::PlayAudio => ic::PLAY,
                            PlaceholderReason::ViewText | PlaceholderReason::ViewFile => {
                                file.with(|f| ic::file_icon(f.kind(), is_code(&f.name)))
                            }
                        };
                        view! {
                            <Placeholder
                                icon=icon
                                message=reason.message(&name)
                                on_click=Callback::new(move |_| request_reveal())
                            />
                        }.into_any()
                    }
                    RenderDirective::Video { source_url: _, poster_url: Some(poster), poster_only: true } => {
                        view! {
                            <button class=css::poster on:click=move |_| request_reveal()>
                                <img src=poster alt=name.clone() />
                                <span class=css::playOverlay><Icon icon=ic::PLAY /></span>
                            </button>
                        }.into_any()
                    }
                    RenderDirective::Video { source_url, poster_url, .. } => {
                        view! {
                            <video
                                class=css::video
                                src=source_url
                                poster=poster_url
                                autoplay=true
                                muted=true
                                controls=true
                            />
                        }.into_any()
                    }
                    RenderDirective::Image { source_url, fit } => {
                        let class = match fit {
                            ImageFit::Preview => css::imagePreview,
                            ImageFit::Full => css::imageFull,
                        };
                        view! {
                            <img
                                class=class
                                src=source_url
                                alt=name
                                style=format!("max-height: {}px", IMAGE_MAX_HEIGHT)
                            />
                        }.into_any()
                    }
                    RenderDirective::Audio { source_url } => {
                        view! {
                            <audio class=css::audio src=source_url autoplay=true muted=true controls=true />
                        }.into_any()
                    }
                    RenderDirective::Text { language_hint, mode, content, .. } => {
                        view! { <TextBody language=language_hint mode=mode content=content /> }.into_any()
                    }
                    RenderDirective::Unknown { open_url: Some(url) } => {
                        view! {
                            <Placeholder
                                icon=ic::EXTERNAL_LINK
                                message=format!("Click to view file {} in a new tab", name)
                                on_click=Callback::new(move |_| dom::open_in_new_tab(&url))
                            />
                        }.into_any()
                    }
                    RenderDirective::Unknown { open_url: None } => {
                        view! {
                            <span class=css::unknown aria-label=name><Icon icon=ic::FILE_UNKNOWN /></span>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}

/// Clickable card with an icon and a label.
#[component]
fn Placeholder(icon: icondata::Icon, message: String, on_click: Callback<()>) -> impl IntoView {
    view! {
        <button class=css::placeholder on:click=move |_| on_click.run(())>
            <span class=css::placeholderIcon><Icon icon=icon /></span>
            <span class=css::placeholderText>{message}</span>
        </button>
    }
}

/// Loaded text as markdown, highlighted code or plain text.
#[component]
fn TextBody(language: String, mode: RenderMode, content: String) -> impl IntoView {
    match mode {
        RenderMode::Markdown => {
            let html = markdown_to_html(&content);
            view! { <div class=md_css::markdown inner_html=html></div> }.into_any()
        }
        RenderMode::Highlight => view! {
            <pre class=css::code>
                <code class=format!("language-{}", language)>{content}</code>
            </pre>
        }
        .into_any(),
        RenderMode::Plain => view! { <pre class=css::code>{content}</pre> }.into_any(),
    }
}
