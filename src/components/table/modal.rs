//! File details modal with an inline preview.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::components::preview::FilePreview;
use crate::models::{FileRecord, FileSummary, RevealState};
use crate::utils::format::{format_bytes, format_date};

/// Shows the file in `file` while it is `Some`; closing resets it to `None`.
#[component]
pub fn FileModal(file: RwSignal<Option<FileSummary>>) -> impl IntoView {
    view! {
        <Show when=move || file.with(Option::is_some)>
            {move || file.get().map(|summary| view! {
                <ModalBody summary=summary on_close=Callback::new(move |_| file.set(None)) />
            })}
        </Show>
    }
}

#[component]
fn ModalBody(summary: FileSummary, on_close: Callback<()>) -> impl IntoView {
    let record = FileRecord::from(&summary);
    let reveal = RwSignal::new(RevealState::hidden());
    let on_reveal = Callback::new(move |_| reveal.update(|r| r.show = true));

    view! {
        <div class=css::overlay on:click=move |_| on_close.run(())>
            <div class=css::modal role="dialog" aria-label=summary.name.clone() on:click=|ev| ev.stop_propagation()>
                <header class=css::modalHeader>
                    <h2 class=css::modalTitle>{summary.name.clone()}</h2>
                    <button class=css::iconButton title="Close" on:click=move |_| on_close.run(())>
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <FilePreview file=Signal::stored(record) reveal=reveal on_reveal=on_reveal />

                <dl class=css::details>
                    <dt>"Type"</dt>
                    <dd>{summary.mime_type.clone()}</dd>
                    <dt>"Size"</dt>
                    <dd>{format_bytes(summary.size)}</dd>
                    <dt>"Created"</dt>
                    <dd>{format_date(&summary.created_at)}</dd>
                    <dt>"Views"</dt>
                    <dd>{summary.views}</dd>
                    {summary.original_name.clone().map(|original| view! {
                        <dt>"Original name"</dt>
                        <dd>{original}</dd>
                    })}
                </dl>
            </div>
        </div>
    }
}
