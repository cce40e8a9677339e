//! Preview resolution hook.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppContext;
use crate::core::{TextLoader, resolve, text_source};
use crate::models::{FileRecord, RenderDirective, RevealState};
use crate::utils::fetch_text;

/// Resolve the directive for `file` and keep it current.
///
/// Raw text is fetched at most once per URL while the hook is alive. A
/// request still in flight when the owning component is disposed, or when
/// the file or reveal state moves to another URL, never writes its result.
pub fn use_preview(file: Signal<FileRecord>, reveal: Signal<RevealState>) -> Memo<RenderDirective> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let loader = RwSignal::new(TextLoader::new());

    Effect::new(move |_| {
        let Some(url) = file.with(|file| reveal.with(|reveal| text_source(file, reveal))) else {
            loader.update(TextLoader::reset);
            return;
        };
        let Some(ticket) = loader.try_update(|loader| loader.begin(&url)).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = fetch_text(ticket.url()).await;
            if ticket.is_cancelled() {
                return;
            }
            // The signal is gone once the owner is disposed.
            loader.try_update(|loader| loader.complete(&ticket, result));
        });
    });

    on_cleanup(move || {
        loader.try_update(TextLoader::teardown);
    });

    Memo::new(move |_| {
        let prefs = ctx.settings.with(|s| s.preview_prefs());
        let directive = file.with(|file| {
            reveal.with(|reveal| loader.with(|loader| resolve(file, reveal, prefs, loader.state())))
        });
        log::debug!("preview: {}", directive);
        directive
    })
}
