//! Search, bulk-action and pagination controls for the file table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::config::PER_PAGE_OPTIONS;
use crate::core::api;
use crate::core::error::ApiError;
use crate::core::table::{SearchField, TableState, bulk_label, filter_folders};
use crate::models::Folder;
use crate::utils::dom;

/// Field selector plus query input.
#[component]
pub fn SearchBar(state: RwSignal<TableState>) -> impl IntoView {
    let field = Signal::derive(move || state.with(|s| s.search_field));

    view! {
        <div class=css::search>
            <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
            <select
                class=css::searchField
                aria-label="Search field"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    if let Some(field) = SearchField::ALL.into_iter().find(|f| f.as_str() == value) {
                        state.update(|s| s.set_search(field, ""));
                    }
                }
            >
                {SearchField::ALL.into_iter().map(|f| view! {
                    <option value=f.as_str() selected=move || field.get() == f>{f.label()}</option>
                }).collect_view()}
            </select>
            <input
                class=css::searchInput
                type="search"
                placeholder=move || field.get().placeholder()
                prop:value=move || state.with(|s| s.search.get(s.search_field).to_string())
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    state.update(|s| s.set_search(s.search_field, &query));
                }
            />
        </div>
    }
}

/// Actions over every selected file, across pages.
#[component]
pub fn BulkBar(
    state: RwSignal<TableState>,
    folders: LocalResource<Result<Vec<Folder>, ApiError>>,
    refresh: RwSignal<u32>,
) -> impl IntoView {
    let count = Signal::derive(move || state.with(|s| s.selected.len()));
    let busy = RwSignal::new(false);

    // Runs `action` over the selection, then clears it and reloads.
    let run = move |action: BulkAction| {
        let ids = state.with_untracked(|s| s.selected.clone());
        if ids.is_empty() || busy.get_untracked() {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let result = match action {
                BulkAction::Delete => api::bulk_delete(&ids).await,
                BulkAction::Favorite => api::bulk_favorite(&ids).await,
            };
            match result {
                Ok(()) => {
                    state.update(TableState::clear_selection);
                    refresh.update(|n| *n += 1);
                }
                Err(err) => log::error!("bulk {:?} failed: {}", action, err),
            }
            busy.set(false);
        });
    };

    let delete_selected = move |_| {
        let label = bulk_label("Delete", count.get_untracked());
        if dom::confirm(&format!("{}? This cannot be undone.", label)) {
            run(BulkAction::Delete);
        }
    };
    let favorite_selected = move |_| run(BulkAction::Favorite);

    let folder_query = RwSignal::new(String::new());
    let picker_open = RwSignal::new(false);
    let add_to_folder = move |folder: Folder| {
        picker_open.set(false);
        folder_query.set(folder.name.clone());
        let ids = state.with_untracked(|s| s.selected.clone());
        busy.set(true);
        spawn_local(async move {
            match api::add_to_folder(&folder.id, &ids).await {
                Ok(()) => {
                    log::info!("added {} to folder {}", ids.len(), folder.name);
                    state.update(TableState::clear_selection);
                    refresh.update(|n| *n += 1);
                }
                Err(err) => log::error!("add to folder {} failed: {}", folder.name, err),
            }
            busy.set(false);
        });
    };

    view! {
        <div class=css::bulkBar>
            <span class=css::bulkHint>"Selections are saved across page changes"</span>
            <button
                class=css::bulkButton
                disabled=move || busy.get()
                on:click=delete_selected
            >
                <Icon icon=ic::TRASH />
                {move || bulk_label("Delete", count.get())}
            </button>
            <button
                class=css::bulkButton
                disabled=move || busy.get()
                on:click=favorite_selected
            >
                <Icon icon=ic::STAR />
                {move || bulk_label("Favorite", count.get())}
            </button>

            <div class=css::folderPicker>
                <input
                    class=css::folderInput
                    type="text"
                    placeholder="Add to folder..."
                    prop:value=folder_query
                    on:focus=move |_| picker_open.set(true)
                    on:input=move |ev| {
                        folder_query.set(event_target_value(&ev));
                        picker_open.set(true);
                    }
                />
                <Show when=move || picker_open.get()>
                    <ul class=css::folderList role="listbox">
                        {move || {
                            let Some(Ok(all)) = folders.get() else {
                                return view! { <li class=css::folderEmpty>"No folders"</li> }.into_any();
                            };
                            let matches: Vec<Folder> = folder_query
                                .with(|q| filter_folders(&all, q).into_iter().cloned().collect());
                            if matches.is_empty() {
                                return view! { <li class=css::folderEmpty>"No matching folders"</li> }.into_any();
                            }
                            matches
                                .into_iter()
                                .map(|folder| {
                                    let label = folder.name.clone();
                                    view! {
                                        <li
                                            class=css::folderOption
                                            role="option"
                                            on:click=move |_| add_to_folder(folder.clone())
                                        >
                                            <Icon icon=ic::FOLDER />
                                            {label}
                                        </li>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </ul>
                </Show>
            </div>

            <button
                class=css::iconButton
                title="Clear selection"
                on:click=move |_| state.update(TableState::clear_selection)
            >
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}

#[derive(Clone, Copy, Debug)]
enum BulkAction {
    Delete,
    Favorite,
}

/// Previous/next buttons, page indicator and page size.
#[component]
pub fn Pagination(state: RwSignal<TableState>, total_pages: Signal<usize>) -> impl IntoView {
    let page = Signal::derive(move || state.with(|s| s.page));
    let pages = Signal::derive(move || total_pages.get().max(1));

    view! {
        <nav class=css::pagination aria-label="Pagination">
            <button
                class=css::iconButton
                disabled=move || page.get() <= 1
                on:click=move |_| state.update(|s| s.set_page(s.page.saturating_sub(1), pages.get_untracked()))
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>
            <span class=css::pageIndicator>
                {move || format!("Page {} of {}", page.get(), pages.get())}
            </span>
            <button
                class=css::iconButton
                disabled=move || page.get() >= pages.get()
                on:click=move |_| state.update(|s| s.set_page(s.page + 1, pages.get_untracked()))
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
            <select
                class=css::perPage
                aria-label="Files per page"
                on:change=move |ev| {
                    if let Ok(per_page) = event_target_value(&ev).parse::<usize>() {
                        state.update(|s| s.set_per_page(per_page));
                    }
                }
            >
                {PER_PAGE_OPTIONS.iter().copied().map(|n| view! {
                    <option
                        value=n.to_string()
                        selected=move || state.with(|s| s.per_page == n)
                    >
                        {format!("{} / page", n)}
                    </option>
                }).collect_view()}
            </select>
        </nav>
    }
}
