//! Dashboard file table.
//!
//! Lists the user's files with search, sortable columns, pagination and
//! multi-selection. Selections survive page changes; bulk actions act on
//! every selected file. Clicking a name opens the file in a modal preview.

mod modal;
mod toolbar;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::VIEW_ROUTE;
use crate::core::api;
use crate::core::code::is_code;
use crate::core::content_url::returned_url;
use crate::core::table::{SortField, SortOrder, TableState, total_pages};
use crate::models::{AppRoute, FileSummary, MediaKind};
use crate::utils::dom;
use crate::utils::format::{format_bytes, format_date};

use modal::FileModal;
use toolbar::{BulkBar, Pagination, SearchBar};

stylance::import_crate_style!(css, "src/components/table/table.module.css");

#[component]
pub fn FileTable(folder: Option<String>, page: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let state = RwSignal::new(TableState::new(page, folder));
    let refresh = RwSignal::new(0u32);
    let open_file = RwSignal::new(None::<FileSummary>);

    // Selection changes must not refetch, so the resource keys on the URL only.
    let request = Memo::new(move |_| {
        let threshold = ctx.settings.with(|s| s.search_threshold);
        state.with(|s| s.request_url(threshold))
    });

    let files = LocalResource::new(move || {
        let url = request.get();
        refresh.track();
        async move { api::list_files_at(&url).await }
    });
    let folders = LocalResource::new(api::list_folders);

    // Keep `?page=` in the address bar without remounting the table.
    Effect::new(move |_| {
        let (folder, page) = state.with(|s| (s.folder.clone(), s.page));
        AppRoute::Files { folder, page }.replace();
    });

    // A page past the end (after deletes or a smaller page size) snaps back.
    Effect::new(move |_| {
        if let Some(Ok(data)) = files.get() {
            let per_page = state.with_untracked(|s| s.per_page);
            let pages = match data.pages {
                0 => total_pages(data.total, per_page),
                pages => pages,
            };
            if state.with_untracked(|s| s.page > pages) {
                state.update(|s| s.set_page(pages, pages));
            }
        }
    });

    let page_files = Signal::derive(move || {
        files
            .get()
            .and_then(Result::ok)
            .map(|data| data.page)
            .unwrap_or_default()
    });
    // Older servers only report `total`.
    let page_count = Signal::derive(move || {
        let per_page = state.with(|s| s.per_page);
        files
            .get()
            .and_then(Result::ok)
            .map(|data| match data.pages {
                0 => total_pages(data.total, per_page),
                pages => pages,
            })
            .unwrap_or(1)
    });

    let all_selected = Signal::derive(move || {
        let ids = page_files.with(|f| f.iter().map(|f| f.id.clone()).collect::<Vec<_>>());
        !ids.is_empty() && state.with(|s| ids.iter().all(|id| s.is_selected(id)))
    });
    let toggle_all = move |_| {
        let ids = page_files.with_untracked(|f| f.iter().map(|f| f.id.clone()).collect::<Vec<_>>());
        state.update(|s| s.toggle_all(&ids));
    };

    view! {
        <section class=css::table>
            <header class=css::toolbar>
                <SearchBar state=state />
                <label class=css::setting>
                    <input
                        type="checkbox"
                        prop:checked=move || ctx.settings.with(|s| s.disable_media_preview)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            ctx.update_settings(|s| s.disable_media_preview = checked);
                        }
                    />
                    "Disable media previews"
                </label>
            </header>

            <Show when=move || state.with(|s| !s.selected.is_empty())>
                <BulkBar state=state folders=folders refresh=refresh />
            </Show>

            <div class=css::grid role="grid" aria-label="Files">
                <div class=css::headerRow role="row">
                    <span class=css::checkCell>
                        <input type="checkbox" prop:checked=all_selected on:change=toggle_all />
                    </span>
                    <SortHeader state=state field=SortField::Name label="Name" />
                    <SortHeader state=state field=SortField::Type label="Type" />
                    <SortHeader state=state field=SortField::Size label="Size" />
                    <SortHeader state=state field=SortField::CreatedAt label="Created" />
                    <SortHeader state=state field=SortField::Views label="Views" />
                    <SortHeader state=state field=SortField::Favorite label="" />
                    <span class=css::actionsCell></span>
                </div>

                <Suspense fallback=move || view! { <div class=css::status>"Loading..."</div> }>
                    {move || files.get().map(|result| match result {
                        Err(err) => view! {
                            <div class=css::status>{format!("Failed to load files: {}", err)}</div>
                        }.into_any(),
                        Ok(data) if data.page.is_empty() => {
                            let message = if state.with_untracked(|s| s.searching()) {
                                "No files match your search"
                            } else {
                                "No files yet"
                            };
                            view! { <div class=css::status>{message}</div> }.into_any()
                        }
                        Ok(_) => view! {
                            <For
                                each=move || page_files.get()
                                key=|file| (file.id.clone(), file.favorite)
                                children=move |file| view! {
                                    <FileRow file=file state=state refresh=refresh open_file=open_file />
                                }
                            />
                        }.into_any(),
                    })}
                </Suspense>
            </div>

            <Pagination state=state total_pages=page_count />

            <FileModal file=open_file />
        </section>
    }
}

/// Column header; clicking sorts by the column or flips the order.
#[component]
fn SortHeader(state: RwSignal<TableState>, field: SortField, label: &'static str) -> impl IntoView {
    let indicator = move || {
        state.with(|s| {
            (s.sort == field).then(|| match s.order {
                SortOrder::Asc => view! { <Icon icon=ic::SORT_ASC /> },
                SortOrder::Desc => view! { <Icon icon=ic::SORT_DESC /> },
            })
        })
    };

    view! {
        <button
            class=css::headerCell
            role="columnheader"
            on:click=move |_| state.update(|s| s.toggle_sort(field))
        >
            {if field == SortField::Favorite {
                view! { <Icon icon=ic::STAR /> }.into_any()
            } else {
                label.into_any()
            }}
            {indicator}
        </button>
    }
}

#[component]
fn FileRow(
    file: FileSummary,
    state: RwSignal<TableState>,
    refresh: RwSignal<u32>,
    open_file: RwSignal<Option<FileSummary>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = file.id.clone();
    let name = file.name.clone();
    let icon = ic::file_icon(MediaKind::from_mime(&file.mime_type), is_code(&file.name));

    let selected = {
        let id = id.clone();
        Signal::derive(move || state.with(|s| s.is_selected(&id)))
    };
    let toggle_selected = {
        let id = id.clone();
        move |_| state.update(|s| s.toggle_selected(&id))
    };

    let open_preview = {
        let file = file.clone();
        move |_| open_file.set(Some(file.clone()))
    };

    let open_view = {
        let target = format!("{}/{}", VIEW_ROUTE, urlencoding::encode(&name));
        move |_| dom::open_in_new_tab(&target)
    };

    let copy_link = {
        let name = name.clone();
        move |_| {
            let route = ctx.view_config.with_untracked(|c| c.files_route.clone());
            dom::copy_to_clipboard(&returned_url(&dom::origin(), &route, &name));
        }
    };

    let favorite = file.favorite;
    let toggle_favorite = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            spawn_local(async move {
                match api::set_favorite(&id, !favorite).await {
                    Ok(()) => refresh.update(|n| *n += 1),
                    Err(err) => log::error!("favorite {} failed: {}", id, err),
                }
            });
        }
    };

    let delete = {
        let id = id.clone();
        let name = name.clone();
        move |_| {
            let warn = ctx.settings.with_untracked(|s| s.warn_deletion);
            if warn && !dom::confirm(&format!("Delete {}? This cannot be undone.", name)) {
                return;
            }
            let id = id.clone();
            spawn_local(async move {
                match api::delete_file(&id).await {
                    Ok(()) => {
                        state.update(|s| s.selected.retain(|s| s != &id));
                        refresh.update(|n| *n += 1);
                    }
                    Err(err) => log::error!("delete {} failed: {}", id, err),
                }
            });
        }
    };

    let favorite_class = if favorite {
        format!("{} {}", css::iconButton, css::favorite)
    } else {
        css::iconButton.to_string()
    };
    let favorite_title = if favorite { "Unfavorite" } else { "Favorite" };

    let row_class = move || {
        if selected.get() {
            format!("{} {}", css::row, css::selected)
        } else {
            css::row.to_string()
        }
    };

    view! {
        <div class=row_class role="row">
            <span class=css::checkCell>
                <input type="checkbox" prop:checked=selected on:change=toggle_selected />
            </span>
            <button class=css::nameCell on:click=open_preview title=name.clone()>
                <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                <span class=css::name>{name.clone()}</span>
                {file.password.then(|| view! { <span class=css::lockIcon><Icon icon=ic::LOCK /></span> })}
            </button>
            <span class=css::cell>{file.mime_type.clone()}</span>
            <span class=css::cell>{format_bytes(file.size)}</span>
            <span class=css::cell>{format_date(&file.created_at)}</span>
            <span class=css::cell>{file.views}</span>
            <button
                class=favorite_class
                title=favorite_title
                on:click=toggle_favorite
            >
                <Icon icon=ic::STAR />
            </button>
            <span class=css::actionsCell>
                <button class=css::iconButton title="Open" on:click=open_view>
                    <Icon icon=ic::EXTERNAL_LINK />
                </button>
                <button class=css::iconButton title="Copy link" on:click=copy_link>
                    <Icon icon=ic::COPY />
                </button>
                <button class=css::iconButton title="Delete" on:click=delete>
                    <Icon icon=ic::TRASH />
                </button>
            </span>
        </div>
    }
}
