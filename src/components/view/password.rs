//! Password prompt for protected files.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use super::css;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::api;
use crate::models::AppRoute;

/// Verifies the password, then reloads the page with `?pw=`.
#[component]
pub fn PasswordPrompt(file_id: String, name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |_: ()| {
        let candidate = password.get_untracked().trim().to_string();
        if candidate.is_empty() || busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);

        let file_id = file_id.clone();
        let name = name.clone();
        spawn_local(async move {
            match api::verify_file_password(&file_id, &candidate).await {
                Ok(()) => ctx.redirect(AppRoute::View {
                    name,
                    pw: Some(candidate),
                }),
                Err(err) => {
                    log::info!("password rejected for {}: {}", name, err);
                    error.set(Some("Invalid password".to_string()));
                    busy.set(false);
                }
            }
        });
    });

    view! {
        <div class=css::overlay>
            <div class=css::prompt role="dialog" aria-label="Password required">
                <h2 class=css::promptTitle>
                    <Icon icon=ic::LOCK />
                    "Password required"
                </h2>
                <p class=css::promptHint>"This file is password protected."</p>
                <input
                    class=css::promptInput
                    type="password"
                    placeholder="Password"
                    autofocus=true
                    prop:value=password
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                        error.set(None);
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit.run(());
                        }
                    }
                />
                {move || error.get().map(|msg| view! { <p class=css::promptError>{msg}</p> })}
                <button
                    class=css::button
                    disabled=move || busy.get() || password.with(|p| p.trim().is_empty())
                    on:click=move |_| submit.run(())
                >
                    "Verify"
                </button>
            </div>
        </div>
    }
}
