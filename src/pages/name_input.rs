//! Name prompt shown before the interview begins.
//!
//! The entered name is the navigation state every later route depends on:
//! it lands in `SessionState` (context), never in the URL.

#[cfg(test)]
#[path = "name_input_test.rs"]
mod name_input_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Trim and validate the entered name.
pub(crate) fn validate_name_input(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err("Enter your name first.")
    } else {
        Ok(trimmed.to_owned())
    }
}

#[component]
pub fn NameInputPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_begin = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_name_input(&name.get()) {
            Ok(valid) => {
                session.update(|s| s.name = valid.clone());

                // Warm up the interview so the greeting is ready when the
                // interview page mounts.
                #[cfg(feature = "csr")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::start_interview(&valid).await {
                        Ok(start) => session.update(|s| s.greeting = Some(start.greeting)),
                        Err(e) => log::error!("start interview failed: {e}"),
                    }
                });

                navigate("/interview", NavigateOptions::default());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="name-page">
            <div class="name-page__card">
                <h2 class="name-page__heading">"Enter your name"</h2>
                <form class="name-page__form" on:submit=on_begin>
                    <input
                        class="name-page__input"
                        type="text"
                        placeholder="Enter your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit">
                        "Begin"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="name-page__message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
