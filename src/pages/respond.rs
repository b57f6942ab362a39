//! Typed response page: the candidate writes an answer and posts it for
//! feedback.

#[cfg(test)]
#[path = "respond_test.rs"]
mod respond_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::guard::install_name_guard;

/// Trim and validate the typed response.
pub(crate) fn validate_response_input(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err("Type a response before submitting.")
    } else {
        Ok(trimmed.to_owned())
    }
}

#[component]
pub fn RespondPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    install_name_guard(session, navigate.clone());

    let response = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let navigate_results = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if ui.get().busy {
            return;
        }
        let text = match validate_response_input(&response.get()) {
            Ok(text) => text,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        ui.update(|u| u.busy = true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate_results.clone();
            leptos::task::spawn_local(async move {
                let name = session.get_untracked().name;
                match crate::net::api::submit_response(&name, &text).await {
                    Ok(outcome) => {
                        session.update(|s| {
                            s.feedback = Some(outcome.feedback);
                            s.score = outcome.score;
                        });
                        ui.update(|u| u.busy = false);
                        navigate("/results", NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("Error submitting response: {e}");
                        info.set("Failed to submit response.".to_owned());
                        ui.update(|u| u.busy = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (text, &navigate_results);
            ui.update(|u| u.busy = false);
        }
    };

    view! {
        <div class="respond-page">
            <h2 class="respond-page__heading">
                {move || format!("Almost done, {}. Write your closing response.", session.get().name)}
            </h2>

            <form class="respond-page__form" on:submit=on_submit>
                <textarea
                    class="respond-page__textarea"
                    placeholder="Type your response here"
                    prop:value=move || response.get()
                    on:input=move |ev| response.set(event_target_value(&ev))
                ></textarea>
                <button class="button button--primary" type="submit" disabled=move || ui.get().busy>
                    "Submit Response"
                </button>
            </form>

            <Show when=move || !info.get().is_empty()>
                <p class="respond-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
