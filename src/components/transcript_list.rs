//! Ordered list of answered interview questions.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Renders the session transcript, oldest answer first.
#[component]
pub fn TranscriptList() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show
            when=move || !session.get().transcript.is_empty()
            fallback=|| view! { <p class="transcript__empty">"No spoken answers recorded."</p> }
        >
            <ol class="transcript">
                {move || {
                    session
                        .get()
                        .transcript
                        .iter()
                        .map(|entry| {
                            view! {
                                <li class="transcript__entry">
                                    <p class="transcript__question">{entry.question.clone()}</p>
                                    <p class="transcript__response">{entry.response.clone()}</p>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
        </Show>
    }
}
