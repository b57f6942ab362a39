//! Results page: score, transcript, model analysis, and email delivery.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::components::feedback_card::FeedbackCard;
use crate::components::transcript_list::TranscriptList;
use crate::net::types::InterviewSummary;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::guard::install_name_guard;

/// Render model analysis markdown to HTML with raw HTML events dropped.
pub(crate) fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    install_name_guard(session, navigate);

    let summary = RwSignal::new(None::<InterviewSummary>);
    let email_status = RwSignal::new(String::new());

    // Ask the backend for the full transcript and analysis once.
    #[cfg(feature = "csr")]
    {
        let fetched = RwSignal::new(false);
        Effect::new(move || {
            if fetched.get() {
                return;
            }
            fetched.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::finalize_interview().await {
                    Ok(received) => summary.set(Some(received)),
                    Err(e) => log::error!("finalize interview failed: {e}"),
                }
            });
        });
    }

    let on_email = move |_: leptos::ev::MouseEvent| {
        if ui.get().busy {
            return;
        }
        #[cfg(feature = "csr")]
        {
            ui.update(|u| u.busy = true);
            email_status.set(String::new());
            leptos::task::spawn_local(async move {
                // Prefer the backend's transcript; fall back to the one the
                // session accumulated if finalize never answered.
                let (transcript, analysis) = match summary.get_untracked() {
                    Some(received) => (received.transcript, received.analysis),
                    None => (session.get_untracked().full_transcript(), String::new()),
                };
                match crate::net::api::send_email(&transcript, &analysis).await {
                    Ok(receipt) => email_status.set(
                        receipt
                            .message
                            .unwrap_or_else(|| "Transcript and feedback sent via email.".to_owned()),
                    ),
                    Err(e) => {
                        log::error!("Error sending transcript email: {e}");
                        email_status.set("Failed to send email.".to_owned());
                    }
                }
                ui.update(|u| u.busy = false);
            });
        }
    };

    view! {
        <div class="results-page">
            <h1 class="results-page__heading">"Your Interview Results"</h1>

            <FeedbackCard />

            <section class="results-page__section">
                <h2>"Spoken Answers"</h2>
                <TranscriptList />
            </section>

            <Show when=move || summary.get().is_some()>
                <section class="results-page__section">
                    <h2>"Analysis"</h2>
                    <div
                        class="results-page__analysis"
                        inner_html=move || {
                            summary
                                .get()
                                .map(|received| render_markdown_html(&received.analysis))
                                .unwrap_or_default()
                        }
                    ></div>
                </section>
            </Show>

            <div class="results-page__email">
                <button class="button button--primary" on:click=on_email disabled=move || ui.get().busy>
                    "Email me my results"
                </button>
                <Show when=move || !email_status.get().is_empty()>
                    <p class="results-page__email-status">{move || email_status.get()}</p>
                </Show>
            </div>
        </div>
    }
}
