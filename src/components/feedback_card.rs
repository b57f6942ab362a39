//! Feedback and score display for the typed response.

#[cfg(test)]
#[path = "feedback_card_test.rs"]
mod feedback_card_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Render a score the backend may have omitted.
///
/// Whole-number scores drop the trailing `.0`; a missing score renders as
/// an em dash rather than `0`.
#[must_use]
pub fn format_score(score: Option<f64>) -> String {
    match score {
        None => "—".to_owned(),
        Some(value) if value.fract() == 0.0 => format!("{value:.0}"),
        Some(value) => format!("{value}"),
    }
}

/// Card showing the stored feedback and score, hidden until feedback exists.
#[component]
pub fn FeedbackCard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || session.get().feedback.is_some()>
            <div class="feedback-card">
                <p class="feedback-card__text">
                    "Feedback: "
                    {move || session.get().feedback.unwrap_or_default()}
                </p>
                <p class="feedback-card__score">
                    "Score: "
                    <span>{move || format_score(session.get().score)}</span>
                </p>
            </div>
        </Show>
    }
}
