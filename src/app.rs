//! Application shell: route table and shared-state context.
//!
//! ARCHITECTURE
//! ============
//! The shell provides the two context signals every route reads (`session`
//! for interview data, `ui` for transient flags) and declares the route
//! table. Unknown paths fall back to the landing page.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::home::HomePage;
use crate::pages::interview::InterviewPage;
use crate::pages::name_input::NameInputPage;
use crate::pages::respond::RespondPage;
use crate::pages::results::ResultsPage;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Title text="Visa Interview Trainer" />
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <HomePage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/name") view=NameInputPage />
                    <Route path=path!("/interview") view=InterviewPage />
                    <Route path=path!("/respond") view=RespondPage />
                    <Route path=path!("/results") view=ResultsPage />
                </Routes>
            </main>
        </Router>
    }
}
