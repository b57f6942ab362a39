//! Landing page with the start-interview call to action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Visa Interview Trainer"</h1>
            <button
                class="button button--primary"
                on:click=move |_| navigate("/name", NavigateOptions::default())
            >
                "Start Interview"
            </button>
        </div>
    }
}
