//! Shared route-guard helper for name-gated pages.
//!
//! The interview, respond and results routes are meaningless without a
//! candidate name; each installs the identical redirect behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Redirect to `/name` whenever the session has no usable candidate name.
pub fn install_name_guard<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !session.get().has_name() {
            navigate("/name", NavigateOptions::default());
        }
    });
}
