//! Visa Interview Trainer browser front-end.
//!
//! A client-side-rendered Leptos application compiled to WebAssembly. Five
//! routed pages walk a candidate through a mock F1 visa interview: a landing
//! screen, a name prompt, a spoken interview with live waveforms for the
//! pre-recorded interviewer track and the candidate's microphone, a typed
//! response screen, and a results screen with transcript, analysis and email
//! delivery. The backend is an external HTTP service; this crate only speaks
//! to it over REST.
//!
//! Built with the `csr` feature for the browser; without it the crate
//! compiles natively so the colocated unit tests run under plain
//! `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
