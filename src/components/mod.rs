//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render interview chrome (waveform canvases, feedback, the
//! transcript) while reading shared state from Leptos context providers;
//! route-level orchestration stays in `pages`.

pub mod feedback_card;
pub mod transcript_list;
pub mod waveform_panel;
