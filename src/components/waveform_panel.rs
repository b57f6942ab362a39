//! Labeled canvas surface for one waveform trace.
//!
//! The panel is purely structural: it owns the `<canvas>` markup and hands
//! the node ref back to the page, which binds a `waveform` engine to it and
//! drives rendering from its animation-frame loop.

use leptos::prelude::*;

/// A headed waveform canvas (interviewer or interviewee).
#[component]
pub fn WaveformPanel(heading: &'static str, canvas_ref: NodeRef<leptos::html::Canvas>) -> impl IntoView {
    view! {
        <section class="waveform-panel">
            <h2 class="waveform-panel__heading">{heading}</h2>
            <div class="waveform-panel__frame">
                <canvas
                    class="waveform-panel__canvas"
                    node_ref=canvas_ref
                    width="600"
                    height="150"
                ></canvas>
            </div>
        </section>
    }
}
