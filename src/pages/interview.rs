//! Spoken interview page: interviewer playback, microphone recording, and
//! live waveforms for both.
//!
//! ARCHITECTURE
//! ============
//! The page owns two audio lifecycles. The interviewer side mounts once the
//! canvas exists: the pre-recorded track plays through an analyser into the
//! speakers while an animation-frame loop strokes its waveform. The
//! interviewee side starts on demand: `getUserMedia` feeds a `MediaRecorder`
//! and a second analyser/loop; stopping freezes the last frame, uploads the
//! answer for transcription and feedback, and advances to the next question.

#[cfg(test)]
#[path = "interview_test.rs"]
mod interview_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::waveform_panel::WaveformPanel;
use crate::net::types::VoiceOutcome;
use crate::state::session::SessionState;
use crate::state::ui::{RecorderPhase, UiState, recorder_button_label};
use crate::util::guard::install_name_guard;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

/// Fixed path of the pre-recorded interviewer track.
#[cfg(any(test, feature = "csr"))]
pub(crate) const INTERVIEWER_TRACK: &str = "/assets/demo.wav";

/// Heading greeting the candidate by name.
pub(crate) fn welcome_heading(name: &str) -> String {
    format!("Welcome, {name}. Let's start your interview!")
}

/// Elapsed recording time as `m:ss`.
pub(crate) fn format_elapsed(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Live pieces of the interviewer playback, kept alive until unmount.
#[cfg(feature = "csr")]
struct Playback {
    graph: crate::util::audio::ElementGraph,
    raf: crate::util::raf::RafLoop,
}

/// Live pieces of an in-flight recording.
#[cfg(feature = "csr")]
struct Recording {
    graph: crate::util::audio::StreamGraph,
    recorder: Option<crate::util::audio::Recorder>,
    raf: crate::util::raf::RafLoop,
    /// One-second tick driving the elapsed-time readout; cancels on drop.
    _timer: gloo_timers::callback::Interval,
}

#[component]
pub fn InterviewPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    install_name_guard(session, navigate.clone());

    let interviewer_ref = NodeRef::<leptos::html::Canvas>::new();
    let interviewee_ref = NodeRef::<leptos::html::Canvas>::new();
    let status = RwSignal::new(String::new());
    let last_outcome = RwSignal::new(None::<VoiceOutcome>);
    let elapsed = RwSignal::new(0u32);

    #[cfg(feature = "csr")]
    let playback: Rc<RefCell<Option<Playback>>> = Rc::new(RefCell::new(None));
    #[cfg(feature = "csr")]
    let recording: Rc<RefCell<Option<Recording>>> = Rc::new(RefCell::new(None));

    // Interviewer side: mount the track and its waveform once the canvas
    // element exists, and tear everything down when the route changes.
    #[cfg(feature = "csr")]
    {
        let playback_mount = Rc::clone(&playback);
        Effect::new(move || {
            let Some(canvas) = interviewer_ref.get() else {
                return;
            };
            if playback_mount.borrow().is_some() {
                return;
            }
            match start_playback(canvas) {
                Ok(live) => *playback_mount.borrow_mut() = Some(live),
                Err(e) => log::error!("Error loading interviewer audio: {e:?}"),
            }
        });

        let playback_cleanup = Rc::clone(&playback);
        let recording_cleanup = Rc::clone(&recording);
        on_cleanup(move || {
            if let Some(live) = playback_cleanup.borrow_mut().take() {
                live.raf.cancel();
                let _ = live.graph.element.pause();
                crate::util::audio::close_context(&live.graph.context);
            }
            if let Some(live) = recording_cleanup.borrow_mut().take() {
                live.raf.cancel();
                crate::util::audio::stop_tracks(&live.graph.stream);
                crate::util::audio::close_context(&live.graph.context);
            }
        });
    }

    // Pull the first question once a name is present.
    #[cfg(feature = "csr")]
    {
        let fetched = RwSignal::new(false);
        Effect::new(move || {
            if fetched.get() || !session.get().has_name() {
                return;
            }
            fetched.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::next_question().await {
                    Ok(next) => session.update(|s| {
                        s.interview_complete = next.is_complete();
                        s.question = next.question.clone();
                        s.caption = next.caption.clone();
                    }),
                    Err(e) => log::error!("could not fetch the first question: {e}"),
                }
            });
        });
    }

    #[cfg(feature = "csr")]
    let on_record = {
        let recording = Rc::clone(&recording);
        move |_: leptos::ev::MouseEvent| match ui.get().recorder {
            RecorderPhase::Idle => {
                start_recording(ui, status, elapsed, interviewee_ref, Rc::clone(&recording));
            }
            RecorderPhase::Recording => {
                finish_recording(session, ui, status, last_outcome, Rc::clone(&recording));
            }
            RecorderPhase::Processing => {}
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_record = move |_: leptos::ev::MouseEvent| {};

    let navigate_done = navigate.clone();

    view! {
        <div class="interview-page">
            <h1 class="interview-page__heading">{move || welcome_heading(&session.get().name)}</h1>

            <Show when=move || session.get().greeting.is_some()>
                <p class="interview-page__greeting">
                    {move || session.get().greeting.unwrap_or_default()}
                </p>
            </Show>

            <Show when=move || session.get().caption.is_some()>
                <p class="interview-page__caption">
                    {move || session.get().caption.unwrap_or_default()}
                </p>
            </Show>

            <WaveformPanel heading="Interviewer" canvas_ref=interviewer_ref />
            <WaveformPanel heading="Interviewee" canvas_ref=interviewee_ref />

            <div class="interview-page__controls">
                <Show when=move || ui.get().recorder == RecorderPhase::Recording>
                    <span class="interview-page__elapsed">{move || format_elapsed(elapsed.get())}</span>
                </Show>
                <button
                    class="button"
                    class:button--danger=move || ui.get().recorder == RecorderPhase::Recording
                    class:button--primary=move || ui.get().recorder == RecorderPhase::Idle
                    disabled=move || ui.get().recorder == RecorderPhase::Processing
                    on:click=on_record
                >
                    {move || recorder_button_label(ui.get().recorder)}
                </button>
            </div>

            <Show when=move || last_outcome.get().is_some()>
                <div class="interview-page__outcome">
                    <p class="interview-page__transcription">
                        "You said: "
                        {move || last_outcome.get().map(|o| o.transcription).unwrap_or_default()}
                    </p>
                    <p class="interview-page__feedback">
                        {move || last_outcome.get().map(|o| o.feedback).unwrap_or_default()}
                    </p>
                </div>
            </Show>

            <Show when=move || session.get().interview_complete>
                <button
                    class="button button--primary"
                    on:click={
                        let navigate_done = navigate_done.clone();
                        move |_| navigate_done("/respond", NavigateOptions::default())
                    }
                >
                    "Continue to Written Response"
                </button>
            </Show>

            <Show when=move || !status.get().is_empty()>
                <p class="interview-page__status">{move || status.get()}</p>
            </Show>
        </div>
    }
}

/// Build the interviewer playback graph, start the track, and begin drawing.
#[cfg(feature = "csr")]
fn start_playback(canvas: web_sys::HtmlCanvasElement) -> Result<Playback, wasm_bindgen::JsValue> {
    use crate::util::{audio, raf::RafLoop};

    let graph = audio::element_analyser(INTERVIEWER_TRACK)?;
    let engine = waveform::engine::WaveformEngine::new(canvas, waveform::style::INTERVIEWER)?;
    engine.render_idle();

    // Autoplay can be rejected before a user gesture; the waveform then
    // idles on the midline and the rejection only reaches the console.
    let play_promise = graph.element.play()?;
    leptos::task::spawn_local(async move {
        if let Err(e) = wasm_bindgen_futures::JsFuture::from(play_promise).await {
            log::warn!("interviewer track autoplay blocked: {e:?}");
        }
    });

    let analyser = graph.analyser.clone();
    let mut buffer: Vec<u8> = Vec::new();
    let raf = RafLoop::start(move || {
        audio::time_domain(&analyser, &mut buffer);
        engine.render(&buffer);
    })?;

    Ok(Playback { graph, raf })
}

/// Ask for the microphone and light up the interviewee waveform.
#[cfg(feature = "csr")]
fn start_recording(
    ui: RwSignal<UiState>,
    status: RwSignal<String>,
    elapsed: RwSignal<u32>,
    canvas_ref: NodeRef<leptos::html::Canvas>,
    slot: Rc<RefCell<Option<Recording>>>,
) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        status.set("Recorder canvas is not ready yet.".to_owned());
        return;
    };

    leptos::task::spawn_local(async move {
        match begin_capture(canvas, elapsed).await {
            Ok(live) => {
                *slot.borrow_mut() = Some(live);
                ui.update(|u| u.recorder = RecorderPhase::Recording);
                status.set(String::new());
            }
            Err(e) => {
                log::error!("could not start recording: {e:?}");
                status.set("Microphone unavailable. Check browser permissions.".to_owned());
            }
        }
    });
}

#[cfg(feature = "csr")]
async fn begin_capture(
    canvas: web_sys::HtmlCanvasElement,
    elapsed: RwSignal<u32>,
) -> Result<Recording, wasm_bindgen::JsValue> {
    use crate::util::{audio, raf::RafLoop};

    let stream = audio::capture_microphone().await?;
    let graph = audio::stream_analyser(&stream)?;
    let recorder = audio::Recorder::start(&stream)?;

    let engine = waveform::engine::WaveformEngine::new(canvas, waveform::style::INTERVIEWEE)?;
    let analyser = graph.analyser.clone();
    let mut buffer: Vec<u8> = Vec::new();
    let raf = RafLoop::start(move || {
        audio::time_domain(&analyser, &mut buffer);
        engine.render(&buffer);
    })?;

    elapsed.set(0);
    let timer = gloo_timers::callback::Interval::new(1_000, move || elapsed.update(|s| *s += 1));

    Ok(Recording { graph, recorder: Some(recorder), raf, _timer: timer })
}

/// Stop recording, upload the answer, record the transcript entry, and
/// advance to the next question.
#[cfg(feature = "csr")]
fn finish_recording(
    session: RwSignal<SessionState>,
    ui: RwSignal<UiState>,
    status: RwSignal<String>,
    last_outcome: RwSignal<Option<VoiceOutcome>>,
    slot: Rc<RefCell<Option<Recording>>>,
) {
    let Some(mut live) = slot.borrow_mut().take() else {
        return;
    };
    let Some(recorder) = live.recorder.take() else {
        ui.update(|u| u.recorder = RecorderPhase::Idle);
        return;
    };

    ui.update(|u| u.recorder = RecorderPhase::Processing);
    live.raf.cancel();
    crate::util::audio::stop_tracks(&live.graph.stream);

    leptos::task::spawn_local(async move {
        let outcome = match recorder.stop_and_collect().await {
            Ok(blob) => crate::net::api::process_voice_response(&blob).await,
            Err(e) => Err(format!("recorder stop failed: {e:?}")),
        };
        crate::util::audio::close_context(&live.graph.context);
        drop(live);

        match outcome {
            Ok(outcome) => {
                let question = session
                    .get_untracked()
                    .caption
                    .unwrap_or_else(|| "Question".to_owned());
                session.update(|s| s.record_answer(&question, &outcome.transcription));
                last_outcome.set(Some(outcome));

                match crate::net::api::next_question().await {
                    Ok(next) => session.update(|s| {
                        s.interview_complete = next.is_complete();
                        s.question = next.question.clone();
                        s.caption = next.caption.clone();
                    }),
                    Err(e) => log::error!("could not advance to the next question: {e}"),
                }
            }
            Err(e) => {
                log::error!("Error processing voice response: {e}");
                status.set("Could not process your answer. It was not saved.".to_owned());
            }
        }
        ui.update(|u| u.recorder = RecorderPhase::Idle);
    });
}
