//! Local UI chrome state (recorder phase, submit busy flag).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`session`) so
//! the interview controls can evolve independently of the data they record.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Lifecycle of the microphone recorder on the interview page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecorderPhase {
    /// No recording in flight; the start button is armed.
    #[default]
    Idle,
    /// The microphone is live and the interviewee waveform is animating.
    Recording,
    /// Recording stopped; the answer is uploading for transcription.
    Processing,
}

/// Transient presentation flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub recorder: RecorderPhase,
    /// A typed response or email send is in flight.
    pub busy: bool,
}

/// Label for the record button in each phase.
#[must_use]
pub fn recorder_button_label(phase: RecorderPhase) -> &'static str {
    match phase {
        RecorderPhase::Idle => "Start Recording",
        RecorderPhase::Recording => "Stop Recording",
        RecorderPhase::Processing => "Processing...",
    }
}
