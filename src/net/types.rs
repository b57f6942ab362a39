//! Wire DTOs for the interview backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field so serde
//! round-trips stay lossless. Fields the backend may omit are `Option`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Response to `POST /api/start-interview`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StartInterview {
    /// Model-generated greeting addressed to the candidate.
    pub greeting: String,
}

/// Response to `POST /api/next-question`.
///
/// When questions remain, `question` and `caption` are set; once the list is
/// exhausted the backend sends only `message`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NextQuestion {
    pub question: Option<String>,
    /// Caption shown alongside the interviewer waveform (the question text).
    pub caption: Option<String>,
    pub message: Option<String>,
}

impl NextQuestion {
    /// Whether this payload marks the end of the interview.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.question.is_none()
    }
}

/// Response to `POST /api/process-voice-response`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VoiceOutcome {
    /// Whisper transcription of the uploaded answer.
    pub transcription: String,
    /// Brief model feedback on that answer.
    pub feedback: String,
}

/// Response to `POST /api/interview` (typed response).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InterviewFeedback {
    pub feedback: String,
    /// The backend may not score every response.
    pub score: Option<f64>,
}

/// Response to `POST /api/finalize-interview`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InterviewSummary {
    /// Full numbered transcript as formatted by the backend.
    pub transcript: String,
    /// Model analysis of the whole interview (markdown-ish free text).
    pub analysis: String,
    pub message: Option<String>,
}

/// Response to `POST /api/send-email`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EmailReceipt {
    pub message: Option<String>,
    pub error: Option<String>,
}
