//! Interview-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the navigation-state channel between pages: the name entered on
//! `/name` is read by every later route, answers recorded on `/interview`
//! accumulate here, and `/results` renders the final score and transcript.
//! Lifetime is a single page view; nothing is persisted.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// One answered question, in interview order.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptEntry {
    pub question: String,
    pub response: String,
}

/// Everything the trainer knows about the interview in progress.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Candidate name entered on the name page.
    pub name: String,
    /// Greeting returned when the interview was started, if any.
    pub greeting: Option<String>,
    /// Current question text from the backend.
    pub question: Option<String>,
    /// Caption shown under the interviewer waveform (the question text).
    pub caption: Option<String>,
    /// Answered questions, oldest first.
    pub transcript: Vec<TranscriptEntry>,
    /// Feedback returned for the typed response.
    pub feedback: Option<String>,
    /// Score returned for the typed response. The backend may omit it.
    pub score: Option<f64>,
    /// Set once the backend reports the question list exhausted.
    pub interview_complete: bool,
}

impl SessionState {
    /// Whether a usable candidate name has been entered.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Append one answered question to the transcript.
    pub fn record_answer(&mut self, question: &str, response: &str) {
        self.transcript.push(TranscriptEntry {
            question: question.to_owned(),
            response: response.to_owned(),
        });
    }

    /// Render the transcript the way the backend formats it for analysis:
    /// numbered questions, each followed by its answer and a blank line.
    #[must_use]
    pub fn full_transcript(&self) -> String {
        let mut out = String::new();
        for (idx, entry) in self.transcript.iter().enumerate() {
            out.push_str(&format!("Question {}: {}\n", idx + 1, entry.question));
            out.push_str(&format!("Answer: {}\n\n", entry.response));
        }
        out
    }
}
