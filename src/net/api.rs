//! REST API helpers for communicating with the interview backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native (test) builds: stubs returning errors, since the endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a dead or
//! misbehaving backend degrades to console logs and inline messages without
//! crashing the page. The trainer never retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{EmailReceipt, InterviewFeedback, InterviewSummary, NextQuestion, StartInterview};
#[cfg(feature = "csr")]
use super::types::VoiceOutcome;

#[cfg(any(test, feature = "csr"))]
const START_INTERVIEW: &str = "/api/start-interview";
#[cfg(any(test, feature = "csr"))]
const NEXT_QUESTION: &str = "/api/next-question";
#[cfg(any(test, feature = "csr"))]
const PROCESS_VOICE_RESPONSE: &str = "/api/process-voice-response";
#[cfg(any(test, feature = "csr"))]
const INTERVIEW: &str = "/api/interview";
#[cfg(any(test, feature = "csr"))]
const FINALIZE_INTERVIEW: &str = "/api/finalize-interview";
#[cfg(any(test, feature = "csr"))]
const SEND_EMAIL: &str = "/api/send-email";

/// Form field name `backend` reads the uploaded recording from.
#[cfg(any(test, feature = "csr"))]
const RECORDING_FIELD: &str = "file";
#[cfg(any(test, feature = "csr"))]
const RECORDING_FILENAME: &str = "answer.webm";

#[cfg(any(test, feature = "csr"))]
fn failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Start the interview session for `name` via `POST /api/start-interview`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn start_interview(name: &str) -> Result<StartInterview, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "name": name });
        let resp = gloo_net::http::Request::post(START_INTERVIEW)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("start interview", resp.status()));
        }
        resp.json::<StartInterview>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the next question (or the completion message) via
/// `POST /api/next-question`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn next_question() -> Result<NextQuestion, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(NEXT_QUESTION)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("next question", resp.status()));
        }
        resp.json::<NextQuestion>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Upload a recorded answer for transcription and feedback via
/// `POST /api/process-voice-response` (multipart, field `file`).
///
/// # Errors
///
/// Returns an error string if the form cannot be assembled, the HTTP request
/// fails, or the server responds with a non-OK status.
#[cfg(feature = "csr")]
pub async fn process_voice_response(recording: &web_sys::Blob) -> Result<VoiceOutcome, String> {
    let form = web_sys::FormData::new().map_err(|_| "could not build upload form".to_owned())?;
    form.append_with_blob_and_filename(RECORDING_FIELD, recording, RECORDING_FILENAME)
        .map_err(|_| "could not attach recording".to_owned())?;

    let resp = gloo_net::http::Request::post(PROCESS_VOICE_RESPONSE)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(failed_message("voice response", resp.status()));
    }
    resp.json::<VoiceOutcome>().await.map_err(|e| e.to_string())
}

/// Post a typed response for feedback via `POST /api/interview` with body
/// `{ "response": …, "name": … }`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn submit_response(name: &str, response: &str) -> Result<InterviewFeedback, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "response": response, "name": name });
        let resp = gloo_net::http::Request::post(INTERVIEW)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("submit response", resp.status()));
        }
        resp.json::<InterviewFeedback>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, response);
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the full transcript and analysis via `POST /api/finalize-interview`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn finalize_interview() -> Result<InterviewSummary, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(FINALIZE_INTERVIEW)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("finalize interview", resp.status()));
        }
        resp.json::<InterviewSummary>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Ask the backend to email the transcript and analysis via
/// `POST /api/send-email`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the backend reports a send failure.
pub async fn send_email(transcript: &str, analysis: &str) -> Result<EmailReceipt, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "transcript": transcript, "analysis": analysis });
        let resp = gloo_net::http::Request::post(SEND_EMAIL)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("send email", resp.status()));
        }
        let receipt = resp.json::<EmailReceipt>().await.map_err(|e| e.to_string())?;
        if let Some(error) = &receipt.error {
            return Err(error.clone());
        }
        Ok(receipt)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (transcript, analysis);
        Err("not available outside the browser".to_owned())
    }
}
