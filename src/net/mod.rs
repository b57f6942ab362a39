//! Networking modules for the interview REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls, `types` defines the wire DTOs. There is no
//! realtime channel: the trainer speaks plain request/response JSON, plus
//! one multipart upload for recorded audio.

pub mod api;
pub mod types;
