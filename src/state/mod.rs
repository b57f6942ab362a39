//! Context-provided application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` holds interview-domain data carried between routes; `ui` holds
//! transient presentation flags. Both are provided as `RwSignal`s from the
//! app shell so any page or component can read them via context.

pub mod session;
pub mod ui;
