//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability. The audio and
//! animation-frame helpers only exist in the `csr` build.

#[cfg(feature = "csr")]
pub mod audio;
pub mod guard;
#[cfg(feature = "csr")]
pub mod raf;
