//! Event Sink Implementations
//!
//! Concrete implementations of BuildEventSink that live outside the UI:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human-readable console sink lives in `ui::reporter`.

mod json;

pub use json::JsonEventSink;
