//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for automation
//!
//! The human-readable sink lives with the CLI views.

mod json;

pub use json::JsonEventSink;
