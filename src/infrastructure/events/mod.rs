//! Event Sink Implementations
//!
//! Concrete implementations of ResolveEventSink:
//! - ConsoleEventSink: Human-readable lines on stderr
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
