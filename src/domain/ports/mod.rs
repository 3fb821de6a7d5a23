//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod resolve_events;

pub use resolve_events::{
    emit, CollectingEventSink, NoopEventSink, ResolveEvent, ResolveEventSink, Severity,
};
