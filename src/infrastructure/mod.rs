//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and all writes to disk.
//!
//! ## Structure
//!
//! - `events/` - Event sinks (console, NDJSON)
//! - `repositories/` - Resolved tree loading
//! - `fs/` - Attribution sidecar writer

pub mod events;
pub mod fs;
pub mod repositories;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::AttributionWriter;
pub use repositories::JsonTreeRepository;
