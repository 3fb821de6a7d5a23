//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Does NOT write output; infrastructure does
//!
//! ## Use Cases
//!
//! - `ResolveUseCase` - Resolved tree to module graph and attribution texts

pub mod resolve;

pub use resolve::{Attribution, Resolution, ResolveOptions, ResolveUseCase};
