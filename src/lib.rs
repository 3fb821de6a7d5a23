//! bpgen - third-party library graph resolver
//!
//! Turns a dependency tree resolved by the host build tool into a graph of
//! modules with classified artifacts (library vs. code archives, platform
//! versions, native code) and license metadata read from the Gradle artifact
//! cache, plus REUSE attribution texts for each artifact.

pub mod application;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use application::{Attribution, Resolution, ResolveOptions, ResolveUseCase};
pub use config::Config;
pub use domain::entities::{Artifact, Descriptor, Module, ModuleGraph, ResolvedTree};
pub use domain::ports::{ResolveEvent, ResolveEventSink};
pub use domain::value_objects::{ArtifactKind, License, LicenseCatalog, ModuleIdentity};
pub use error::{BpgenError, BpgenResult};
