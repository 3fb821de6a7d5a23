//! Domain Entities
//!
//! - `ResolvedTree` - The dependency tree supplied by the host build tool
//! - `Descriptor` - A module's `.pom` metadata with parent inheritance applied
//! - `Artifact` - A classified library file
//! - `Module` / `ModuleGraph` - The graph handed to the build-file emitter

mod artifact;
mod descriptor;
mod module;
mod module_graph;
mod resolved_tree;

pub use artifact::Artifact;
pub use descriptor::Descriptor;
pub use module::Module;
pub use module_graph::ModuleGraph;
pub use resolved_tree::{NodeId, ResolvedArtifact, ResolvedNode, ResolvedTree};
