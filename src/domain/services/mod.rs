//! Domain Services
//!
//! The resolution steps applied to one resolved tree:
//!
//! - `DependencyGraphBuilder` - tree walk, version collapse, promotion, quirks
//! - `ArchiveInspector` - artifact classification and manifest scan
//! - `DescriptorResolver` - `.pom` lookup with parent inheritance
//! - `CopyrightComposer` - SPDX attribution text

mod archive_inspector;
mod copyright_composer;
mod descriptor_resolver;
mod graph_builder;
mod pom_document;

pub use archive_inspector::{
    ArchiveInspection, ArchiveInspector, MANIFEST_ENTRY, NATIVE_LIBRARY_PREFIX,
};
pub use copyright_composer::CopyrightComposer;
pub use descriptor_resolver::DescriptorResolver;
pub use graph_builder::{DependencyGraphBuilder, PlannedModule};
pub use pom_document::{Coordinates, PomDocument};
