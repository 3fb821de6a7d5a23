//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact_kind;
mod license;
mod module_identity;
mod module_quirk;

pub use artifact_kind::ArtifactKind;
pub use license::{dedup_licenses, License, LicenseCatalog};
pub use module_identity::ModuleIdentity;
pub use module_quirk::ModuleQuirk;
