//! Domain Layer
//!
//! Turns a resolved dependency tree into a module graph with classified
//! artifacts and attribution metadata.
//!
//! ## Structure
//!
//! - `entities/` - Resolved tree, descriptors, artifacts, the module graph
//! - `value_objects/` - Identities, licenses, artifact kinds, quirks
//! - `services/` - Graph builder, archive inspector, descriptor resolver, composer
//! - `ports/` - The resolve event sink
//!
//! Services read the artifact cache but never write to it.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
