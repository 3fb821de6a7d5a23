//! Module Quirk Value Object
//!
//! How a module should be treated when the graph is handed to the emitter.

use serde::{Deserialize, Serialize};

/// Per-module override configured under `[quirks]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleQuirk {
    /// Pretend the module doesn't exist at all (BOM and platform modules).
    Ignore,
    /// Drop the module but hand its dependencies to its dependants.
    InheritDependencies,
}

impl ModuleQuirk {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleQuirk::Ignore => "ignore",
            ModuleQuirk::InheritDependencies => "inherit-dependencies",
        }
    }
}
