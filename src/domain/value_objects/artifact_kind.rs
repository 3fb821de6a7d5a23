//! Artifact Kind Value Object
//!
//! Packaging classification of a library file, derived from its extension.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Packaging classification of an artifact file
///
/// - `LibraryArchive`: compiled code plus platform resources, optionally native code (`.aar`)
/// - `CodeArchive`: compiled code only (`.jar`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    LibraryArchive,
    CodeArchive,
}

impl ArtifactKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::LibraryArchive => "aar",
            ArtifactKind::CodeArchive => "jar",
        }
    }

    /// Classify an extension; `None` for anything that is not `aar`/`jar`.
    pub fn from_extension(extension: &str) -> Option<Self> {
        [ArtifactKind::LibraryArchive, ArtifactKind::CodeArchive]
            .into_iter()
            .find(|kind| kind.extension() == extension)
    }

    pub fn can_contain_native_code(&self) -> bool {
        matches!(self, ArtifactKind::LibraryArchive)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
