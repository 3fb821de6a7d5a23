//! Artifact entity - a classified library file
//!
//! Combines what the archive inspector learned from the file itself with the
//! module's resolved descriptor.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::Descriptor;
use crate::domain::value_objects::{ArtifactKind, ModuleIdentity};
use crate::error::{BpgenError, BpgenResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    file: PathBuf,
    kind: ArtifactKind,
    identity: ModuleIdentity,
    descriptor: Descriptor,
    target_sdk_version: u32,
    min_sdk_version: Option<u32>,
    contains_native_code: bool,
}

impl Artifact {
    /// Fails with `NativeCodeOnCodeArchive` when native code is claimed for a
    /// kind that cannot carry it.
    pub fn new(
        file: impl Into<PathBuf>,
        kind: ArtifactKind,
        identity: ModuleIdentity,
        descriptor: Descriptor,
        target_sdk_version: u32,
        min_sdk_version: Option<u32>,
        contains_native_code: bool,
    ) -> BpgenResult<Self> {
        let file = file.into();
        if contains_native_code && !kind.can_contain_native_code() {
            return Err(BpgenError::NativeCodeOnCodeArchive { file });
        }

        Ok(Self {
            file,
            kind,
            identity,
            descriptor,
            target_sdk_version,
            min_sdk_version,
            contains_native_code,
        })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn identity(&self) -> &ModuleIdentity {
        &self.identity
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn target_sdk_version(&self) -> u32 {
        self.target_sdk_version
    }

    pub fn min_sdk_version(&self) -> Option<u32> {
        self.min_sdk_version
    }

    pub fn contains_native_code(&self) -> bool {
        self.contains_native_code
    }

    /// Name of the REUSE sidecar for this artifact, e.g. `core-1.12.0.aar.license`.
    pub fn sidecar_name(&self) -> String {
        let file_name = self
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.{}", self.identity.name(), self.kind));
        format!("{}.license", file_name)
    }
}
