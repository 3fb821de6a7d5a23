//! Error types for bpgen
//!
//! Every variant is fatal: the whole run aborts and nothing is emitted.
//! Recoverable conditions are reported through the event sink instead.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::value_objects::ModuleIdentity;

/// Result type alias for bpgen operations
pub type BpgenResult<T> = Result<T, BpgenError>;

/// Main error type for bpgen operations
#[derive(Error, Debug)]
pub enum BpgenError {
    /// Artifact file extension is neither a library nor a code archive
    #[error("unknown artifact extension '{extension}' for artifact {file}")]
    UnknownArtifactKind { extension: String, file: PathBuf },

    /// No descriptor (.pom) next to an artifact or for a parent
    #[error("no descriptor found for {module} in {dir}")]
    DescriptorNotFound { module: String, dir: PathBuf },

    /// `<parent>` lacks one of groupId/artifactId/version
    #[error("{field} not found for {module}'s parent in {file}")]
    MalformedParentReference {
        module: String,
        field: &'static str,
        file: PathBuf,
    },

    /// `<dependency>` lacks one of groupId/artifactId/version
    #[error("{field} not found for {module}'s dependency in {file}")]
    MalformedDependencyReference {
        module: String,
        field: &'static str,
        file: PathBuf,
    },

    /// Native code flagged on an archive kind that cannot carry it
    #[error("artifact {file} is a code archive but was flagged as containing native code")]
    NativeCodeOnCodeArchive { file: PathBuf },

    /// Descriptor XML could not be parsed
    #[error("invalid descriptor {file}: {message}")]
    InvalidDescriptor { file: PathBuf, message: String },

    /// Embedded platform manifest could not be parsed
    #[error("invalid manifest in {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Library archive could not be opened or read
    #[error("cannot read archive {file}: {source}")]
    Archive {
        file: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// An artifact or descriptor file could not be read
    #[error("cannot read {file}: {source}")]
    ReadFile {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Externally supplied dependency tree is inconsistent
    #[error("invalid dependency tree: {message}")]
    InvalidTree { message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Worker pool could not be created
    #[error("cannot start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BpgenError {
    pub(crate) fn read_file(file: &Path, source: std::io::Error) -> Self {
        BpgenError::ReadFile {
            file: file.to_path_buf(),
            source,
        }
    }

    pub(crate) fn descriptor_not_found(module: &ModuleIdentity, dir: impl Into<PathBuf>) -> Self {
        BpgenError::DescriptorNotFound {
            module: module.coordinate(),
            dir: dir.into(),
        }
    }
}
