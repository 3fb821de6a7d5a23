//! Archive inspector
//!
//! Classifies an artifact file by extension and, for library archives, reads
//! the platform versions declared in the embedded manifest and checks for
//! bundled native libraries.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::domain::ports::{emit, ResolveEvent, ResolveEventSink};
use crate::domain::value_objects::ArtifactKind;
use crate::error::{BpgenError, BpgenResult};

/// Manifest entry inside a library archive
pub const MANIFEST_ENTRY: &str = "AndroidManifest.xml";

/// Entries under this prefix are native libraries
pub const NATIVE_LIBRARY_PREFIX: &str = "jni/";

/// What the inspector learned about one artifact file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveInspection {
    pub kind: ArtifactKind,
    pub target_sdk_version: u32,
    pub min_sdk_version: Option<u32>,
    pub contains_native_code: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ArchiveInspector {
    default_target_sdk: u32,
}

impl ArchiveInspector {
    pub fn new(default_target_sdk: u32) -> Self {
        Self { default_target_sdk }
    }

    pub fn classify(file: &Path, extension: &str) -> BpgenResult<ArtifactKind> {
        ArtifactKind::from_extension(extension).ok_or_else(|| BpgenError::UnknownArtifactKind {
            extension: extension.to_string(),
            file: file.to_path_buf(),
        })
    }

    pub fn inspect(
        &self,
        file: &Path,
        extension: &str,
        sink: &dyn ResolveEventSink,
    ) -> BpgenResult<ArchiveInspection> {
        let kind = Self::classify(file, extension)?;

        match kind {
            ArtifactKind::LibraryArchive => self.scan_library_archive(file, sink),
            ArtifactKind::CodeArchive => Ok(ArchiveInspection {
                kind,
                target_sdk_version: self.default_target_sdk,
                min_sdk_version: None,
                contains_native_code: false,
            }),
        }
    }

    /// Visits every entry. The manifest check and the native-library check
    /// are independent, so the scan never stops early.
    fn scan_library_archive(
        &self,
        file: &Path,
        sink: &dyn ResolveEventSink,
    ) -> BpgenResult<ArchiveInspection> {
        let archive_error = |source| BpgenError::Archive {
            file: file.to_path_buf(),
            source,
        };

        let reader = File::open(file)
            .map(BufReader::new)
            .map_err(|e| BpgenError::read_file(file, e))?;
        let mut archive = zip::ZipArchive::new(reader).map_err(archive_error)?;

        let mut target_sdk_version = self.default_target_sdk;
        let mut min_sdk_version = None;
        let mut contains_native_code = false;

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index).map_err(archive_error)?;
            let name = entry.name().to_string();

            if name == MANIFEST_ENTRY {
                let mut content = String::new();
                entry
                    .read_to_string(&mut content)
                    .map_err(|e| BpgenError::InvalidManifest {
                        file: file.to_path_buf(),
                        message: e.to_string(),
                    })?;
                let versions = parse_manifest(&content, file, sink)?;
                if let Some(target) = versions.target_sdk_version {
                    target_sdk_version = target;
                }
                min_sdk_version = versions.min_sdk_version.or(min_sdk_version);
            }

            if name.starts_with(NATIVE_LIBRARY_PREFIX) {
                contains_native_code = true;
            }
        }

        Ok(ArchiveInspection {
            kind: ArtifactKind::LibraryArchive,
            target_sdk_version,
            min_sdk_version,
            contains_native_code,
        })
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct DeclaredVersions {
    target_sdk_version: Option<u32>,
    min_sdk_version: Option<u32>,
}

/// Read `targetSdkVersion`/`minSdkVersion` from the first `<uses-sdk>`.
///
/// A missing element or attribute leaves the value unset; a non-numeric
/// value (e.g. an unexpanded placeholder) is reported and treated as unset.
fn parse_manifest(
    content: &str,
    file: &Path,
    sink: &dyn ResolveEventSink,
) -> BpgenResult<DeclaredVersions> {
    let document =
        roxmltree::Document::parse(content).map_err(|e| BpgenError::InvalidManifest {
            file: file.to_path_buf(),
            message: e.to_string(),
        })?;

    let Some(uses_sdk) = document
        .root_element()
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == "uses-sdk")
    else {
        return Ok(DeclaredVersions::default());
    };

    let read = |attribute: &'static str| -> Option<u32> {
        let value = uses_sdk
            .attributes()
            .find(|a| a.name() == attribute)?
            .value()
            .trim();
        match value.parse() {
            Ok(version) => Some(version),
            Err(_) => {
                emit(
                    sink,
                    ResolveEvent::InvalidPlatformVersion {
                        file: file.to_path_buf(),
                        attribute,
                        value: value.to_string(),
                    },
                );
                None
            }
        }
    };

    Ok(DeclaredVersions {
        target_sdk_version: read("targetSdkVersion"),
        min_sdk_version: read("minSdkVersion"),
    })
}
