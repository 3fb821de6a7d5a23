//! Resolve Event Port
//!
//! The log sink handed to every resolver and inspector call. Non-fatal
//! conditions (unknown licenses, missing fields, ambiguous files) are reported
//! here; fatal ones are returned as errors.

use std::fmt;
use std::path::PathBuf;

/// Importance of a resolve event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
        }
    }
}

/// Event emitted during resolution
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveEvent {
    /// A distinct module was found in the resolved tree
    ModuleDiscovered { module: String, promoted: bool },

    /// A node packages several files; only the first one is used
    MultipleArtifacts {
        module: String,
        chosen: PathBuf,
        count: usize,
    },

    /// Several descriptors live in one version directory
    MultipleDescriptors {
        module: String,
        chosen: PathBuf,
        count: usize,
    },

    /// A descriptor field was taken from a parent descriptor
    FieldInherited {
        module: String,
        field: &'static str,
        parent: String,
    },

    /// A descriptor field is absent and there is no parent to ask
    FieldAbsent { module: String, field: &'static str },

    /// A `<license>` entry has no `<url>`
    LicenseUrlMissing { module: String },

    /// A license URL is not in the catalog and was dropped
    UnknownLicenseUrl { module: String, url: String },

    /// `<inceptionYear>` is not a number
    InvalidInceptionYear { module: String, value: String },

    /// A `uses-sdk` attribute is not a number
    InvalidPlatformVersion {
        file: PathBuf,
        attribute: &'static str,
        value: String,
    },

    /// An artifact was classified
    ArtifactClassified {
        module: String,
        kind: String,
        target_sdk: u32,
        native_code: bool,
    },

    /// A module has no usable license
    NoLicenses { module: String },

    /// A module has neither organization nor developers
    NoCopyrightHolders { module: String },

    /// A configured quirk removed a module from the graph
    QuirkApplied { module: String, quirk: String },

    /// A `.license` sidecar was written
    AttributionWritten { path: PathBuf },

    /// Resolution finished
    Completed {
        module_count: usize,
        attribution_count: usize,
    },
}

impl ResolveEvent {
    pub fn severity(&self) -> Severity {
        match self {
            ResolveEvent::ModuleDiscovered { .. }
            | ResolveEvent::FieldInherited { .. }
            | ResolveEvent::FieldAbsent { .. }
            | ResolveEvent::LicenseUrlMissing { .. }
            | ResolveEvent::ArtifactClassified { .. } => Severity::Debug,

            ResolveEvent::UnknownLicenseUrl { .. }
            | ResolveEvent::NoLicenses { .. }
            | ResolveEvent::NoCopyrightHolders { .. }
            | ResolveEvent::QuirkApplied { .. }
            | ResolveEvent::AttributionWritten { .. }
            | ResolveEvent::Completed { .. } => Severity::Info,

            ResolveEvent::MultipleArtifacts { .. }
            | ResolveEvent::MultipleDescriptors { .. }
            | ResolveEvent::InvalidInceptionYear { .. }
            | ResolveEvent::InvalidPlatformVersion { .. } => Severity::Warn,
        }
    }

    /// Short machine-readable event name
    pub fn name(&self) -> &'static str {
        match self {
            ResolveEvent::ModuleDiscovered { .. } => "module_discovered",
            ResolveEvent::MultipleArtifacts { .. } => "multiple_artifacts",
            ResolveEvent::MultipleDescriptors { .. } => "multiple_descriptors",
            ResolveEvent::FieldInherited { .. } => "field_inherited",
            ResolveEvent::FieldAbsent { .. } => "field_absent",
            ResolveEvent::LicenseUrlMissing { .. } => "license_url_missing",
            ResolveEvent::UnknownLicenseUrl { .. } => "unknown_license_url",
            ResolveEvent::InvalidInceptionYear { .. } => "invalid_inception_year",
            ResolveEvent::InvalidPlatformVersion { .. } => "invalid_platform_version",
            ResolveEvent::ArtifactClassified { .. } => "artifact_classified",
            ResolveEvent::NoLicenses { .. } => "no_licenses",
            ResolveEvent::NoCopyrightHolders { .. } => "no_copyright_holders",
            ResolveEvent::QuirkApplied { .. } => "quirk_applied",
            ResolveEvent::AttributionWritten { .. } => "attribution_written",
            ResolveEvent::Completed { .. } => "complete",
        }
    }
}

impl fmt::Display for ResolveEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveEvent::ModuleDiscovered { module, promoted } => {
                if *promoted {
                    write!(f, "Found {} (promoted to first level)", module)
                } else {
                    write!(f, "Found {}", module)
                }
            }
            ResolveEvent::MultipleArtifacts {
                module,
                chosen,
                count,
            } => write!(
                f,
                "{} packages {} artifacts, using {}",
                module,
                count,
                chosen.display()
            ),
            ResolveEvent::MultipleDescriptors {
                module,
                chosen,
                count,
            } => write!(
                f,
                "Multiple POMs ({}) found for {}, using {}",
                count,
                module,
                chosen.display()
            ),
            ResolveEvent::FieldInherited {
                module,
                field,
                parent,
            } => write!(f, "{} of {} inherited from {}", field, module, parent),
            ResolveEvent::FieldAbsent { module, field } => {
                write!(f, "{} not found for {} and no parent available", field, module)
            }
            ResolveEvent::LicenseUrlMissing { module } => {
                write!(f, "License URL not found for {}", module)
            }
            ResolveEvent::UnknownLicenseUrl { module, url } => {
                write!(f, "Unknown license URL {} for {}", url, module)
            }
            ResolveEvent::InvalidInceptionYear { module, value } => {
                write!(f, "Invalid inception year '{}' for {}", value, module)
            }
            ResolveEvent::InvalidPlatformVersion {
                file,
                attribute,
                value,
            } => write!(
                f,
                "Invalid {} '{}' in {}",
                attribute,
                value,
                file.display()
            ),
            ResolveEvent::ArtifactClassified {
                module,
                kind,
                target_sdk,
                native_code,
            } => write!(
                f,
                "{}: {} (target SDK {}{})",
                module,
                kind,
                target_sdk,
                if *native_code { ", native code" } else { "" }
            ),
            ResolveEvent::NoLicenses { module } => write!(f, "No licenses found for {}", module),
            ResolveEvent::NoCopyrightHolders { module } => {
                write!(f, "No copyright holders found for {}", module)
            }
            ResolveEvent::QuirkApplied { module, quirk } => {
                write!(f, "Applied quirk {} to {}", quirk, module)
            }
            ResolveEvent::AttributionWritten { path } => write!(f, "Wrote {}", path.display()),
            ResolveEvent::Completed {
                module_count,
                attribution_count,
            } => write!(
                f,
                "Resolved {} modules, {} attribution files",
                module_count, attribution_count
            ),
        }
    }
}

/// Trait for receiving resolve events
///
/// Implementations:
/// - `ConsoleEventSink`: Human-readable lines on stderr
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: Silent operation
/// - `CollectingEventSink`: In-memory, for tests
///
/// Sinks are shared across worker threads, so implementations must write
/// each event as one unit.
pub trait ResolveEventSink: Send + Sync {
    fn on_event(&self, event: ResolveEvent);

    /// Whether events of this severity are wanted at all
    fn enabled(&self, _severity: Severity) -> bool {
        true
    }
}

/// Forward to `on_event` only when the sink wants this severity.
pub fn emit(sink: &dyn ResolveEventSink, event: ResolveEvent) {
    if sink.enabled(event.severity()) {
        sink.on_event(event);
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ResolveEventSink for NoopEventSink {
    fn on_event(&self, _event: ResolveEvent) {}

    fn enabled(&self, _severity: Severity) -> bool {
        false
    }
}

/// Sink that keeps every event in memory
#[derive(Default)]
pub struct CollectingEventSink {
    events: std::sync::Mutex<Vec<ResolveEvent>>,
}

impl CollectingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ResolveEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl ResolveEventSink for CollectingEventSink {
    fn on_event(&self, event: ResolveEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
