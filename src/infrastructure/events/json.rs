//! JSON Event Sink
//!
//! Outputs resolve events as NDJSON for CI/automation consumption.

use crate::domain::ports::{ResolveEvent, ResolveEventSink};
use serde_json::{json, Map, Value};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Events go to stderr so stdout stays free for the graph
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn fields(event: &ResolveEvent) -> Value {
    match event {
        ResolveEvent::ModuleDiscovered { module, promoted } => json!({
            "module": module,
            "promoted": promoted,
        }),
        ResolveEvent::MultipleArtifacts {
            module,
            chosen,
            count,
        }
        | ResolveEvent::MultipleDescriptors {
            module,
            chosen,
            count,
        } => json!({
            "module": module,
            "chosen": chosen.display().to_string(),
            "count": count,
        }),
        ResolveEvent::FieldInherited {
            module,
            field,
            parent,
        } => json!({
            "module": module,
            "field": field,
            "parent": parent,
        }),
        ResolveEvent::FieldAbsent { module, field } => json!({
            "module": module,
            "field": field,
        }),
        ResolveEvent::UnknownLicenseUrl { module, url } => json!({
            "module": module,
            "url": url,
        }),
        ResolveEvent::InvalidInceptionYear { module, value } => json!({
            "module": module,
            "value": value,
        }),
        ResolveEvent::InvalidPlatformVersion {
            file,
            attribute,
            value,
        } => json!({
            "file": file.display().to_string(),
            "attribute": attribute,
            "value": value,
        }),
        ResolveEvent::ArtifactClassified {
            module,
            kind,
            target_sdk,
            native_code,
        } => json!({
            "module": module,
            "kind": kind,
            "target_sdk": target_sdk,
            "native_code": native_code,
        }),
        ResolveEvent::LicenseUrlMissing { module }
        | ResolveEvent::NoLicenses { module }
        | ResolveEvent::NoCopyrightHolders { module } => json!({ "module": module }),
        ResolveEvent::QuirkApplied { module, quirk } => json!({
            "module": module,
            "quirk": quirk,
        }),
        ResolveEvent::AttributionWritten { path } => json!({
            "path": path.display().to_string(),
        }),
        ResolveEvent::Completed {
            module_count,
            attribution_count,
        } => json!({
            "status": "success",
            "modules": module_count,
            "attributions": attribution_count,
        }),
    }
}

impl ResolveEventSink for JsonEventSink {
    fn on_event(&self, event: ResolveEvent) {
        let mut object = Map::new();
        object.insert("event".to_string(), json!(event.name()));
        object.insert("level".to_string(), json!(event.severity().as_str()));
        object.insert("command".to_string(), json!("resolve"));
        if let Value::Object(extra) = fields(&event) {
            object.extend(extra);
        }
        object.insert("message".to_string(), json!(event.to_string()));

        self.write_event(Value::Object(object));
    }
}
