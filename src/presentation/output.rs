//! Output Rendering
//!
//! Event sink selection and text rendering of command results.

use std::fmt::Write as _;

use crate::config::{ConfigWarning, Verbosity};
use crate::domain::entities::Artifact;
use crate::domain::ports::ResolveEventSink;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink};

/// NDJSON in `--json` mode, console lines otherwise
pub fn event_sink(json: bool, verbosity: Verbosity) -> Box<dyn ResolveEventSink> {
    if json {
        Box::new(JsonEventSink::stderr())
    } else {
        Box::new(ConsoleEventSink::stderr(verbosity))
    }
}

pub fn render_config_warning(warning: &ConfigWarning) -> String {
    let mut line = format!(
        "warning: unknown config key '{}' in {}",
        warning.key,
        warning.file.display()
    );
    if let Some(number) = warning.line {
        let _ = write!(line, ":{}", number);
    }
    if let Some(suggestion) = &warning.suggestion {
        let _ = write!(line, " (did you mean '{}'?)", suggestion);
    }
    line
}

/// Key/value summary of an inspected artifact
pub fn render_artifact(artifact: &Artifact) -> String {
    let descriptor = artifact.descriptor();
    let licenses: Vec<&str> = descriptor
        .unique_licenses()
        .iter()
        .map(|license| license.spdx_id())
        .collect();
    let dependencies: Vec<String> = descriptor
        .dependencies()
        .iter()
        .map(|dependency| dependency.coordinate())
        .collect();

    let rows: [(&str, String); 9] = [
        ("module", artifact.identity().coordinate()),
        ("kind", artifact.kind().to_string()),
        ("target sdk", artifact.target_sdk_version().to_string()),
        (
            "min sdk",
            artifact
                .min_sdk_version()
                .map_or_else(|| "-".to_string(), |v| v.to_string()),
        ),
        (
            "native code",
            if artifact.contains_native_code() {
                "yes"
            } else {
                "no"
            }
            .to_string(),
        ),
        ("descriptor", descriptor.file().display().to_string()),
        ("licenses", or_dash(licenses.join(", "))),
        ("holders", or_dash(descriptor.copyright_holders().join(", "))),
        ("dependencies", or_dash(dependencies.join(", "))),
    ];

    rows.iter()
        .map(|(key, value)| format!("{:<14}{}\n", format!("{}:", key), value))
        .collect()
}

fn or_dash(value: String) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value
    }
}
