use std::path::Path;

use anyhow::Result;

use crate::application::{ResolveOptions, ResolveUseCase};
use crate::config::Config;
use crate::domain::value_objects::ModuleIdentity;
use crate::presentation::output::{event_sink, render_artifact};

pub fn cmd_inspect(
    config: &Config,
    artifact: &Path,
    (group, name, version): (&str, &str, &str),
    extension: Option<&str>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let sink = event_sink(json, config.output.verbosity.raised_by(verbose));
    let identity = ModuleIdentity::new(group, name, version);
    let extension = match extension {
        Some(extension) => extension.to_string(),
        None => artifact
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let use_case = ResolveUseCase::new(ResolveOptions::from_config(config));
    let (artifact, attribution) =
        use_case.classify(artifact, &extension, &identity, sink.as_ref())?;

    if json {
        let output = serde_json::json!({
            "artifact": artifact,
            "sidecar": artifact.sidecar_name(),
            "attribution": attribution,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_artifact(&artifact));
        if !attribution.is_empty() {
            println!();
            print!("{}", attribution);
        }
    }

    Ok(())
}
