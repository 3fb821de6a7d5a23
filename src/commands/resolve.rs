use std::path::PathBuf;

use anyhow::Result;

use crate::application::{ResolveOptions, ResolveUseCase};
use crate::config::Config;
use crate::infrastructure::fs::write_atomic;
use crate::infrastructure::{AttributionWriter, JsonTreeRepository};
use crate::presentation::output::event_sink;

/// `resolve` flags; `None` keeps the configured value.
#[derive(Debug, Clone)]
pub struct ResolveArgs {
    pub tree: PathBuf,
    pub out: Option<PathBuf>,
    pub graph: Option<PathBuf>,
    pub jobs: Option<usize>,
    pub target_sdk: Option<u32>,
    pub min_sdk: Option<u32>,
}

impl ResolveArgs {
    fn options(&self, config: &Config) -> ResolveOptions {
        let mut options = ResolveOptions::from_config(config);
        if let Some(jobs) = self.jobs {
            options = options.with_jobs(jobs);
        }
        if let Some(sdk) = self.target_sdk {
            options = options.with_target_sdk(sdk);
        }
        if let Some(sdk) = self.min_sdk {
            options = options.with_min_sdk(sdk);
        }
        options
    }
}

pub fn cmd_resolve(config: &Config, args: &ResolveArgs, json: bool, verbose: u8) -> Result<()> {
    let sink = event_sink(json, config.output.verbosity.raised_by(verbose));

    let tree = JsonTreeRepository::new().load(&args.tree)?;
    let resolution = ResolveUseCase::new(args.options(config)).execute(&tree, sink.as_ref())?;

    // Only a complete resolution reaches this point; nothing is written before.
    // The graph goes last, so a failed sidecar write leaves no graph behind.
    let graph = serde_json::to_string_pretty(&resolution.graph)?;

    if let Some(out) = &args.out {
        AttributionWriter::new(out).write_all(&resolution.attributions, sink.as_ref())?;
    }

    match &args.graph {
        Some(path) => write_atomic(path, format!("{}\n", graph).as_bytes())?,
        None => println!("{}", graph),
    }

    Ok(())
}
