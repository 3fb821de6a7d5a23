//! Command handlers
//!
//! One function per subcommand. Handlers return `anyhow::Result`; a failed
//! command writes nothing and exits non-zero.

mod inspect;
mod license;
mod resolve;

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::presentation::output::render_config_warning;
use crate::presentation::{Cli, Commands};

pub use inspect::cmd_inspect;
pub use license::cmd_license;
pub use resolve::{cmd_resolve, ResolveArgs};

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resolve {
            tree,
            out,
            graph,
            jobs,
            target_sdk,
            min_sdk,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let args = ResolveArgs {
                tree,
                out,
                graph,
                jobs,
                target_sdk,
                min_sdk,
            };
            cmd_resolve(&config, &args, cli.json, cli.verbose)
        }
        Commands::Inspect {
            artifact,
            group,
            name,
            version,
            extension,
        } => {
            let config = load_config(cli.config.as_deref())?;
            cmd_inspect(
                &config,
                &artifact,
                (group.as_str(), name.as_str(), version.as_str()),
                extension.as_deref(),
                cli.json,
                cli.verbose,
            )
        }
        Commands::License { url } => cmd_license(&url, cli.json),
    }
}

/// Discover the configuration and report unknown keys on stderr.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let working_dir = std::env::current_dir().context("cannot determine working directory")?;
    let (config, warnings) = Config::discover(explicit, &working_dir)?;

    for warning in &warnings {
        eprintln!("{}", render_config_warning(warning));
    }

    Ok(config)
}
