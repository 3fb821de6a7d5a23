//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// bpgen - third-party library graph and REUSE attribution resolver
#[derive(Parser, Debug)]
#[command(name = "bpgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events and JSON results
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./bpgen.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a dependency tree into a module graph and attribution files
    Resolve {
        /// Resolved tree exported by the build (JSON, `-` for stdin)
        #[arg(short, long, value_name = "FILE")]
        tree: PathBuf,

        /// Directory for `.license` sidecars
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Write the module graph here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        graph: Option<PathBuf>,

        /// Worker threads (0 = available parallelism)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Default target platform version
        #[arg(long)]
        target_sdk: Option<u32>,

        /// Platform minimum carried on the graph
        #[arg(long)]
        min_sdk: Option<u32>,
    },

    /// Classify one artifact from the cache and show its attribution
    Inspect {
        /// Artifact file inside a Gradle files-2.1 cache
        artifact: PathBuf,

        #[arg(long)]
        group: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        version: String,

        /// Override the extension taken from the file name
        #[arg(long)]
        extension: Option<String>,
    },

    /// Print the SPDX identifier for a license URL
    License {
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_with_globals_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bpgen", "resolve", "--tree", "tree.json", "--out", "out", "-j", "4", "--json", "-vv",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Resolve {
                tree, out, jobs, graph, ..
            } => {
                assert_eq!(tree, PathBuf::from("tree.json"));
                assert_eq!(out, Some(PathBuf::from("out")));
                assert_eq!(jobs, Some(4));
                assert!(graph.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn resolve_requires_tree() {
        assert!(Cli::try_parse_from(["bpgen", "resolve"]).is_err());
    }

    #[test]
    fn parses_inspect() {
        let cli = Cli::try_parse_from([
            "bpgen",
            "--config",
            "custom.toml",
            "inspect",
            "core-1.12.0.aar",
            "--group",
            "androidx.core",
            "--name",
            "core",
            "--version",
            "1.12.0",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(
            cli.command,
            Commands::Inspect { ref group, extension: None, .. } if group == "androidx.core"
        ));
    }
}
