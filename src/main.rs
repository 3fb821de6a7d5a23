//! bpgen CLI
//!
//! Usage: bpgen <COMMAND>
//!
//! Commands:
//!   resolve  Resolve a dependency tree into a module graph and attribution files
//!   inspect  Classify one artifact and show its attribution
//!   license  Print the SPDX identifier for a license URL

use anyhow::Result;
use clap::Parser;

use bpgen::presentation::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    bpgen::commands::dispatch(cli)
}
