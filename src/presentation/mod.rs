//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Picking the event sink for the output mode
//! - Text rendering of command results
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `output` - Output rendering

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands};
