//! Common test utilities for bpgen CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working and config directories plus a CLI runner
//! - `GradleCache`: An on-disk `files-2.1` style artifact cache
//! - Fixtures: Reusable POM fragments

#![allow(dead_code)]

pub mod cache;
pub mod env;
pub mod fixtures;

pub use cache::*;
pub use env::*;
pub use fixtures::*;
