//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ModuleQuirk;
use crate::error::BpgenResult;

use super::loader::{self, ConfigWarning};

pub const DEFAULT_TARGET_SDK: u32 = 34;
pub const DEFAULT_MIN_SDK: u32 = 21;

/// Platform API levels supplied once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Used for archives whose manifest does not declare a target
    #[serde(default = "default_target_sdk")]
    pub target_sdk: u32,

    #[serde(default = "default_min_sdk")]
    pub min_sdk: u32,
}

fn default_target_sdk() -> u32 {
    DEFAULT_TARGET_SDK
}

fn default_min_sdk() -> u32 {
    DEFAULT_MIN_SDK
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            target_sdk: DEFAULT_TARGET_SDK,
            min_sdk: DEFAULT_MIN_SDK,
        }
    }
}

/// Resolution configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResolveConfig {
    /// Worker threads for per-artifact work; 0 picks the available parallelism
    #[serde(default)]
    pub jobs: usize,
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// `-v` count on top of the configured level, saturating at `Debug`.
    pub fn raised_by(self, count: u8) -> Self {
        (0..count).fold(self, |level, _| match level {
            Verbosity::Quiet => Verbosity::Normal,
            Verbosity::Normal => Verbosity::Verbose,
            Verbosity::Verbose | Verbosity::Debug => Verbosity::Debug,
        })
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub platform: PlatformConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Per-module handling keyed by `group:name`
    #[serde(default)]
    pub quirks: BTreeMap<String, ModuleQuirk>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BpgenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BpgenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit file, then `./bpgen.toml`, then the user config, then defaults
    pub fn discover(
        explicit: Option<&Path>,
        working_dir: &Path,
    ) -> BpgenResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, working_dir)
    }

    /// Apply environment variable overrides (BPGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
