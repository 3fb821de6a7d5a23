//! Resolve Options

use std::collections::BTreeMap;

use crate::config::{Config, DEFAULT_MIN_SDK, DEFAULT_TARGET_SDK};
use crate::domain::value_objects::ModuleQuirk;

/// Options for the resolve use case
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveOptions {
    /// Target platform version for archives that do not declare one
    pub target_sdk: u32,
    /// Run-wide platform minimum, carried on the graph
    pub min_sdk: u32,
    /// Worker pool size; 0 uses the available parallelism
    pub jobs: usize,
    /// Per-module quirks keyed by `group:name`
    pub quirks: BTreeMap<String, ModuleQuirk>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self {
            target_sdk: DEFAULT_TARGET_SDK,
            min_sdk: DEFAULT_MIN_SDK,
            jobs: 0,
            quirks: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            target_sdk: config.platform.target_sdk,
            min_sdk: config.platform.min_sdk,
            jobs: config.resolve.jobs,
            quirks: config.quirks.clone(),
        }
    }

    pub fn with_target_sdk(mut self, target_sdk: u32) -> Self {
        self.target_sdk = target_sdk;
        self
    }

    pub fn with_min_sdk(mut self, min_sdk: u32) -> Self {
        self.min_sdk = min_sdk;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_quirk(mut self, key: impl Into<String>, quirk: ModuleQuirk) -> Self {
        self.quirks.insert(key.into(), quirk);
        self
    }
}
