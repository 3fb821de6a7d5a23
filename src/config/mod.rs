//! Configuration module for bpgen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BPGEN_*)
//! 3. `--config` file, else `./bpgen.toml`, else `~/.config/bpgen/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    Config, OutputConfig, PlatformConfig, ResolveConfig, Verbosity, DEFAULT_MIN_SDK,
    DEFAULT_TARGET_SDK,
};
