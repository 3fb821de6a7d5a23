//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BpgenError, BpgenResult};

use super::types::{Config, Verbosity};

/// Project-level config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "bpgen.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BpgenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BpgenError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the first config file that applies. An explicit path must exist;
/// discovered files are only used when present. Env overrides are applied
/// last.
pub fn discover(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> BpgenResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [
            Some(working_dir.join(PROJECT_CONFIG_FILE)),
            user_config_path(),
        ]
        .into_iter()
        .flatten()
        .find(|path| path.is_file()),
    };

    let (config, warnings) = match candidate {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// `~/.config/bpgen/config.toml` (platform equivalent)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bpgen").join("config.toml"))
}

/// Apply environment variable overrides (BPGEN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Overrides from an arbitrary lookup. Values that do not parse are ignored.
pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(sdk) = lookup("BPGEN_TARGET_SDK").and_then(|v| v.trim().parse().ok()) {
        config.platform.target_sdk = sdk;
    }

    if let Some(sdk) = lookup("BPGEN_MIN_SDK").and_then(|v| v.trim().parse().ok()) {
        config.platform.min_sdk = sdk;
    }

    if let Some(jobs) = lookup("BPGEN_JOBS").and_then(|v| v.trim().parse().ok()) {
        config.resolve.jobs = jobs;
    }

    if let Some(verbosity) = lookup("BPGEN_VERBOSITY").and_then(|v| Verbosity::parse(&v)) {
        config.output.verbosity = verbosity;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "platform",
        "target_sdk",
        "min_sdk",
        "resolve",
        "jobs",
        "output",
        "verbosity",
        "quirks",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
