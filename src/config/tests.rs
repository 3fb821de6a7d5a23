//! Tests for the config module

use super::loader::{apply_overrides, discover};
use super::types::*;
use crate::domain::value_objects::ModuleQuirk;
use crate::error::BpgenError;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.platform.target_sdk, 34);
    assert_eq!(config.platform.min_sdk, 21);
    assert_eq!(config.resolve.jobs, 0);
    assert_eq!(config.output.verbosity, Verbosity::Normal);
    assert!(config.quirks.is_empty());
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[platform]
target_sdk = 33
min_sdk = 23

[resolve]
jobs = 4

[output]
verbosity = "verbose"

[quirks]
"com.google.guava:listenablefuture" = "ignore"
"org.jetbrains.kotlin:kotlin-bom" = "inherit-dependencies"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.platform.target_sdk, 33);
    assert_eq!(config.platform.min_sdk, 23);
    assert_eq!(config.resolve.jobs, 4);
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
    assert_eq!(
        config.quirks.get("com.google.guava:listenablefuture"),
        Some(&ModuleQuirk::Ignore)
    );
    assert_eq!(
        config.quirks.get("org.jetbrains.kotlin:kotlin-bom"),
        Some(&ModuleQuirk::InheritDependencies)
    );
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config: Config = toml::from_str("[platform]\nmin_sdk = 26\n").unwrap();

    assert_eq!(config.platform.min_sdk, 26);
    assert_eq!(config.platform.target_sdk, DEFAULT_TARGET_SDK);
}

#[test]
fn test_unknown_keys_become_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bpgen.toml");
    fs::write(&path, "[platform]\ntarget_skd = 30\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.platform.target_sdk, DEFAULT_TARGET_SDK);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "target_skd");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("target_sdk"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bpgen.toml");
    fs::write(&path, "[output]\nverbosity = \"loud\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, BpgenError::InvalidConfig { .. }), "{err}");
}

#[test]
fn test_unknown_quirk_is_an_error() {
    let err = toml::from_str::<Config>("[quirks]\n\"g:n\" = \"skip\"\n");
    assert!(err.is_err());
}

#[test]
fn test_discover_prefers_explicit_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bpgen.toml"), "[resolve]\njobs = 2\n").unwrap();
    let explicit = dir.path().join("custom.toml");
    fs::write(&explicit, "[resolve]\njobs = 7\n").unwrap();

    let (config, _) = discover(Some(&explicit), dir.path()).unwrap();
    assert_eq!(config.resolve.jobs, 7);
}

#[test]
fn test_discover_reads_project_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bpgen.toml"), "[resolve]\njobs = 2\n").unwrap();

    let (config, warnings) = discover(None, dir.path()).unwrap();
    assert_eq!(config.resolve.jobs, 2);
    assert!(warnings.is_empty());
}

#[test]
fn test_discover_missing_explicit_file_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(matches!(
        discover(Some(&missing), dir.path()),
        Err(BpgenError::Io(_))
    ));
}

#[test]
fn test_env_overrides() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("BPGEN_TARGET_SDK", "30"),
        ("BPGEN_MIN_SDK", " 24 "),
        ("BPGEN_JOBS", "3"),
        ("BPGEN_VERBOSITY", "DEBUG"),
    ]);

    let config = apply_overrides(Config::default(), |key| {
        env.get(key).map(|v| v.to_string())
    });

    assert_eq!(config.platform.target_sdk, 30);
    assert_eq!(config.platform.min_sdk, 24);
    assert_eq!(config.resolve.jobs, 3);
    assert_eq!(config.output.verbosity, Verbosity::Debug);
}

#[test]
fn test_unparsable_env_values_are_ignored() {
    let config = apply_overrides(Config::default(), |key| match key {
        "BPGEN_JOBS" => Some("many".to_string()),
        "BPGEN_VERBOSITY" => Some("loud".to_string()),
        _ => None,
    });

    assert_eq!(config, Config::default());
}

#[test]
fn test_verbosity_raised_by_flags() {
    assert_eq!(Verbosity::Normal.raised_by(0), Verbosity::Normal);
    assert_eq!(Verbosity::Normal.raised_by(1), Verbosity::Verbose);
    assert_eq!(Verbosity::Quiet.raised_by(2), Verbosity::Verbose);
    assert_eq!(Verbosity::Normal.raised_by(5), Verbosity::Debug);
}
