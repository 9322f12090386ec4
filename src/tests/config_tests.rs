// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use std::path::Path;

use crate::config::{
    dictionary::MAX_PATTERN_LEN_LIMIT, ConfigLoader, DictionaryConfig, LimitsConfig, LogConfig,
    MaukaConfig, Validate,
};
use crate::data_structures::dictionary::{DictionaryKind, DictionaryOptions};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = MaukaConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.dictionary.kind, DictionaryKind::Compressed);
    assert_eq!(config.dictionary.options(), DictionaryOptions::default());
    assert!(config.limits.worker_threads >= 1);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = MaukaConfig::default();

    config.dictionary.max_pattern_len = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    config.dictionary.max_pattern_len = MAX_PATTERN_LEN_LIMIT + 1;
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.dictionary.max_pattern_len = 64;
    config.limits.worker_threads = 0;
    assert!(config.validate().is_err());

    config.limits.worker_threads = 2;
    config.limits.max_text_bytes = 0;
    assert!(config.validate().is_err());

    config.limits.max_text_bytes = 1024;
    config.log.level = "verbose".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_file_test.toml",
            r#"
            [dictionary]
            kind = "plain"
            max_pattern_len = 128

            [limits]
            worker_threads = 3
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.dictionary.kind, DictionaryKind::Plain);
    assert_eq!(config.dictionary.max_pattern_len, 128);
    assert_eq!(config.limits.worker_threads, 3);

    // Other values should be defaults
    assert!(config.dictionary.strict_text_alphabet);
    assert_eq!(config.limits.max_text_bytes, LimitsConfig::default().max_text_bytes);
    assert_eq!(config.log, LogConfig::default());
}

/// Test loading configuration from JSON and YAML files.
#[test]
fn test_load_config_other_formats() {
    let fixture = TestFixture::new().unwrap();

    let json_path = fixture
        .write_file(
            "config.json",
            r#"{ "dictionary": { "strict_text_alphabet": false }, "log": { "json": true } }"#,
        )
        .unwrap();
    let config = ConfigLoader::new(Some(&json_path), "TEST_JSON").load().unwrap();
    assert!(!config.dictionary.strict_text_alphabet);
    assert!(config.log.json);

    let yaml_path = fixture
        .write_file("config.yaml", "limits:\n  max_patterns: 10\n")
        .unwrap();
    let config = ConfigLoader::new(Some(&yaml_path), "TEST_YAML").load().unwrap();
    assert_eq!(config.limits.max_patterns, 10);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_env_test.toml",
            r#"
            [dictionary]
            max_pattern_len = 128
            "#,
        )
        .unwrap();

    std::env::set_var("TEST_ENV__DICTIONARY__MAX_PATTERN_LEN", "256");
    std::env::set_var("TEST_ENV__LOG__LEVEL", "warn");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load();

    std::env::remove_var("TEST_ENV__DICTIONARY__MAX_PATTERN_LEN");
    std::env::remove_var("TEST_ENV__LOG__LEVEL");

    // Environment variables take precedence over the file
    let config = config.unwrap();
    assert_eq!(config.dictionary.max_pattern_len, 256);
    assert_eq!(config.log.level, "warn");
}

/// Test that loading without a file yields the defaults.
#[test]
fn test_load_without_file() {
    let config = ConfigLoader::new(None::<&Path>, "TEST_NO_FILE").load().unwrap();
    assert_eq!(config, MaukaConfig::default());
}

/// Test the loader's error cases.
#[test]
fn test_load_errors() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.path("missing.toml");
    assert!(matches!(
        ConfigLoader::new(Some(&missing), "TEST_ERR").load(),
        Err(ConfigError::FileNotFound(path)) if path == missing
    ));

    let ini = fixture.write_file("config.conf", "x = 1").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&ini), "TEST_ERR").load(),
        Err(ConfigError::UnsupportedFormat(_))
    ));

    let broken = fixture.write_file("broken.toml", "[dictionary\nkind = ").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&broken), "TEST_ERR").load(),
        Err(ConfigError::ParseError(_))
    ));

    let invalid = fixture
        .write_file("invalid.toml", "[limits]\nworker_threads = 0\n")
        .unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&invalid), "TEST_ERR").load(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));
}

/// Test that a generated configuration file loads back unchanged.
#[test]
fn test_generated_config_loads_back() {
    let fixture = TestFixture::new().unwrap();
    let config = MaukaConfig {
        dictionary: DictionaryConfig {
            kind: DictionaryKind::Plain,
            max_pattern_len: 512,
            strict_text_alphabet: false,
        },
        ..MaukaConfig::default()
    };

    let path = fixture
        .write_file("generated.toml", &toml::to_string_pretty(&config).unwrap())
        .unwrap();
    let loaded = ConfigLoader::new(Some(&path), "TEST_GEN").load().unwrap();
    assert_eq!(loaded, config);

    let options = DictionaryOptions::from(&loaded.dictionary);
    assert_eq!(options.max_pattern_len, 512);
    assert!(!options.strict_text_alphabet);
}

/// Test that the global configuration is readable once installed.
#[test]
fn test_global_config_roundtrip() {
    crate::config::init_global_config(MaukaConfig::default());
    // A second install is ignored
    crate::config::init_global_config(MaukaConfig {
        log: LogConfig {
            level: "error".to_string(),
            ..LogConfig::default()
        },
        ..MaukaConfig::default()
    });

    let global = crate::config::get_global_config().unwrap();
    assert_eq!(global.get().log.level, "info");
}
