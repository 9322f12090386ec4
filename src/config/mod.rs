// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration module for Mauka Dict.
//!
//! Settings are layered: built-in defaults, then an optional file (TOML, YAML
//! or JSON), then environment variables such as
//! `MAUKA__DICTIONARY__MAX_PATTERN_LEN=256`. The merged result is validated
//! before use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ::config::{Config, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::config::ConfigError;

pub mod dictionary;
pub mod limits;

pub use dictionary::DictionaryConfig;
pub use limits::LimitsConfig;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "MAUKA";

/// Initialize the default configuration.
///
/// Loads the default configuration file (if present) merged with environment
/// variables, validates it and installs it as the global configuration.
///
/// # Returns
///
/// * `Ok(())` if the configuration was successfully initialized
/// * `Err(ConfigError)` if there was an error initializing the configuration
pub fn init_default_config() -> ConfigResult<()> {
    let loader = ConfigLoader::new(Some(DEFAULT_CONFIG_PATH), ENV_PREFIX);

    let config = match loader.load() {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(_)) => {
            tracing::warn!(
                path = DEFAULT_CONFIG_PATH,
                "Default configuration file not found, using built-in defaults"
            );
            ConfigLoader::new(None::<&Path>, ENV_PREFIX).load()?
        }
        Err(e) => return Err(e),
    };

    init_global_config(config);
    Ok(())
}

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Mauka Dict.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MaukaConfig {
    /// Dictionary construction settings
    pub dictionary: DictionaryConfig,

    /// Resource limits configuration
    pub limits: LimitsConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for MaukaConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.dictionary.validate()?;
        self.limits.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for Mauka Dict.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(MaukaConfig)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<MaukaConfig> {
        let mut builder = Config::builder().add_source(Config::try_from(&MaukaConfig::default())?);

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => return Err(ConfigError::UnsupportedFormat(path.clone())),
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let mauka_config: MaukaConfig = builder.build()?.try_deserialize()?;
        mauka_config.validate()?;

        tracing::debug!(path = ?self.config_path, "configuration loaded");
        Ok(mauka_config)
    }
}

/// Global configuration accessor.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    config: Arc<MaukaConfig>,
}

impl GlobalConfig {
    /// Creates a new global configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration to use
    pub fn new(config: MaukaConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn get(&self) -> &MaukaConfig {
        &self.config
    }
}

/// Process-wide configuration.
static GLOBAL_CONFIG: OnceCell<GlobalConfig> = OnceCell::new();

/// Initialize the global configuration.
///
/// Only the first call has any effect; later calls are logged and ignored.
///
/// # Arguments
///
/// * `config` - The configuration to set as global
pub fn init_global_config(config: MaukaConfig) {
    if GLOBAL_CONFIG.set(GlobalConfig::new(config)).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration.
///
/// # Errors
///
/// Returns [`ConfigError::NotInitialized`] if [`init_global_config`] has not
/// been called yet.
pub fn get_global_config() -> ConfigResult<GlobalConfig> {
    GLOBAL_CONFIG.get().cloned().ok_or(ConfigError::NotInitialized)
}
