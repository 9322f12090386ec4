// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary configuration module.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::data_structures::dictionary::{DictionaryKind, DictionaryOptions, DEFAULT_MAX_PATTERN_LEN};
use crate::error::config::ConfigError;

/// Hard ceiling for `max_pattern_len`.
pub const MAX_PATTERN_LEN_LIMIT: usize = 1024 * 1024;

/// Settings for dictionaries built from configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Tree shape to build
    pub kind: DictionaryKind,

    /// Longest accepted pattern in bytes
    pub max_pattern_len: usize,

    /// Reject texts containing bytes outside the 7-bit alphabet
    pub strict_text_alphabet: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        let options = DictionaryOptions::default();
        Self {
            kind: DictionaryKind::default(),
            max_pattern_len: options.max_pattern_len,
            strict_text_alphabet: options.strict_text_alphabet,
        }
    }
}

impl DictionaryConfig {
    /// The dictionary options these settings describe.
    pub fn options(&self) -> DictionaryOptions {
        DictionaryOptions::new()
            .max_pattern_len(self.max_pattern_len)
            .strict_text_alphabet(self.strict_text_alphabet)
    }
}

impl From<&DictionaryConfig> for DictionaryOptions {
    fn from(config: &DictionaryConfig) -> Self {
        config.options()
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_pattern_len == 0 || self.max_pattern_len > MAX_PATTERN_LEN_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_pattern_len".to_string(),
                message: format!("must be between 1 and {MAX_PATTERN_LEN_LIMIT}"),
            });
        }

        if self.max_pattern_len > DEFAULT_MAX_PATTERN_LEN * 16 {
            tracing::warn!(
                max_pattern_len = self.max_pattern_len,
                "very long patterns make plain tries expensive"
            );
        }

        Ok(())
    }
}
