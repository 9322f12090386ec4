// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Resource limits configuration module.
//!
//! Bounds on the work a single run may do: how many patterns a dictionary is
//! built from, how long a scanned text may be and how many threads scan.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Resource limits configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Longest text (in bytes) handed to a query; longer texts are skipped
    pub max_text_bytes: usize,

    /// Maximum number of patterns loaded into one dictionary
    pub max_patterns: usize,

    /// Number of threads used to scan texts in parallel
    pub worker_threads: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_text_bytes: 1024 * 1024, // 1 MiB
            max_patterns: 1_000_000,
            worker_threads: num_cpus::get(),
        }
    }
}

impl Validate for LimitsConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Validate max_text_bytes
        if self.max_text_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "max_text_bytes must be greater than 0".to_string(),
            ));
        }

        // Validate max_patterns
        if self.max_patterns == 0 {
            return Err(ConfigError::ValidationError(
                "max_patterns must be greater than 0".to_string(),
            ));
        }

        // Validate worker_threads
        if self.worker_threads == 0 || self.worker_threads > 1024 {
            return Err(ConfigError::ValueOutOfRange {
                key: "limits.worker_threads".to_string(),
                message: "must be between 1 and 1024".to_string(),
            });
        }

        Ok(())
    }
}
