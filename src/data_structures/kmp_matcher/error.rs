// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the KMP matcher.

/// Error types for KMP matcher operations
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum KmpError {
    /// Empty pattern provided
    #[error("Pattern cannot be empty")]
    EmptyPattern,

    /// Pattern is too large
    #[error("Pattern of {len} bytes exceeds maximum allowed length of {max}")]
    PatternTooLarge {
        /// Length of the rejected pattern
        len: usize,
        /// Maximum allowed length
        max: usize,
    },
}

/// Result type for KMP matcher operations
pub type KmpResult<T> = std::result::Result<T, KmpError>;
