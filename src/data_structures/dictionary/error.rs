// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the substring dictionaries.

/// Errors that can occur in dictionary operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DictionaryError {
    /// An empty pattern was passed to `insert`.
    #[error("Empty pattern not allowed")]
    EmptyPattern,

    /// A pattern exceeds the configured maximum length.
    #[error("Pattern of {len} bytes exceeds maximum pattern length of {max}")]
    PatternTooLong {
        /// Length of the rejected pattern.
        len: usize,
        /// The configured maximum.
        max: usize,
    },

    /// A byte outside the 7-bit alphabet was found in a pattern or text.
    #[error("Unsupported byte 0x{byte:02x} at position {position}")]
    UnsupportedByte {
        /// The offending byte value.
        byte: u8,
        /// Offset of the byte in the input.
        position: usize,
    },

    /// The handle does not refer to a live dictionary.
    #[error("Invalid dictionary handle: {0}")]
    InvalidHandle(u64),
}

/// Result type for dictionary operations.
pub type DictionaryResult<T> = std::result::Result<T, DictionaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DictionaryError::EmptyPattern;
        assert_eq!(err.to_string(), "Empty pattern not allowed");

        let err = DictionaryError::PatternTooLong { len: 10, max: 4 };
        assert_eq!(
            err.to_string(),
            "Pattern of 10 bytes exceeds maximum pattern length of 4"
        );

        let err = DictionaryError::UnsupportedByte {
            byte: 0xc3,
            position: 2,
        };
        assert_eq!(err.to_string(), "Unsupported byte 0xc3 at position 2");

        let err = DictionaryError::InvalidHandle(7);
        assert_eq!(err.to_string(), "Invalid dictionary handle: 7");
    }
}
