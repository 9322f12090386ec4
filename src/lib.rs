// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Mauka Dict Library
//!
//! In-memory substring dictionaries. A dictionary holds a set of byte-string
//! patterns and answers "does any pattern occur somewhere in this text?" in a
//! single left-to-right pass. Two tree shapes are provided with identical
//! observable behavior: a plain trie and a path-compressed radix tree.
//!
//! # Architecture
//!
//! - [`data_structures`]: the dictionaries, their shared scanner, a
//!   handle-based registry and a single-pattern KMP matcher
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: crate-level error type and error reporting

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Mauka Dict.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter and the default global configuration.
pub fn init() -> error::MaukaResult<()> {
    let reporter = error::TracingErrorReporter::new();
    error::set_error_reporter(std::sync::Arc::new(reporter));

    config::init_default_config()?;

    Ok(())
}
