// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Crate-level test suites.
//!
//! Dictionary internals are tested next to their code; the suites here cover
//! the parts that cut across modules:
//! - configuration loading and validation
//! - error types and reporting
//! - the handle registry, including concurrent use

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{pattern_set_strategy, TestFixture};
