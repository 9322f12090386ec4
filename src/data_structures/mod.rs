// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for Mauka Dict.
//!
//! This module contains the substring dictionaries and the single-pattern
//! matcher:
//! - [`lanai_radix`]: compressed radix tree dictionary
//! - [`niihau_trie`]: plain one-node-per-byte trie dictionary
//! - [`dictionary`]: the shared contract, scanner and handle registry
//! - [`kmp_matcher`]: Knuth-Morris-Pratt search for a single pattern
//!
//! No unsafe code is used anywhere in these implementations.

pub mod dictionary;
pub mod kmp_matcher;
pub mod lanai_radix;
pub mod niihau_trie;

// Re-export common data structures
pub use dictionary::{
    AnyDictionary, DictionaryError, DictionaryHandle, DictionaryKind, DictionaryOptions,
    DictionaryRegistry, DictionaryResult, SubstringDictionary, SubstringMatch,
};
pub use kmp_matcher::{KmpError, KmpMatcher, KmpResult};
pub use lanai_radix::LanaiRadix;
pub use niihau_trie::NiihauTrie;
