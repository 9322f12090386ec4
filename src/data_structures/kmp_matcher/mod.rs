// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Knuth-Morris-Pratt single-pattern matcher.
//!
//! A companion to the substring dictionaries for the common case of looking
//! for exactly one pattern. The failure table is computed once per pattern;
//! each search then reads every text byte at most twice and never backs up
//! in the text.
//!
//! # Example
//!
//! ```
//! use mauka_dict_lib::data_structures::kmp_matcher::{find, KmpMatcher, MatcherOptions};
//!
//! assert_eq!(find("hello world", "world").unwrap(), Some(6));
//! assert_eq!(find("hello world", "word").unwrap(), None);
//!
//! let matcher = KmpMatcher::new("ana").unwrap();
//! assert_eq!(matcher.find_all(b"bananarama").collect::<Vec<_>>(), vec![1]);
//!
//! let options = MatcherOptions::new().allow_overlapping(true);
//! let matcher = KmpMatcher::with_options("ana", options).unwrap();
//! assert_eq!(matcher.find_all(b"bananarama").collect::<Vec<_>>(), vec![1, 3]);
//! ```
//!
//! # Performance Characteristics
//!
//! - Preprocessing time and space: O(m) for a pattern of m bytes
//! - Search: O(n) comparisons for a text of n bytes, in every case

mod error;
mod matcher;
mod table;

#[cfg(test)]
mod tests;

// Re-exports
pub use error::{KmpError, KmpResult};
pub use matcher::{find, KmpMatcher, MatchIterator, MatcherOptions, MAX_PATTERN_LENGTH};
pub use table::failure_table;
