// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Shared contract for the substring dictionaries.
//!
//! A substring dictionary ingests a set of byte patterns and answers, for any
//! input text, whether at least one of those patterns occurs as a contiguous
//! run of bytes inside it. Two shapes implement the contract:
//!
//! - [`LanaiRadix`](crate::data_structures::lanai_radix::LanaiRadix): a
//!   path-compressed prefix tree, one node per compressed edge.
//! - [`NiihauTrie`](crate::data_structures::niihau_trie::NiihauTrie): a plain
//!   prefix tree, one node per pattern byte.
//!
//! Both run the same breadth-first scanner and give identical answers for
//! identical pattern sets.
//!
//! # Example
//!
//! ```
//! use mauka_dict_lib::data_structures::dictionary::{
//!     AnyDictionary, DictionaryKind, DictionaryOptions, SubstringDictionary,
//! };
//!
//! let mut dict = AnyDictionary::new(DictionaryKind::Compressed, DictionaryOptions::default());
//! dict.insert(b"car").unwrap();
//! dict.insert(b"cart").unwrap();
//!
//! assert!(dict.contains_substring(b"i have a car").unwrap());
//! assert!(!dict.contains_substring(b"cor").unwrap());
//! ```
//!
//! # Alphabet
//!
//! The alphabet is the 7-bit byte range `0..128`. Patterns outside it are
//! rejected; texts are rejected too unless
//! [`DictionaryOptions::strict_text_alphabet`] is turned off, in which case
//! bytes `>= 128` simply never match.

mod error;
pub mod registry;
pub(crate) mod scanner;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data_structures::lanai_radix::LanaiRadix;
use crate::data_structures::niihau_trie::NiihauTrie;

pub use error::{DictionaryError, DictionaryResult};
pub use registry::{DictionaryHandle, DictionaryRegistry};

/// Number of distinct bytes a pattern may contain.
pub const ALPHABET_SIZE: usize = 128;

/// Default upper bound on a single pattern's length in bytes.
pub const DEFAULT_MAX_PATTERN_LEN: usize = 4096;

/// Options shared by both dictionary shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryOptions {
    /// Longest pattern accepted by `insert`
    pub max_pattern_len: usize,

    /// Reject texts containing bytes outside the 7-bit alphabet
    pub strict_text_alphabet: bool,
}

impl Default for DictionaryOptions {
    fn default() -> Self {
        Self {
            max_pattern_len: DEFAULT_MAX_PATTERN_LEN,
            strict_text_alphabet: true,
        }
    }
}

impl DictionaryOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the longest pattern accepted by `insert`.
    pub fn max_pattern_len(mut self, value: usize) -> Self {
        self.max_pattern_len = value;
        self
    }

    /// Sets whether texts with bytes `>= 128` are rejected.
    pub fn strict_text_alphabet(mut self, value: bool) -> Self {
        self.strict_text_alphabet = value;
        self
    }
}

/// Which tree shape backs a dictionary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryKind {
    /// Path-compressed (radix) prefix tree
    Compressed,
    /// One node per byte
    Plain,
}

impl Default for DictionaryKind {
    fn default() -> Self {
        Self::Compressed
    }
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compressed => f.write_str("compressed"),
            Self::Plain => f.write_str("plain"),
        }
    }
}

impl FromStr for DictionaryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compressed" | "radix" => Ok(Self::Compressed),
            "plain" | "trie" => Ok(Self::Plain),
            other => Err(format!("unknown dictionary kind: {other}")),
        }
    }
}

/// Byte range of a pattern occurrence found in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubstringMatch {
    /// Offset of the first matched byte
    pub start: usize,
    /// Offset one past the last matched byte
    pub end: usize,
}

impl SubstringMatch {
    /// Length of the matched pattern in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: patterns are never empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Operations every substring dictionary supports.
///
/// Queries take `&self` and keep all scan state local to the call, so any
/// number of them may run concurrently against a dictionary nobody is
/// inserting into. `insert` takes `&mut self`.
pub trait SubstringDictionary {
    /// Inserts a pattern.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The pattern was not present before.
    /// * `Ok(false)` - The pattern was already present; the tree is unchanged.
    /// * `Err(DictionaryError)` - The pattern is empty, too long, or contains
    ///   a byte outside the 7-bit alphabet.
    fn insert(&mut self, pattern: &[u8]) -> DictionaryResult<bool>;

    /// Finds the first pattern occurrence in `text`.
    ///
    /// "First" means the occurrence that ends earliest; among occurrences
    /// ending at the same byte, the longest one.
    fn find_first(&self, text: &[u8]) -> DictionaryResult<Option<SubstringMatch>>;

    /// Returns whether any inserted pattern occurs in `text`.
    ///
    /// The empty text never contains a pattern.
    fn contains_substring(&self, text: &[u8]) -> DictionaryResult<bool> {
        Ok(self.find_first(text)?.is_some())
    }

    /// Approximate number of bytes held by the tree's nodes.
    fn memory_footprint(&self) -> usize;

    /// Number of nodes in the tree, root included.
    fn node_count(&self) -> usize;

    /// Number of distinct patterns inserted.
    fn len(&self) -> usize;

    /// Returns `true` if no pattern has been inserted.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All inserted patterns in ascending byte order.
    fn patterns(&self) -> Vec<Vec<u8>>;

    /// Releases every node exactly once and returns how many were released.
    fn dispose(self) -> usize
    where
        Self: Sized;
}

/// A dictionary of either shape, chosen at runtime.
#[derive(Debug)]
pub enum AnyDictionary {
    /// Radix-tree backed dictionary
    Compressed(LanaiRadix),
    /// Plain-trie backed dictionary
    Plain(NiihauTrie),
}

impl AnyDictionary {
    /// Creates an empty dictionary of the given shape.
    pub fn new(kind: DictionaryKind, options: DictionaryOptions) -> Self {
        match kind {
            DictionaryKind::Compressed => Self::Compressed(LanaiRadix::with_options(options)),
            DictionaryKind::Plain => Self::Plain(NiihauTrie::with_options(options)),
        }
    }

    /// The shape backing this dictionary.
    pub fn kind(&self) -> DictionaryKind {
        match self {
            Self::Compressed(_) => DictionaryKind::Compressed,
            Self::Plain(_) => DictionaryKind::Plain,
        }
    }
}

impl SubstringDictionary for AnyDictionary {
    fn insert(&mut self, pattern: &[u8]) -> DictionaryResult<bool> {
        match self {
            Self::Compressed(dict) => dict.insert(pattern),
            Self::Plain(dict) => dict.insert(pattern),
        }
    }

    fn find_first(&self, text: &[u8]) -> DictionaryResult<Option<SubstringMatch>> {
        match self {
            Self::Compressed(dict) => dict.find_first(text),
            Self::Plain(dict) => dict.find_first(text),
        }
    }

    fn memory_footprint(&self) -> usize {
        match self {
            Self::Compressed(dict) => dict.memory_footprint(),
            Self::Plain(dict) => dict.memory_footprint(),
        }
    }

    fn node_count(&self) -> usize {
        match self {
            Self::Compressed(dict) => dict.node_count(),
            Self::Plain(dict) => dict.node_count(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Compressed(dict) => dict.len(),
            Self::Plain(dict) => dict.len(),
        }
    }

    fn patterns(&self) -> Vec<Vec<u8>> {
        match self {
            Self::Compressed(dict) => dict.patterns(),
            Self::Plain(dict) => dict.patterns(),
        }
    }

    fn dispose(self) -> usize {
        match self {
            Self::Compressed(dict) => dict.dispose(),
            Self::Plain(dict) => dict.dispose(),
        }
    }
}

/// Checks that `pattern` may be inserted under `options`.
pub(crate) fn check_pattern(pattern: &[u8], options: &DictionaryOptions) -> DictionaryResult<()> {
    if pattern.is_empty() {
        return Err(DictionaryError::EmptyPattern);
    }
    if pattern.len() > options.max_pattern_len {
        return Err(DictionaryError::PatternTooLong {
            len: pattern.len(),
            max: options.max_pattern_len,
        });
    }
    check_alphabet(pattern)
}

/// Checks a query text against the alphabet policy in `options`.
pub(crate) fn check_text(text: &[u8], options: &DictionaryOptions) -> DictionaryResult<()> {
    if options.strict_text_alphabet {
        check_alphabet(text)
    } else {
        Ok(())
    }
}

fn check_alphabet(bytes: &[u8]) -> DictionaryResult<()> {
    match bytes.iter().position(|b| !b.is_ascii()) {
        Some(position) => Err(DictionaryError::UnsupportedByte {
            byte: bytes[position],
            position,
        }),
        None => Ok(()),
    }
}
