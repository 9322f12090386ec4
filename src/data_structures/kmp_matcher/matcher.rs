// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! KMP string matching implementation.
//!
//! This module contains the matcher itself and the iterator used to walk
//! multiple occurrences of a pattern in a text.

use std::iter::FusedIterator;

use super::error::{KmpError, KmpResult};
use super::table::failure_table;

/// Maximum allowed pattern length to prevent excessive memory usage
pub const MAX_PATTERN_LENGTH: usize = 1024 * 32; // 32KiB

/// Options for configuring the KMP matcher behavior.
#[derive(Debug, Clone, Default)]
pub struct MatcherOptions {
    /// Whether to fold ASCII letters before comparing
    pub case_insensitive: bool,

    /// Whether `find_all` may report overlapping matches
    pub allow_overlapping: bool,
}

impl MatcherOptions {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether matching should ignore ASCII case.
    ///
    /// # Arguments
    ///
    /// * `value` - `true` to enable case-insensitive matching, `false` otherwise.
    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    /// Sets whether to allow overlapping matches.
    ///
    /// # Arguments
    ///
    /// * `value` - `true` to allow overlapping matches, `false` otherwise.
    pub fn allow_overlapping(mut self, value: bool) -> Self {
        self.allow_overlapping = value;
        self
    }
}

/// Single-pattern exact matcher with a precomputed failure table.
#[derive(Debug, Clone)]
pub struct KmpMatcher {
    /// The pattern, already case-folded when matching is case-insensitive
    pattern: Vec<u8>,

    /// Failure table for `pattern`
    table: Vec<isize>,

    /// Matching options
    options: MatcherOptions,
}

impl KmpMatcher {
    /// Creates a matcher for `pattern` with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or longer than
    /// [`MAX_PATTERN_LENGTH`].
    pub fn new(pattern: impl AsRef<[u8]>) -> KmpResult<Self> {
        Self::with_options(pattern, MatcherOptions::default())
    }

    /// Creates a matcher for `pattern` with the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or longer than
    /// [`MAX_PATTERN_LENGTH`].
    pub fn with_options(pattern: impl AsRef<[u8]>, options: MatcherOptions) -> KmpResult<Self> {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            return Err(KmpError::EmptyPattern);
        }
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(KmpError::PatternTooLarge {
                len: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let pattern = if options.case_insensitive {
            pattern.to_ascii_lowercase()
        } else {
            pattern.to_vec()
        };
        let table = failure_table(&pattern);

        Ok(Self {
            pattern,
            table,
            options,
        })
    }

    /// The pattern being searched for (case-folded if case-insensitive).
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// The failure table computed for the pattern.
    pub fn failure_table(&self) -> &[isize] {
        &self.table
    }

    /// Returns the offset of the first occurrence of the pattern in `text`.
    pub fn find_first(&self, text: impl AsRef<[u8]>) -> Option<usize> {
        self.find_all(text.as_ref()).next()
    }

    /// Returns `true` if the pattern occurs anywhere in `text`.
    pub fn contains(&self, text: impl AsRef<[u8]>) -> bool {
        self.find_first(text).is_some()
    }

    /// Returns an iterator over the offsets of all occurrences in `text`.
    pub fn find_all<'a>(&'a self, text: &'a [u8]) -> MatchIterator<'a> {
        MatchIterator {
            matcher: self,
            text,
            position: 0,
            matched: 0,
        }
    }

    fn fold(&self, byte: u8) -> u8 {
        if self.options.case_insensitive {
            byte.to_ascii_lowercase()
        } else {
            byte
        }
    }
}

/// Iterator over match offsets in a text.
#[derive(Debug)]
pub struct MatchIterator<'a> {
    /// The matcher instance
    matcher: &'a KmpMatcher,

    /// The text being searched
    text: &'a [u8],

    /// Next text offset to compare
    position: usize,

    /// Number of pattern bytes matched so far, or -1 right after a fallback
    /// past the start of the pattern
    matched: isize,
}

impl Iterator for MatchIterator<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = &self.matcher.pattern;
        let table = &self.matcher.table;
        let len = pattern.len();

        while self.position < self.text.len() {
            let byte = self.matcher.fold(self.text[self.position]);
            if self.matched == -1 || byte == pattern[self.matched as usize] {
                self.position += 1;
                self.matched += 1;
                if self.matched as usize == len {
                    self.matched = if self.matcher.options.allow_overlapping {
                        table[len]
                    } else {
                        0
                    };
                    return Some(self.position - len);
                }
            } else {
                self.matched = table[self.matched as usize];
            }
        }
        None
    }
}

impl FusedIterator for MatchIterator<'_> {}

/// Returns the offset of the first occurrence of `pattern` in `text`.
///
/// `Ok(None)` means the pattern does not occur anywhere in `text`.
///
/// # Errors
///
/// Returns an error if the pattern is empty or too large.
pub fn find(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> KmpResult<Option<usize>> {
    Ok(KmpMatcher::new(pattern)?.find_first(text))
}
