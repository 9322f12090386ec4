// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Radix Tree Implementation
//!
//! A path-compressed prefix tree used as a substring dictionary. Every edge
//! carries a non-empty label; a chain of single-child, non-terminal nodes is
//! always collapsed into one edge. When a new pattern diverges partway along
//! an existing edge, the edge is split at the divergence point.
//!
//! # Example
//!
//! ```
//! use mauka_dict_lib::data_structures::dictionary::SubstringDictionary;
//! use mauka_dict_lib::data_structures::lanai_radix::LanaiRadix;
//!
//! let mut radix = LanaiRadix::new();
//! radix.insert(b"foo").unwrap();
//! radix.insert(b"bar").unwrap();
//!
//! assert!(radix.contains_substring(b"xfooy").unwrap());
//! assert!(!radix.contains_substring(b"fob ar").unwrap());
//! assert!(radix.contains_substring(b"fobaro").unwrap());
//! ```

mod node;

use std::collections::hash_map::Entry;

use crate::data_structures::dictionary::{
    check_pattern, check_text, scanner, DictionaryOptions, DictionaryResult, SubstringDictionary,
    SubstringMatch,
};
use node::{common_prefix_len, RadixNode};

/// Lanai Radix Tree: a compressed substring dictionary.
///
/// Key features:
/// * One node per compressed edge, so long patterns with little shared
///   structure stay small
/// * Edge splitting that keeps the compression invariant after every insert
/// * Iterative teardown, safe for arbitrarily deep trees
#[derive(Debug)]
pub struct LanaiRadix {
    /// The root node of the tree
    root: RadixNode,

    /// Number of distinct patterns
    len: usize,

    /// Validation options
    options: DictionaryOptions,
}

impl LanaiRadix {
    /// Creates a new empty `LanaiRadix` with default options.
    pub fn new() -> Self {
        Self::with_options(DictionaryOptions::default())
    }

    /// Creates a new empty `LanaiRadix` with the specified options.
    ///
    /// # Arguments
    ///
    /// * `options` - Validation options for patterns and texts.
    pub fn with_options(options: DictionaryOptions) -> Self {
        tracing::debug!(?options, "creating radix dictionary");
        Self {
            root: RadixNode::root(),
            len: 0,
            options,
        }
    }

    /// The options this dictionary validates against.
    pub fn options(&self) -> &DictionaryOptions {
        &self.options
    }
}

impl Default for LanaiRadix {
    fn default() -> Self {
        Self::new()
    }
}

impl SubstringDictionary for LanaiRadix {
    fn insert(&mut self, pattern: &[u8]) -> DictionaryResult<bool> {
        check_pattern(pattern, &self.options)?;

        let mut node = &mut self.root;
        let mut rest = pattern;

        loop {
            let child = match node.children.entry(rest[0]) {
                Entry::Vacant(slot) => {
                    slot.insert(RadixNode::leaf(rest));
                    self.len += 1;
                    return Ok(true);
                }
                Entry::Occupied(slot) => slot.into_mut(),
            };

            let shared = common_prefix_len(&child.label, rest);
            rest = &rest[shared..];

            if shared == child.label.len() {
                if rest.is_empty() {
                    let is_new = !child.terminal;
                    child.terminal = true;
                    if is_new {
                        self.len += 1;
                    }
                    return Ok(is_new);
                }
                node = child;
                continue;
            }

            tracing::debug!(
                edge_len = child.label.len(),
                at = shared,
                "splitting radix edge"
            );
            let old = std::mem::take(child);
            *child = old.split(shared, rest);
            self.len += 1;
            return Ok(true);
        }
    }

    fn find_first(&self, text: &[u8]) -> DictionaryResult<Option<SubstringMatch>> {
        check_text(text, &self.options)?;
        Ok(scanner::first_match(&self.root, text))
    }

    fn memory_footprint(&self) -> usize {
        let mut total = 0;
        self.root.for_each(|node| total += node.footprint());
        total
    }

    fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.for_each(|_| count += 1);
        count
    }

    fn len(&self) -> usize {
        self.len
    }

    fn patterns(&self) -> Vec<Vec<u8>> {
        let mut patterns = Vec::with_capacity(self.len);
        let mut stack: Vec<(&RadixNode, Vec<u8>)> = vec![(&self.root, Vec::new())];
        while let Some((node, prefix)) = stack.pop() {
            if node.terminal {
                patterns.push(prefix.clone());
            }
            for child in node.children.values() {
                let mut path = prefix.clone();
                path.extend_from_slice(&child.label);
                stack.push((child, path));
            }
        }
        patterns.sort();
        patterns
    }

    fn dispose(mut self) -> usize {
        let released = self.root.release_children() + 1;
        self.len = 0;
        tracing::debug!(released, "disposed radix dictionary");
        released
    }
}

impl Drop for LanaiRadix {
    fn drop(&mut self) {
        self.root.release_children();
    }
}
