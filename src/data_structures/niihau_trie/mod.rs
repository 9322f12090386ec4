// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Niihau Trie Implementation
//!
//! A plain prefix tree used as a substring dictionary: one node per pattern
//! byte, each with a fixed 128-slot child array. Inserting never splits
//! anything; it walks the existing path and extends it. Queries run the same
//! scanner as the radix tree and give the same answers, at the cost of more
//! nodes.

mod node;

use crate::data_structures::dictionary::{
    check_pattern, check_text, scanner, DictionaryOptions, DictionaryResult, SubstringDictionary,
    SubstringMatch,
};
use node::TrieNode;

/// Niihau Trie: an uncompressed substring dictionary.
///
/// Key features:
/// * O(1) child lookup through a fixed array indexed by byte
/// * Insert is a simple walk-and-extend
/// * Iterative teardown, safe for patterns of any length
#[derive(Debug)]
pub struct NiihauTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of distinct patterns
    len: usize,

    /// Validation options
    options: DictionaryOptions,
}

impl NiihauTrie {
    /// Creates a new empty `NiihauTrie` with default options.
    ///
    /// # Returns
    ///
    /// A new `NiihauTrie` instance.
    pub fn new() -> Self {
        Self::with_options(DictionaryOptions::default())
    }

    /// Creates a new empty `NiihauTrie` with the specified options.
    ///
    /// # Arguments
    ///
    /// * `options` - Validation options for patterns and texts.
    ///
    /// # Returns
    ///
    /// A new `NiihauTrie` instance.
    pub fn with_options(options: DictionaryOptions) -> Self {
        tracing::debug!(?options, "creating trie dictionary");
        Self {
            root: TrieNode::new(),
            len: 0,
            options,
        }
    }

    /// The options this dictionary validates against.
    pub fn options(&self) -> &DictionaryOptions {
        &self.options
    }

    /// Visits every node without recursion.
    fn for_each(&self, mut visit: impl FnMut(&TrieNode)) {
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            visit(node);
            stack.extend(node.present_children().map(|(_, child)| child));
        }
    }
}

impl Default for NiihauTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl SubstringDictionary for NiihauTrie {
    fn insert(&mut self, pattern: &[u8]) -> DictionaryResult<bool> {
        check_pattern(pattern, &self.options)?;

        let mut node = &mut self.root;
        for &byte in pattern {
            node = node.child_or_insert(byte);
        }

        let is_new = !node.terminal;
        node.terminal = true;
        if is_new {
            self.len += 1;
        }
        Ok(is_new)
    }

    fn find_first(&self, text: &[u8]) -> DictionaryResult<Option<SubstringMatch>> {
        check_text(text, &self.options)?;
        Ok(scanner::first_match(&self.root, text))
    }

    fn memory_footprint(&self) -> usize {
        self.node_count() * std::mem::size_of::<TrieNode>()
    }

    fn node_count(&self) -> usize {
        let mut count = 0;
        self.for_each(|_| count += 1);
        count
    }

    fn len(&self) -> usize {
        self.len
    }

    fn patterns(&self) -> Vec<Vec<u8>> {
        let mut patterns = Vec::with_capacity(self.len);
        let mut stack: Vec<(&TrieNode, Vec<u8>)> = vec![(&self.root, Vec::new())];
        while let Some((node, prefix)) = stack.pop() {
            if node.terminal {
                patterns.push(prefix.clone());
            }
            for (byte, child) in node.present_children() {
                let mut path = prefix.clone();
                path.push(byte);
                stack.push((child, path));
            }
        }
        patterns.sort();
        patterns
    }

    fn dispose(mut self) -> usize {
        let released = self.root.release_children() + 1;
        self.len = 0;
        tracing::debug!(released, "disposed trie dictionary");
        released
    }
}

impl Drop for NiihauTrie {
    fn drop(&mut self) {
        self.root.release_children();
    }
}
