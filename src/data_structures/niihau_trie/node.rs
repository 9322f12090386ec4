// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Niihau Trie.
//!
//! Each node stands for one pattern byte. The byte itself is not stored: it
//! is the index of the slot the node occupies in its parent.

use crate::data_structures::dictionary::scanner::ScanNode;
use crate::data_structures::dictionary::ALPHABET_SIZE;

/// A node in the Niihau Trie.
#[derive(Debug)]
pub(crate) struct TrieNode {
    /// Whether this node represents the end of a pattern
    pub(crate) terminal: bool,

    /// One slot per byte of the 7-bit alphabet
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub(crate) fn new() -> Self {
        Self {
            terminal: false,
            children: std::array::from_fn(|_| None),
        }
    }

    /// Returns the child for `byte`, creating it if it does not exist.
    ///
    /// `byte` must already be validated against the alphabet.
    pub(crate) fn child_or_insert(&mut self, byte: u8) -> &mut TrieNode {
        self.children[usize::from(byte)].get_or_insert_with(|| Box::new(TrieNode::new()))
    }

    /// Iterates over the `(byte, child)` pairs that are present.
    pub(crate) fn present_children(&self) -> impl Iterator<Item = (u8, &TrieNode)> {
        self.children
            .iter()
            .zip(0u8..)
            .filter_map(|(slot, byte)| slot.as_deref().map(|child| (byte, child)))
    }

    /// Drops every descendant of this node one at a time and returns how many
    /// were released.
    pub(crate) fn release_children(&mut self) -> usize {
        let mut released = 0;
        let mut pending: Vec<Box<TrieNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
            released += 1;
        }
        released
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanNode for TrieNode {
    fn edge_tail(&self) -> &[u8] {
        &[]
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn child(&self, byte: u8) -> Option<&Self> {
        self.children.get(usize::from(byte))?.as_deref()
    }
}
