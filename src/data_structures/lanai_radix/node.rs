// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai radix tree.
//!
//! Each node owns the edge label leading into it and its children, keyed by
//! the first byte of each child's label.

use fnv::FnvHashMap;

use crate::data_structures::dictionary::scanner::ScanNode;

/// A node in the Lanai radix tree.
#[derive(Debug, Default)]
pub(crate) struct RadixNode {
    /// Bytes this edge contributes beyond the parent. Empty only for the root.
    pub(crate) label: Vec<u8>,

    /// Whether some inserted pattern ends exactly here
    pub(crate) terminal: bool,

    /// Children keyed by the first byte of their label
    pub(crate) children: FnvHashMap<u8, RadixNode>,
}

impl RadixNode {
    /// Creates the (label-less, non-terminal) root node.
    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// Creates a terminal leaf holding `label`.
    pub(crate) fn leaf(label: &[u8]) -> Self {
        Self {
            label: label.to_vec(),
            terminal: true,
            children: FnvHashMap::default(),
        }
    }

    /// Splits this node's edge after `at` label bytes.
    ///
    /// Returns a new intermediate node owning `label[..at]`, with `self`
    /// (now holding `label[at..]`, its terminal flag and all of its children)
    /// as one child. If `rest` is empty the intermediate node is terminal;
    /// otherwise a terminal leaf for `rest` becomes its second child.
    ///
    /// The intermediate node is built completely before the caller stores it
    /// back into the parent's slot.
    pub(crate) fn split(mut self, at: usize, rest: &[u8]) -> Self {
        debug_assert!(at > 0 && at < self.label.len());

        let tail = self.label.split_off(at);
        let prefix = std::mem::replace(&mut self.label, tail);

        let mut intermediate = Self {
            label: prefix,
            terminal: rest.is_empty(),
            children: FnvHashMap::default(),
        };
        intermediate.children.insert(self.label[0], self);
        if let Some(&first) = rest.first() {
            intermediate.children.insert(first, Self::leaf(rest));
        }
        intermediate
    }

    /// Approximate bytes held by this node alone.
    pub(crate) fn footprint(&self) -> usize {
        std::mem::size_of::<Self>() + self.label.len()
    }

    /// Visits every node of the subtree rooted here, without recursion.
    pub(crate) fn for_each(&self, mut visit: impl FnMut(&RadixNode)) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            visit(node);
            stack.extend(node.children.values());
        }
    }

    /// Drops every descendant of this node one at a time and returns how many
    /// were released. Leaves `self` childless.
    pub(crate) fn release_children(&mut self) -> usize {
        let mut released = 0;
        let mut pending: Vec<RadixNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
            released += 1;
        }
        released
    }
}

impl ScanNode for RadixNode {
    fn edge_tail(&self) -> &[u8] {
        self.label.get(1..).unwrap_or_default()
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn child(&self, byte: u8) -> Option<&Self> {
        self.children.get(&byte)
    }
}

/// Number of leading bytes `a` and `b` have in common.
pub(crate) fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
