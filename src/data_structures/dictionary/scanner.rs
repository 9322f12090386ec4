// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Breadth-first substring scanner shared by both tree shapes.
//!
//! The scanner walks the text once, left to right. At every byte it keeps a
//! set of active threads, each one a partial match in progress: a node, a
//! cursor into that node's edge label, and the text offset where the match
//! began. A thread that mismatches dies; a thread that finishes the edge of a
//! terminal node means a pattern ends at the current byte and the scan stops.
//! A new thread is started from the root at every byte so that matches may
//! begin anywhere.
//!
//! There are no failure links. Work is bounded by O(text length × node count)
//! in the worst case.

use super::SubstringMatch;

/// Read-only view of a tree node as the scanner needs it.
///
/// The first byte of a node's edge label is the key of the slot it hangs
/// from in its parent, so a thread that reaches a node through
/// [`child`](ScanNode::child) has already matched that byte. The scanner only
/// ever compares the remaining [`edge_tail`](ScanNode::edge_tail).
pub(crate) trait ScanNode {
    /// Edge label bytes after the first one.
    fn edge_tail(&self) -> &[u8];

    /// Whether a pattern ends exactly at this node.
    fn is_terminal(&self) -> bool;

    /// The child whose edge label starts with `byte`.
    fn child(&self, byte: u8) -> Option<&Self>;
}

/// One partial match in progress.
struct Thread<'a, N> {
    node: &'a N,
    cursor: usize,
    start: usize,
}

impl<'a, N: ScanNode> Thread<'a, N> {
    fn new(node: &'a N, start: usize) -> Self {
        Self {
            node,
            cursor: 0,
            start,
        }
    }

    /// Feeds one byte to the thread. Returns `None` when the thread dies.
    fn advance(self, byte: u8) -> Option<Self> {
        let node = self.node;
        let tail = node.edge_tail();
        if self.cursor < tail.len() {
            (tail[self.cursor] == byte).then(|| Self {
                cursor: self.cursor + 1,
                ..self
            })
        } else {
            node.child(byte).map(|child| Self::new(child, self.start))
        }
    }

    /// Whether the thread sits at the end of a terminal node's edge.
    fn is_complete(&self) -> bool {
        self.cursor == self.node.edge_tail().len() && self.node.is_terminal()
    }
}

/// Scans `text` and returns the first pattern occurrence found.
///
/// Threads are kept in the order they were started, so when several finish
/// on the same byte the one that started earliest (the longest match) wins.
pub(crate) fn first_match<N: ScanNode>(root: &N, text: &[u8]) -> Option<SubstringMatch> {
    let mut active: Vec<Thread<'_, N>> = Vec::new();
    let mut next: Vec<Thread<'_, N>> = Vec::new();
    let mut peak = 0;

    for (position, &byte) in text.iter().enumerate() {
        let carried = active.drain(..).filter_map(|thread| thread.advance(byte));
        // A thread spawned from the root has already consumed `byte` as its
        // slot key.
        let spawned = root.child(byte).map(|child| Thread::new(child, position));

        for thread in carried.chain(spawned) {
            if thread.is_complete() {
                tracing::trace!(start = thread.start, end = position + 1, peak, "pattern found");
                return Some(SubstringMatch {
                    start: thread.start,
                    end: position + 1,
                });
            }
            next.push(thread);
        }

        peak = peak.max(next.len());
        std::mem::swap(&mut active, &mut next);
    }

    tracing::trace!(len = text.len(), peak, "no pattern found");
    None
}
