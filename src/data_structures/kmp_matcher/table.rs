// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Failure table construction.
//!
//! The table has `pattern.len() + 1` slots. Slot 0 holds the sentinel `-1`;
//! slot `k` holds the length of the longest proper prefix of `pattern[..k]`
//! that is also a suffix of it. On a mismatch after `k` matched bytes the
//! search resumes comparing at `table[k]` instead of starting over.

/// Builds the failure table for `pattern`.
pub fn failure_table(pattern: &[u8]) -> Vec<isize> {
    let mut table = vec![0; pattern.len() + 1];
    table[0] = -1;

    let mut i = 0;
    let mut j: isize = -1;
    while i < pattern.len() {
        if j == -1 || pattern[i] == pattern[j as usize] {
            i += 1;
            j += 1;
            table[i] = j;
        } else {
            j = table[j as usize];
        }
    }
    table
}
