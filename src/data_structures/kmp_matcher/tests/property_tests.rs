// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the KMP matcher, checked against naive search.

use proptest::prelude::*;
use test_case::test_case;

use crate::data_structures::kmp_matcher::{find, KmpMatcher, MatcherOptions};

// Small alphabets make repeated borders (and so fallbacks) common
fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{1,6}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB]{0,60}").unwrap()
}

fn naive_first(text: &[u8], pattern: &[u8]) -> Option<usize> {
    text.windows(pattern.len()).position(|w| w == pattern)
}

fn naive_all(text: &[u8], pattern: &[u8], overlapping: bool) -> Vec<usize> {
    let mut found = Vec::new();
    let mut start = 0;
    while start + pattern.len() <= text.len() {
        if &text[start..start + pattern.len()] == pattern {
            found.push(start);
            start += if overlapping { 1 } else { pattern.len() };
        } else {
            start += 1;
        }
    }
    found
}

proptest! {
    // Property: find_first agrees with a naive left-to-right window scan
    #[test]
    fn prop_find_first_matches_naive(pattern in pattern_strategy(), text in text_strategy()) {
        let matcher = KmpMatcher::new(&pattern).unwrap();
        prop_assert_eq!(
            matcher.find_first(&text),
            naive_first(text.as_bytes(), pattern.as_bytes())
        );
        prop_assert_eq!(matcher.contains(&text), text.contains(pattern.as_str()));
    }

    // Property: find_all agrees with naive search in both overlap modes
    #[test]
    fn prop_find_all_matches_naive(
        pattern in pattern_strategy(),
        text in text_strategy(),
        overlapping in prop::bool::ANY,
    ) {
        let options = MatcherOptions::new().allow_overlapping(overlapping);
        let matcher = KmpMatcher::with_options(&pattern, options).unwrap();
        let found: Vec<usize> = matcher.find_all(text.as_bytes()).collect();
        prop_assert_eq!(found, naive_all(text.as_bytes(), pattern.as_bytes(), overlapping));
    }

    // Property: case-insensitive search equals case-sensitive search on folded inputs
    #[test]
    fn prop_case_insensitive_equals_folded(pattern in pattern_strategy(), text in text_strategy()) {
        let options = MatcherOptions::new().case_insensitive(true);
        let matcher = KmpMatcher::with_options(pattern.to_ascii_uppercase(), options).unwrap();
        let folded = text.to_ascii_lowercase();
        prop_assert_eq!(
            matcher.find_first(&text),
            naive_first(folded.as_bytes(), pattern.as_bytes())
        );
    }

    // Property: every reported offset really holds the pattern
    #[test]
    fn prop_matches_are_genuine(pattern in pattern_strategy(), text in text_strategy()) {
        let matcher = KmpMatcher::new(&pattern).unwrap();
        for pos in matcher.find_all(text.as_bytes()) {
            prop_assert_eq!(&text.as_bytes()[pos..pos + pattern.len()], pattern.as_bytes());
        }
    }
}

#[test_case("hello world", "world", Some(6) ; "suffix")]
#[test_case("hello world", "hello", Some(0) ; "prefix")]
#[test_case("hello world", "o w", Some(4) ; "inner with space")]
#[test_case("hello world", "word", None ; "absent")]
#[test_case("short", "much longer pattern", None ; "pattern longer than text")]
#[test_case("", "a", None ; "empty text")]
#[test_case("aaaaaaaaab", "aaab", Some(6) ; "repeated fallback")]
#[test_case("abacababc", "abababc", None ; "border mismatch")]
fn test_find_cases(text: &str, pattern: &str, expected: Option<usize>) {
    assert_eq!(find(text, pattern).unwrap(), expected);
}
