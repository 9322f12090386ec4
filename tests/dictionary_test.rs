// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the substring dictionaries.
//! Exercises the public API the way a downstream crate would.

use std::sync::Arc;
use std::thread;

use mauka_dict_lib::data_structures::dictionary::{
    AnyDictionary, DictionaryError, DictionaryKind, DictionaryOptions, SubstringDictionary,
    SubstringMatch,
};
use mauka_dict_lib::data_structures::kmp_matcher::{find, KmpMatcher};
use mauka_dict_lib::data_structures::{LanaiRadix, NiihauTrie};

fn both_kinds() -> [AnyDictionary; 2] {
    [
        AnyDictionary::new(DictionaryKind::Compressed, DictionaryOptions::default()),
        AnyDictionary::new(DictionaryKind::Plain, DictionaryOptions::default()),
    ]
}

#[test]
fn test_word_list_scenario() {
    for mut dict in both_kinds() {
        for word in ["romane", "romanus", "romulus", "rubens", "ruber", "rubicon", "rubicundus"] {
            assert!(dict.insert(word.as_bytes()).unwrap());
        }
        assert_eq!(dict.len(), 7);

        assert!(dict.contains_substring(b"the rubicon was crossed").unwrap());
        assert!(dict.contains_substring(b"romulusx").unwrap());
        assert!(!dict.contains_substring(b"roman rube rubi").unwrap());
        assert_eq!(
            dict.find_first(b"on the ruber river").unwrap(),
            Some(SubstringMatch { start: 7, end: 12 })
        );
    }
}

#[test]
fn test_compression_saves_nodes() {
    let mut radix = LanaiRadix::new();
    let mut trie = NiihauTrie::new();
    for word in ["interstellar", "internal", "internet", "interval"] {
        radix.insert(word.as_bytes()).unwrap();
        trie.insert(word.as_bytes()).unwrap();
    }

    assert!(radix.node_count() < trie.node_count());
    assert_eq!(radix.patterns(), trie.patterns());
    for text in [&b"an internet cafe"[..], b"intern", b"intervals", b""] {
        assert_eq!(radix.find_first(text), trie.find_first(text));
    }
    assert!(matches!(
        radix.find_first("an internet café".as_bytes()),
        Err(DictionaryError::UnsupportedByte { byte: 0xc3, position: 15 })
    ));
}

#[test]
fn test_shared_dictionary_across_threads() {
    let mut dict = AnyDictionary::new(DictionaryKind::Compressed, DictionaryOptions::default());
    for pattern in ["alpha", "beta", "gamma"] {
        dict.insert(pattern.as_bytes()).unwrap();
    }
    let dict = Arc::new(dict);

    let workers: Vec<_> = (0..4)
        .map(|t| {
            let dict = Arc::clone(&dict);
            thread::spawn(move || {
                (0..100)
                    .filter(|i| {
                        let text = if (i + t) % 3 == 0 {
                            format!("{i} gamma {t}")
                        } else {
                            format!("{i} delta {t}")
                        };
                        dict.contains_substring(text.as_bytes()).unwrap()
                    })
                    .count()
            })
        })
        .collect();

    let hits: usize = workers.into_iter().map(|w| w.join().unwrap()).sum();
    // For each t, 0..100 holds 33 or 34 values with (i + t) % 3 == 0
    assert_eq!(hits, 34 + 33 + 33 + 34);
}

#[test]
fn test_dispose_returns_every_node() {
    for mut dict in both_kinds() {
        dict.insert(b"abc").unwrap();
        dict.insert(b"abd").unwrap();
        let nodes = dict.node_count();
        assert_eq!(dict.dispose(), nodes);
    }
}

#[test]
fn test_matcher_agrees_with_dictionary_of_one() {
    let texts: [&[u8]; 4] = [b"mississippi", b"missing", b"sip", b""];
    let matcher = KmpMatcher::new("issip").unwrap();
    let mut dict = LanaiRadix::new();
    dict.insert(b"issip").unwrap();

    for text in texts {
        let from_dict = dict.find_first(text).unwrap().map(|m| m.start);
        assert_eq!(matcher.find_first(text), from_dict);
    }
    assert_eq!(find("mississippi", "issip").unwrap(), Some(4));
}
