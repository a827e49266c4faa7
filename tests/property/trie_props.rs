//! Trie scanner property tests.
//!
//! The scanner is checked against the naive per-pattern oracle, and insertion
//! idempotence is verified structurally: re-inserting patterns changes
//! neither ids nor scan output.

use super::common::naive_occurrences;
use proptest::prelude::*;
use seqidx::PatternTrie;

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ACGT]{0,64}").unwrap()
}

fn patterns_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[ACGT]{1,5}").unwrap(), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(250))]

    /// Every pattern's hit list equals the naive occurrence set, ascending.
    #[test]
    fn prop_scan_matches_naive(text in text_strategy(), patterns in patterns_strategy()) {
        let mut trie = PatternTrie::new();
        let ids: Vec<usize> = patterns.iter().map(|p| trie.insert(p)).collect();

        let hits = trie.scan(text.as_bytes());
        for (pattern, &id) in patterns.iter().zip(&ids) {
            prop_assert_eq!(
                &hits[id],
                &naive_occurrences(text.as_bytes(), pattern.as_bytes()),
                "wrong hits for {:?} in {:?}",
                pattern,
                text
            );
        }
    }

    /// Re-inserting every pattern leaves ids and scan output unchanged.
    #[test]
    fn prop_insert_is_idempotent(text in text_strategy(), patterns in patterns_strategy()) {
        let mut once = PatternTrie::new();
        let ids_once: Vec<usize> = patterns.iter().map(|p| once.insert(p)).collect();

        let mut twice = PatternTrie::new();
        let ids_first: Vec<usize> = patterns.iter().map(|p| twice.insert(p)).collect();
        let ids_second: Vec<usize> = patterns.iter().map(|p| twice.insert(p)).collect();

        prop_assert_eq!(ids_first, ids_second.clone());
        prop_assert_eq!(ids_once, ids_second);
        prop_assert_eq!(once.scan(text.as_bytes()), twice.scan(text.as_bytes()));
    }

    /// Hit lists are strictly ascending: one hit per position, no duplicates.
    #[test]
    fn prop_hits_strictly_ascending(text in text_strategy(), patterns in patterns_strategy()) {
        let mut trie = PatternTrie::new();
        for pattern in &patterns {
            trie.insert(pattern);
        }
        for hits in trie.scan(text.as_bytes()) {
            for pair in hits.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }
}
