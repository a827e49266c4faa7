//! Suffix array property tests.
//!
//! Invariants checked for arbitrary corpora:
//! - the suffix array is a permutation of every text position plus the
//!   sentinel, sorted by suffix
//! - LCP values match a naive common-prefix computation
//! - every record's origin agrees with the assembled origin vector

use super::common::build_index;
use proptest::prelude::*;
use seqidx::Origin;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Random DNA-like sequence lines.
fn dna_line_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ACGT]{1,24}").unwrap()
}

/// A corpus of sequence lines, possibly empty.
fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(dna_line_strategy(), 0..6)
}

/// Lines over a wider alphabet, to exercise more bucket shapes.
fn ascii_corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-z]{1,16}").unwrap(), 1..4)
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The records are a sorted permutation of all suffixes.
    #[test]
    fn prop_records_are_a_sorted_permutation(corpus in corpus_strategy()) {
        let lines: Vec<&str> = corpus.iter().map(|s| s.as_str()).collect();
        let index = build_index(&lines);
        let text = index.text().as_bytes();

        let mut positions: Vec<usize> = index.records().iter().map(|r| r.pos).collect();
        positions.sort_unstable();
        let expected: Vec<usize> = (0..=text.len()).collect();
        prop_assert_eq!(positions, expected);

        prop_assert_eq!(index.records()[0].pos, text.len());
        for pair in index.records().windows(2) {
            prop_assert!(
                text[pair[0].pos..] < text[pair[1].pos..],
                "records out of order: {} before {}",
                pair[0].pos,
                pair[1].pos
            );
        }
    }

    /// LCP values agree with a naive common-prefix computation.
    #[test]
    fn prop_lcp_matches_naive(corpus in corpus_strategy()) {
        let lines: Vec<&str> = corpus.iter().map(|s| s.as_str()).collect();
        let index = build_index(&lines);
        let text = index.text().as_bytes();
        let records = index.records();

        prop_assert_eq!(records[0].lcp, 0);
        for i in 1..records.len() {
            let expected = common_prefix_len(
                &text[records[i - 1].pos..],
                &text[records[i].pos..],
            );
            prop_assert_eq!(records[i].lcp, expected, "lcp mismatch at {}", i);
        }
    }

    /// Every record's origin matches the assembled origin vector; the
    /// sentinel entry carries the separator marker.
    #[test]
    fn prop_origins_are_consistent(corpus in corpus_strategy()) {
        let lines: Vec<&str> = corpus.iter().map(|s| s.as_str()).collect();
        let index = build_index(&lines);
        let n = index.text().len();

        for record in index.records() {
            if record.pos == n {
                prop_assert_eq!(record.origin, Origin::Separator);
            } else {
                prop_assert_eq!(record.origin, index.text().origins()[record.pos]);
            }
        }
    }

    /// Wider alphabets obey the same ordering invariant.
    #[test]
    fn prop_ascii_corpora_sort_correctly(corpus in ascii_corpus_strategy()) {
        let lines: Vec<&str> = corpus.iter().map(|s| s.as_str()).collect();
        let index = build_index(&lines);
        let text = index.text().as_bytes();

        for pair in index.records().windows(2) {
            prop_assert!(text[pair[0].pos..] < text[pair[1].pos..]);
        }
    }
}
