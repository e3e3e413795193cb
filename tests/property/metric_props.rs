//! Metric and bound properties of the bounded distance.

use damlev::testing::transpose_at;
use damlev::{distance_of, osa_distance_within, EXCEEDS_BOUND};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabet so repeats, swaps and shared substrings are common.
fn dense_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,8}").unwrap()
}

/// Generate word-like strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,12}").unwrap()
}

/// Generate Unicode words with diacritics and multi-byte characters.
fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "café".to_string(),
        "cafe".to_string(),
        "naïve".to_string(),
        "naive".to_string(),
        "résumé".to_string(),
        "tōkyō".to_string(),
        "తెలుగు".to_string(),
        "హరీష్".to_string(),
        "😀😃".to_string(),
        String::new(),
    ])
}

// ============================================================================
// METRIC PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: a sequence is at distance 0 from itself, under any bound.
    #[test]
    fn prop_identity(word in word_strategy(), max in 0usize..5) {
        prop_assert_eq!(distance_of(&word, &word, max), 0);
    }

    /// Property: distance_of(a, b, k) == distance_of(b, a, k).
    #[test]
    fn prop_symmetry(a in dense_word_strategy(), b in dense_word_strategy(), max in 0usize..10) {
        prop_assert_eq!(distance_of(&a, &b, max), distance_of(&b, &a, max));
    }

    /// Property: symmetry holds for multi-byte input too.
    #[test]
    fn prop_symmetry_unicode(a in unicode_word_strategy(), b in unicode_word_strategy(), max in 0usize..8) {
        prop_assert_eq!(distance_of(&a, &b, max), distance_of(&b, &a, max));
    }

    /// Property: any non-sentinel result lies in [|len_a - len_b|, max(len_a, len_b)].
    #[test]
    fn prop_length_bounds(a in word_strategy(), b in word_strategy(), max in 0usize..15) {
        let len_a = a.chars().count();
        let len_b = b.chars().count();
        let result = distance_of(&a, &b, max);

        if result != EXCEEDS_BOUND {
            let d = result as usize;
            prop_assert!(d >= len_a.abs_diff(len_b), "{} below length difference", d);
            prop_assert!(d <= len_a.max(len_b), "{} above longer length", d);
            prop_assert!(d <= max, "{} above bound {}", d, max);
        }
    }

    /// Property: a length difference above the bound is always rejected.
    #[test]
    fn prop_length_difference_rejects(a in word_strategy(), b in word_strategy(), max in 0usize..4) {
        let len_diff = a.chars().count().abs_diff(b.chars().count());
        prop_assume!(len_diff > max);
        prop_assert_eq!(distance_of(&a, &b, max), EXCEEDS_BOUND);
    }

    /// Property: raising the bound never changes a found distance.
    #[test]
    fn prop_monotone_in_bound(
        a in dense_word_strategy(),
        b in dense_word_strategy(),
        k1 in 0usize..8,
        extra in 0usize..8,
    ) {
        if let Some(d) = osa_distance_within(&a, &b, k1) {
            prop_assert_eq!(osa_distance_within(&a, &b, k1 + extra), Some(d));
        }
    }

    /// Property: a bound of max(len) always yields an exact answer.
    #[test]
    fn prop_large_bound_never_rejects(a in word_strategy(), b in word_strategy()) {
        let max = a.chars().count().max(b.chars().count());
        prop_assert!(osa_distance_within(&a, &b, max).is_some());
    }

    /// Property: one adjacent swap is at most one edit.
    #[test]
    fn prop_single_transposition(word in word_strategy(), i in 0usize..12) {
        let swapped = transpose_at(&word, i);
        let d = osa_distance_within(&word, &swapped, 1);
        prop_assert!(d == Some(0) || d == Some(1), "swap gave {:?}", d);
    }
}
