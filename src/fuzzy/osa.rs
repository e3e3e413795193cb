// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded optimal string alignment (restricted Damerau-Levenshtein) distance.
//!
//! Insertions, deletions, substitutions and adjacent transpositions all cost 1,
//! and no substring is edited more than once. That restriction matters: `"ca"`
//! to `"abc"` is 3 here, not the unrestricted 2.
//!
//! Two early exits keep the bounded case cheap:
//! 1. `|len(a) - len(b)|` is a lower bound on the distance. If it exceeds the
//!    bound, nothing is allocated.
//! 2. Every alignment passes through each row of the matrix, and cell values
//!    never decrease along an alignment. Once a whole row sits above the bound,
//!    the final cell will too.
//!
//! A transposition jumps from row `i-2` to row `i`, but the cell it skips in
//! row `i-1` is at most one substitution away from its origin, so (2) still
//! holds with the transposition rule in place.
//!
//! Only three rows of the matrix are live at a time (`i-2` for the
//! transposition lookback, `i-1`, and `i`), sized by the shorter input.

use crate::contracts::{check_distance_lower_bound, check_distance_within_bound};
use tracing::trace;

/// Sentinel returned by [`distance_of`] when the distance exceeds the bound.
pub const EXCEEDS_BOUND: isize = -1;

/// Restricted Damerau-Levenshtein distance between two sequences, if it is at
/// most `max`.
///
/// Returns `None` when the distance exceeds `max`. The exact value is not
/// computed in that case.
///
/// ```
/// use damlev::bounded_distance;
///
/// assert_eq!(bounded_distance(b"ab", b"ba", 5), Some(1));
/// assert_eq!(bounded_distance(b"abcdef", b"ghijkl", 2), None);
/// ```
pub fn bounded_distance<T: PartialEq>(a: &[T], b: &[T], max: usize) -> Option<usize> {
    // The metric is symmetric: walk rows over the longer input so the
    // window is sized by the shorter one.
    let (rows, cols) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let (n, m) = (rows.len(), cols.len());

    // Early-exit: length difference is a lower bound on edit distance
    if n - m > max {
        trace!(len_a = a.len(), len_b = b.len(), max, "length difference exceeds bound");
        return None;
    }

    let mut before: Vec<usize> = vec![0; m + 1];
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr: Vec<usize> = vec![0; m + 1];

    for i in 1..=n {
        let rc = &rows[i - 1];
        curr[0] = i;
        let mut min_row = i;

        for j in 1..=m {
            let cc = &cols[j - 1];
            let cost = usize::from(rc != cc);

            let mut value = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);

            if i > 1 && j > 1 && *rc == cols[j - 2] && rows[i - 2] == *cc {
                value = value.min(before[j - 2] + 1);
            }

            curr[j] = value;
            if value < min_row {
                min_row = value;
            }
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            trace!(row = i, min_row, max, "row minimum exceeds bound");
            return None;
        }

        // before <- i-1, prev <- i, curr <- scratch
        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[m];
    if distance > max {
        return None;
    }

    check_distance_lower_bound(n, m, distance);
    check_distance_within_bound(distance, max);
    Some(distance)
}

/// Distance between two strings, comparing Unicode scalar values.
pub fn osa_distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    bounded_distance(&a, &b, max)
}

/// Distance between two strings, comparing UTF-16 code units.
///
/// Characters outside the BMP are two units each, so `"😀"` is two edits away
/// from `""` here but one with [`osa_distance_within`].
pub fn osa_distance_within_utf16(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<u16> = a.encode_utf16().collect();
    let b: Vec<u16> = b.encode_utf16().collect();
    bounded_distance(&a, &b, max)
}

/// Sentinel form: the distance, or [`EXCEEDS_BOUND`] if it is above `max`.
///
/// ```
/// use damlev::{distance_of, EXCEEDS_BOUND};
///
/// assert_eq!(distance_of("kitten", "sitting", 3), 3);
/// assert_eq!(distance_of("", "abcd", 2), EXCEEDS_BOUND);
/// ```
pub fn distance_of(a: &str, b: &str, max: usize) -> isize {
    osa_distance_within(a, b, max).map_or(EXCEEDS_BOUND, |d| d as isize)
}

/// Are these strings within `max` edits of each other?
pub fn is_within(a: &str, b: &str, max: usize) -> bool {
    osa_distance_within(a, b, max).is_some()
}
