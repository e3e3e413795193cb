// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the bounded OSA distance.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! For every pair of byte strings up to `MAX_LEN` and every bound up to
//! `MAX_BOUND`:
//!
//! 1. **No panics**: no out-of-bounds index, no overflow
//! 2. **Early exits are sound**: the bounded result equals the full-matrix
//!    distance whenever that distance is within the bound, and is `None`
//!    otherwise
//! 3. **Symmetry**: swapping the arguments never changes the result

/// Longest input the proofs enumerate.
pub const MAX_LEN: usize = 4;

/// Largest bound the proofs enumerate.
pub const MAX_BOUND: usize = 5;

// ============================================================================
// BOUNDED DISTANCE (copied from src/fuzzy/osa.rs, tracing removed)
// ============================================================================

/// Bounded restricted Damerau-Levenshtein distance.
pub fn bounded_distance(a: &[u8], b: &[u8], max: usize) -> Option<usize> {
    let (rows, cols) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let (n, m) = (rows.len(), cols.len());

    if n - m > max {
        return None;
    }

    let mut before: Vec<usize> = vec![0; m + 1];
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr: Vec<usize> = vec![0; m + 1];

    for i in 1..=n {
        let rc = rows[i - 1];
        curr[0] = i;
        let mut min_row = i;

        for j in 1..=m {
            let cc = cols[j - 1];
            let cost = usize::from(rc != cc);
            let mut value = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && rc == cols[j - 2] && rows[i - 2] == cc {
                value = value.min(before[j - 2] + 1);
            }
            curr[j] = value;
            min_row = min_row.min(value);
        }

        if min_row > max {
            return None;
        }

        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[m];
    (distance <= max).then_some(distance)
}

/// Full-matrix distance, no bound. The reference the proofs compare against.
pub fn full_distance(a: &[u8], b: &[u8]) -> usize {
    let (n, m) = (a.len(), b.len());
    let mut d = vec![vec![0usize; m + 1]; n + 1];
    for i in 0..=n {
        d[i][0] = i;
    }
    for j in 0..=m {
        d[0][j] = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1).min(d[i][j - 1] + 1).min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + 1);
            }
        }
    }
    d[n][m]
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic byte string of length `0..=MAX_LEN` over a 3-letter alphabet.
    fn any_short_string() -> Vec<u8> {
        let len: usize = kani::any();
        kani::assume(len <= MAX_LEN);
        let mut s = Vec::with_capacity(len);
        for _ in 0..len {
            let c: u8 = kani::any();
            kani::assume(c < 3);
            s.push(c);
        }
        s
    }

    /// Proof: early exits never change the answer.
    #[kani::proof]
    #[kani::unwind(6)]
    fn bounded_matches_full_matrix() {
        let a = any_short_string();
        let b = any_short_string();
        let max: usize = kani::any();
        kani::assume(max <= MAX_BOUND);

        let truth = full_distance(&a, &b);
        let result = bounded_distance(&a, &b, max);

        if truth <= max {
            assert_eq!(result, Some(truth));
        } else {
            assert_eq!(result, None);
        }
    }

    /// Proof: argument order never matters.
    #[kani::proof]
    #[kani::unwind(6)]
    fn bounded_is_symmetric() {
        let a = any_short_string();
        let b = any_short_string();
        let max: usize = kani::any();
        kani::assume(max <= MAX_BOUND);

        assert_eq!(bounded_distance(&a, &b, max), bounded_distance(&b, &a, max));
    }
}
