//! Shared test utilities and reference implementations.

#![allow(dead_code)]

// ============================================================================
// ORACLES
// ============================================================================

/// Full-matrix optimal string alignment distance, no bound, no early exit.
///
/// Obviously-correct reference: every cell of the (n+1)×(m+1) matrix is
/// filled and kept. If the bounded implementation disagrees, this is right.
pub fn oracle_osa_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
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
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + 1);
            }
        }
    }
    d[n][m]
}

/// What the bounded sentinel API must return given the true distance.
pub fn expected_sentinel(a: &str, b: &str, max: usize) -> isize {
    let d = oracle_osa_distance(a, b);
    if d <= max {
        d as isize
    } else {
        -1
    }
}
