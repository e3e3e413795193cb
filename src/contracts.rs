//! Runtime contracts for edit distance results.
//!
//! Debug-mode assertions on the properties every returned distance must
//! satisfy. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function             | Property                                      |
//! |-------------------------------|-----------------------------------------------|
//! | `check_distance_lower_bound`  | `\|len_a - len_b\| <= d <= max(len_a, len_b)` |
//! | `check_distance_within_bound` | A returned distance never exceeds the bound   |
//!
//! # Usage
//!
//! ```ignore
//! use damlev::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_distance_lower_bound(a.len(), b.len(), distance);
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The sentinel must never collide with a real distance.
const _: () = assert!(crate::fuzzy::EXCEEDS_BOUND < 0);

// ============================================================================
// DISTANCE CONTRACTS
// ============================================================================

/// Check a distance against the bounds implied by the input lengths.
///
/// Every extra unit in the longer input needs at least one insertion or
/// deletion, and substituting position by position then inserting the rest
/// never takes more than the longer length.
#[inline]
pub fn check_distance_lower_bound(len_a: usize, len_b: usize, distance: usize) {
    let len_diff = len_a.abs_diff(len_b);
    debug_assert!(
        len_diff <= distance,
        "Contract violation: distance {} < |{} - {}| = {}",
        distance,
        len_a,
        len_b,
        len_diff
    );
    debug_assert!(
        distance <= len_a.max(len_b),
        "Contract violation: distance {} > max({}, {})",
        distance,
        len_a,
        len_b
    );
}

/// Check that a distance handed back to the caller is within their bound.
#[inline]
pub fn check_distance_within_bound(distance: usize, max: usize) {
    debug_assert!(
        distance <= max,
        "Contract violation: returned distance {} exceeds bound {}",
        distance,
        max
    );
}
