// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the bounded distance.
//!
//! Verifies that the early exits never change an answer: whatever the bound,
//! the result is either the exact OSA distance or the sentinel, and the
//! sentinel only appears when the exact distance is above the bound.

#![no_main]

use arbitrary::Arbitrary;
use damlev::{distance_of, osa_distance_within, EXCEEDS_BOUND};
use libfuzzer_sys::fuzz_target;

/// Fuzz input for bounded distance
#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts in the quadratic reference
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();
    let max = input.max as usize;

    let truth = strsim::osa_distance(&a, &b);
    let result = distance_of(&a, &b, max);

    // INVARIANT 1: exact when it fits, sentinel otherwise
    if truth <= max {
        assert_eq!(result, truth as isize, "a='{}', b='{}', max={}", a, b, max);
    } else {
        assert_eq!(result, EXCEEDS_BOUND, "a='{}', b='{}', max={}", a, b, max);
    }

    // INVARIANT 2: symmetric
    assert_eq!(result, distance_of(&b, &a, max));

    // INVARIANT 3: a string is at distance 0 from itself under any bound
    assert_eq!(osa_distance_within(&a, &a, 0), Some(0));
});
