//! WebAssembly bindings.
//!
//! JavaScript strings are UTF-16, so the export measures distance in UTF-16
//! code units, the same units `String.prototype.length` counts.

use crate::fuzzy::{osa_distance_within_utf16, EXCEEDS_BOUND};
use wasm_bindgen::prelude::*;

/// Bounded edit distance for JavaScript callers. Returns `-1` when the
/// distance exceeds `max_distance`.
#[wasm_bindgen(js_name = distanceOf)]
pub fn distance_of_js(a: &str, b: &str, max_distance: u32) -> i32 {
    to_js_distance(osa_distance_within_utf16(a, b, max_distance as usize))
}

/// Distances past `i32::MAX` saturate rather than wrap into the sentinel range.
fn to_js_distance(distance: Option<usize>) -> i32 {
    distance.map_or(EXCEEDS_BOUND as i32, |d| i32::try_from(d).unwrap_or(i32::MAX))
}
