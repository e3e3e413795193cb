//! Bounded Damerau-Levenshtein distance with early abort.
//!
//! Computes the restricted (optimal string alignment) variant: insertion,
//! deletion, substitution and adjacent transposition each cost 1, and no
//! substring is edited twice. The caller supplies a bound; anything above it
//! comes back as "exceeded" without the exact value being computed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐
//! │ tolerance.rs │────▶│  fuzzy/osa.rs    │◀──── wasm.rs (feature "wasm")
//! │ (bound per   │     │ (bounded_distance│
//! │  term length)│     │  distance_of)    │
//! └──────────────┘     └──────────────────┘
//!                               │
//!                               ▼
//!                      ┌──────────────────┐
//!                      │   contracts.rs   │
//!                      │ (debug asserts)  │
//!                      └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use damlev::{distance_of, osa_distance_within, Tolerance, EXCEEDS_BOUND};
//!
//! assert_eq!(distance_of("ab", "ba", 5), 1);
//! assert_eq!(distance_of("abcdef", "ghijkl", 2), EXCEEDS_BOUND);
//! assert_eq!(osa_distance_within("kitten", "sitting", 3), Some(3));
//!
//! let tolerance = Tolerance::default();
//! assert_eq!(tolerance.matches("photography", "fotography"), Some(2));
//! ```

// Module declarations
pub mod contracts;
mod fuzzy;
pub mod testing;
mod tolerance;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use fuzzy::{
    bounded_distance, distance_of, is_within, osa_distance_within, osa_distance_within_utf16,
    EXCEEDS_BOUND,
};
pub use tolerance::{Tier, Tolerance, ToleranceError};

#[cfg(feature = "wasm")]
pub use wasm::distance_of_js;
