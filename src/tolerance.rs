// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! How many typos to forgive, by term length.
//!
//! Callers pick the bound, not the distance function. One typo in a
//! three-letter word is a different word; one typo in "photography" is a
//! typo. `Tolerance` captures that policy as data so it can live in a config
//! file next to everything else.
//!
//! ```json
//! { "mode": "by_length", "tiers": [
//!     { "min_len": 0, "max_distance": 0 },
//!     { "min_len": 4, "max_distance": 1 },
//!     { "min_len": 8, "max_distance": 2 }
//! ] }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fuzzy::osa_distance_within;

/// Error type for tolerance configuration.
#[derive(Error, Debug)]
pub enum ToleranceError {
    #[cfg(feature = "serde_json")]
    #[error("invalid tolerance JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tolerance has no tiers")]
    EmptyTiers,

    #[error("tier {position}: min_len {min_len} is not above the previous tier")]
    UnorderedTiers { position: usize, min_len: usize },

    #[error("tier {position}: max_distance {max_distance} is below the previous tier")]
    DecreasingDistance { position: usize, max_distance: usize },
}

/// One step of a length-scaled tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Shortest term (in chars) this tier applies to
    pub min_len: usize,
    /// Bound for terms at least `min_len` long
    pub max_distance: usize,
}

/// Bound policy for fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Tolerance {
    /// Same bound for every term.
    Fixed { max_distance: usize },
    /// Bound grows with term length. Tiers are ascending by `min_len`.
    ByLength { tiers: Vec<Tier> },
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::ByLength {
            tiers: vec![
                Tier { min_len: 0, max_distance: 0 },
                Tier { min_len: 4, max_distance: 1 },
                Tier { min_len: 8, max_distance: 2 },
            ],
        }
    }
}

impl Tolerance {
    /// Length-scaled tolerance, validated.
    pub fn by_length(tiers: Vec<Tier>) -> Result<Self, ToleranceError> {
        let tolerance = Self::ByLength { tiers };
        tolerance.validate()?;
        Ok(tolerance)
    }

    /// Parse and validate a tolerance from JSON.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ToleranceError> {
        let tolerance: Self = serde_json::from_str(json)?;
        tolerance.validate()?;
        tracing::debug!(?tolerance, "loaded tolerance");
        Ok(tolerance)
    }

    /// Tiers must be non-empty, strictly ascending by length, and never
    /// lower the bound for a longer term.
    pub fn validate(&self) -> Result<(), ToleranceError> {
        let Self::ByLength { tiers } = self else {
            return Ok(());
        };

        if tiers.is_empty() {
            return Err(ToleranceError::EmptyTiers);
        }

        for (position, pair) in tiers.windows(2).enumerate() {
            let (lower, upper) = (pair[0], pair[1]);
            if upper.min_len <= lower.min_len {
                return Err(ToleranceError::UnorderedTiers {
                    position: position + 1,
                    min_len: upper.min_len,
                });
            }
            if upper.max_distance < lower.max_distance {
                return Err(ToleranceError::DecreasingDistance {
                    position: position + 1,
                    max_distance: upper.max_distance,
                });
            }
        }
        Ok(())
    }

    /// Bound for a term of this length. Terms shorter than every tier get 0.
    pub fn max_distance_for(&self, term: &str) -> usize {
        match self {
            Self::Fixed { max_distance } => *max_distance,
            Self::ByLength { tiers } => {
                let len = term.chars().count();
                tiers
                    .iter()
                    .take_while(|tier| tier.min_len <= len)
                    .last()
                    .map_or(0, |tier| tier.max_distance)
            }
        }
    }

    /// Distance from `query` to `candidate`, bounded by the query's tolerance.
    pub fn matches(&self, query: &str, candidate: &str) -> Option<usize> {
        osa_distance_within(query, candidate, self.max_distance_for(query))
    }
}
