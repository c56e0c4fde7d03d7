// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranker configuration.
//!
//! Defaults reproduce the storefront's behaviour. A JSON file may override any
//! subset of fields; missing fields keep their defaults:
//!
//! ```json
//! { "min_similarity": 0.25, "max_results": 40, "jitter": { "seeded": 7 } }
//! ```

use crate::error::ConfigError;
use crate::scoring::{KEYWORD_BONUS, MAX_RESULTS, MIN_SIMILARITY_THRESHOLD, NOISE_AMPLITUDE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Source of the re-ranking noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jitter {
    /// Fresh OS-seeded randomness on every call.
    #[default]
    Entropy,
    /// Deterministic noise: the same seed gives the same order every call.
    Seeded(u64),
    /// No noise; output is the plain score order.
    Disabled,
}

/// Tunables for one [`crate::Ranker`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankerConfig {
    /// Minimum cosine similarity, in `[0, 1]`.
    pub min_similarity: f64,
    /// Bonus per query keyword found in a product name.
    pub keyword_bonus: f64,
    /// Exclusive upper bound of the uniform re-ranking noise.
    pub noise_amplitude: f64,
    /// Result page size.
    pub max_results: usize,
    pub jitter: Jitter,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            min_similarity: MIN_SIMILARITY_THRESHOLD,
            keyword_bonus: KEYWORD_BONUS,
            noise_amplitude: NOISE_AMPLITUDE,
            max_results: MAX_RESULTS,
            jitter: Jitter::Entropy,
        }
    }
}

impl RankerConfig {
    /// Check every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(ConfigError::OutOfRange {
                field: "min_similarity",
                expected: "within [0, 1]",
                value: self.min_similarity,
            });
        }
        check_non_negative("keyword_bonus", self.keyword_bonus)?;
        check_non_negative("noise_amplitude", self.noise_amplitude)?;
        if self.max_results == 0 {
            return Err(ConfigError::ZeroResults);
        }
        Ok(())
    }

    /// Load and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: RankerConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected: "a finite value >= 0",
            value,
        })
    }
}
