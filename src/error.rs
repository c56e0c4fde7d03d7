// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! `RankError` never reaches a shopper: [`crate::Ranker::rank`] logs it and
//! serves the unranked catalog instead. The other two cover the file-facing
//! edges (config and catalog loading) and do propagate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure inside the ranking pipeline.
#[derive(Debug, Error)]
pub enum RankError {
    /// A catalog record has no name to index.
    #[error("product #{index} (id {id:?}) has no name")]
    MissingName { index: usize, id: String },
    /// Something in the pipeline (usually a custom tagger) panicked.
    #[error("ranking panicked: {0}")]
    Panicked(String),
}

/// Invalid or unreadable ranker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
    #[error("max_results must be at least 1")]
    ZeroResults,
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Unreadable catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_product() {
        let err = RankError::MissingName {
            index: 3,
            id: "p9".to_string(),
        };
        assert_eq!(err.to_string(), "product #3 (id \"p9\") has no name");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ConfigError::OutOfRange {
            field: "keyword_bonus",
            expected: "a finite value >= 0",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "keyword_bonus must be a finite value >= 0, got -1"
        );
    }
}
