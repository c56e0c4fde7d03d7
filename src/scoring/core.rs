// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind product ranking.
//!
//! ```text
//! score = cosine(query, name)                          if cosine >= MIN_SIMILARITY_THRESHOLD
//!       + KEYWORD_BONUS * |{ k in keywords : k ⊂ name }|
//! ```
//!
//! # Constants
//!
//! | Constant                   | Value | Why this value |
//! |----------------------------|-------|----------------|
//! | `MIN_SIMILARITY_THRESHOLD` | 0.3   | Drops names sharing only a rare incidental term |
//! | `KEYWORD_BONUS`            | 0.2   | One literal keyword hit outweighs most cosine gaps |
//! | `NOISE_AMPLITUDE`          | 0.1   | Half a keyword bonus: reshuffles near-ties only |
//! | `MAX_RESULTS`              | 70    | One result page |
//!
//! These are the defaults of [`crate::RankerConfig`]; callers can override them.

use crate::utils::contains_ignore_case;

/// Products whose cosine similarity is below this are dropped.
pub const MIN_SIMILARITY_THRESHOLD: f64 = 0.3;

/// Bonus per distinct keyword found in a product name.
pub const KEYWORD_BONUS: f64 = 0.2;

/// Upper bound (exclusive) of the uniform re-ranking noise.
pub const NOISE_AMPLITUDE: f64 = 0.1;

/// Maximum number of ranked products returned.
pub const MAX_RESULTS: usize = 70;

/// Size of the "suggested for you" list.
pub const SUGGESTION_COUNT: usize = 10;

/// Does a similarity clear the threshold? The threshold itself passes.
#[inline]
pub fn passes_threshold(similarity: f64, threshold: f64) -> bool {
    similarity >= threshold
}

/// Sum of `per_keyword` over every keyword contained in `name`, ignoring case.
///
/// Keywords are expected to be distinct already; a repeated keyword would be
/// counted twice.
pub fn keyword_bonus(name: &str, keywords: &[String], per_keyword: f64) -> f64 {
    keywords
        .iter()
        .filter(|keyword| contains_ignore_case(name, keyword))
        .map(|_| per_keyword)
        .sum()
}

/// Similarity plus keyword bonus.
pub fn boosted_score(similarity: f64, name: &str, keywords: &[String], per_keyword: f64) -> f64 {
    similarity + keyword_bonus(name, keywords, per_keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(passes_threshold(0.3, MIN_SIMILARITY_THRESHOLD));
        assert!(passes_threshold(0.9, MIN_SIMILARITY_THRESHOLD));
        assert!(!passes_threshold(0.299, MIN_SIMILARITY_THRESHOLD));
    }

    #[test]
    fn test_keyword_bonus_accumulates() {
        let kw = keywords(&["running", "shoes", "jacket"]);
        let bonus = keyword_bonus("Red Running Shoes", &kw, KEYWORD_BONUS);
        assert!((bonus - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_keyword_bonus_matches_substrings() {
        // "shoe" is inside "Shoes"; whole-word matching is not required.
        let kw = keywords(&["shoe"]);
        assert!((keyword_bonus("Shoes", &kw, KEYWORD_BONUS) - KEYWORD_BONUS).abs() < 1e-12);
    }

    #[test]
    fn test_no_keywords_no_bonus() {
        assert_eq!(keyword_bonus("Winter Jacket", &[], KEYWORD_BONUS), 0.0);
        assert_eq!(boosted_score(0.5, "Winter Jacket", &[], KEYWORD_BONUS), 0.5);
    }

    #[test]
    fn test_noise_cannot_outweigh_a_keyword() {
        assert!(NOISE_AMPLITUDE < KEYWORD_BONUS);
    }
}
