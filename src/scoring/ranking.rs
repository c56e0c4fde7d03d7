// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: score first, rating on exact ties.
//!
//! Sorting is stable, so products with equal score and equal rating keep
//! their catalog order.

use crate::types::ScoredProduct;
use std::cmp::Ordering;

/// Compare two scored products for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Rating** - descending, only when scores are exactly equal
///
/// A NaN rating sorts below every real rating. Treating it as equal to
/// everything would not be a total order, which `sort_by` may panic on.
pub fn compare_scored(a: &ScoredProduct<'_>, b: &ScoredProduct<'_>) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => rating_key(b).total_cmp(&rating_key(a)),
        ord => ord,
    }
}

fn rating_key(scored: &ScoredProduct<'_>) -> f64 {
    let rating = scored.product.rating;
    if rating.is_nan() {
        f64::NEG_INFINITY
    } else {
        rating
    }
}

/// Sort in place by [`compare_scored`].
pub fn sort_scored(scored: &mut [ScoredProduct<'_>]) {
    scored.sort_by(compare_scored);
}
