// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Randomized re-ranking and truncation.
//!
//! Identical queries should not always surface the identical first page; a
//! little noise lets near-ties take turns at the top. Each score gets
//! independent uniform noise in `[0, amplitude)`, the indices are re-sorted by
//! the perturbed score, and that permutation reorders the list. The returned
//! entries keep their unperturbed scores.
//!
//! The noise source is a caller-supplied [`rand::Rng`]; pass `None` for the
//! identity permutation.

use crate::types::ScoredProduct;
use rand::Rng;

/// Permutation of `0..scores.len()` by descending perturbed score.
///
/// Ties (including every pair when `rng` is `None`) keep input order.
pub fn perturbed_order<R: Rng + ?Sized>(
    scores: &[f64],
    amplitude: f64,
    rng: Option<&mut R>,
) -> Vec<usize> {
    let perturbed: Vec<f64> = match rng {
        Some(rng) => scores
            .iter()
            .map(|score| score + rng.gen::<f64>() * amplitude)
            .collect(),
        None => scores.to_vec(),
    };
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| perturbed[b].total_cmp(&perturbed[a]));
    order
}

/// Reorder `scored` by [`perturbed_order`] and keep at most `max_results`.
pub fn rerank<'a, R: Rng + ?Sized>(
    scored: Vec<ScoredProduct<'a>>,
    amplitude: f64,
    max_results: usize,
    rng: Option<&mut R>,
) -> Vec<ScoredProduct<'a>> {
    let scores: Vec<f64> = scored.iter().map(|s| s.score).collect();
    perturbed_order(&scores, amplitude, rng)
        .into_iter()
        .take(max_results)
        .map(|index| scored[index])
        .collect()
}
