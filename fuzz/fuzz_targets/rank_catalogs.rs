// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for catalog shapes.
//!
//! Generates whole catalogs with odd names, missing names and non-finite
//! prices or ratings. The ranker either ranks or falls back, and never crashes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shoprank::testing::make_nameless_product;
use shoprank::{Jitter, Product, RankOutcome, Ranker, RankerConfig};

#[derive(Debug, Arbitrary)]
struct Entry {
    name: Option<String>,
    price: f64,
    rating: f64,
}

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    entries: Vec<Entry>,
    max_results: u8,
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

fuzz_target!(|input: Input| {
    if input.entries.len() > 64 || input.query.len() > 200 {
        return;
    }
    let catalog: Vec<Product> = input
        .entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut product = make_nameless_product(&format!("p{i}"));
            product.name = entry.name;
            product.price = entry.price;
            product.rating = entry.rating;
            product
        })
        .collect();

    let config = RankerConfig {
        max_results: usize::from(input.max_results.max(1)),
        jitter: Jitter::Disabled,
        ..RankerConfig::default()
    };
    let ranker = Ranker::with_config(config).expect("config is valid");

    // INVARIANT 1: rank never panics, and anything but a ranking means the
    // full catalog. Ids are compared since NaN prices defeat `==`.
    let results = ranker.rank(&input.query, &catalog);
    match ranker.try_rank(&input.query, &catalog) {
        Ok(RankOutcome::Ranked(scored)) => {
            assert_eq!(results.len(), scored.len());
            assert!(scored.len() <= config.max_results);
            // INVARIANT 2: every surviving score is finite
            assert!(scored.iter().all(|s| s.score.is_finite()));
        }
        Ok(RankOutcome::Passthrough) | Err(_) => assert_eq!(ids(&results), ids(&catalog)),
    }
});
