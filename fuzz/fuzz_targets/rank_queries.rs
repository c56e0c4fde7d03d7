// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary byte sequences at the ranker as the search text. Curly
//! quotes, emoji and half-typed filler phrases must all come back as a bounded
//! subset of the catalog.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shoprank::testing::make_product;
use shoprank::{clean_query, Jitter, Product, Ranker, RankerConfig, MAX_RESULTS};
use std::sync::OnceLock;

fn catalog() -> &'static [Product] {
    static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        [
            "Red Running Shoes",
            "Blue Running Shoes",
            "Winter Jacket",
            "Leather Wallet",
            "Cotton Kurta",
            "Steel Water Bottle",
            "Café Noir Mug",
            "USB_C 65W Charger",
        ]
        .iter()
        .enumerate()
        .map(|(i, name)| make_product(&format!("p{i}"), name, 10.0 * i as f64, (i % 5) as f64))
        .collect()
    })
}

fuzz_target!(|query: &[u8]| {
    let query = String::from_utf8_lossy(query);
    // Cap query length to avoid timeouts, on a char boundary
    let query: String = query.chars().take(200).collect();

    let catalog = catalog();
    let ranker = Ranker::with_config(RankerConfig {
        jitter: Jitter::Seeded(0),
        ..RankerConfig::default()
    })
    .expect("default config is valid");

    // INVARIANT 1: cleaned queries are trimmed
    let cleaned = clean_query(&query);
    assert_eq!(cleaned.trim(), cleaned);

    // INVARIANT 2: rank never panics and stays within the page size
    let results = ranker.rank(&query, catalog);
    if cleaned.is_empty() {
        assert_eq!(results, catalog);
    } else {
        assert!(results.len() <= MAX_RESULTS.min(catalog.len()));
    }

    // INVARIANT 3: every result comes from the catalog, once
    for (i, product) in results.iter().enumerate() {
        assert!(catalog.contains(product), "unknown product {}", product.id);
        assert!(
            !results[..i].iter().any(|p| p.id == product.id),
            "duplicate product {}",
            product.id
        );
    }
});
