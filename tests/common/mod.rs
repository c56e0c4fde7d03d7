//! Shared test utilities and fixtures.

#![allow(dead_code)]

use shoprank::{Jitter, Product, Ranker, RankerConfig};

// Re-export canonical test utilities from shoprank::testing
pub use shoprank::testing::{make_nameless_product, make_product, shoe_catalog};

/// Unrelated catalog entries. Padding a small catalog with these gives shared
/// query terms a realistic idf.
pub const UNRELATED_NAMES: &[&str] = &[
    "Leather Wallet",
    "Cotton Kurta",
    "Steel Water Bottle",
    "Silk Saree",
    "Analog Wrist Watch",
    "Denim Jeans",
];

/// Ranker with storefront defaults but no re-ranking noise.
pub fn deterministic_ranker() -> Ranker {
    ranker_with(RankerConfig {
        jitter: Jitter::Disabled,
        ..RankerConfig::default()
    })
}

pub fn ranker_with(config: RankerConfig) -> Ranker {
    Ranker::with_config(config).expect("test config is valid")
}

/// The shoe catalog plus unrelated products.
pub fn padded_shoe_catalog() -> Vec<Product> {
    let mut catalog = shoe_catalog();
    for (i, name) in UNRELATED_NAMES.iter().enumerate() {
        catalog.push(make_product(&format!("other{i}"), name, 25.0, 4.5));
    }
    catalog
}

/// `count` products that all match "trail sneaker", plus as many unrelated
/// ones so the shared terms keep a positive idf.
pub fn sneaker_catalog(count: usize) -> Vec<Product> {
    let mut catalog: Vec<Product> = (0..count)
        .map(|i| {
            let rating = (i % 5) as f64 + 0.5;
            make_product(&format!("sneaker{i}"), "Trail Sneaker", 40.0 + i as f64, rating)
        })
        .collect();
    for i in 0..count {
        let name = UNRELATED_NAMES[i % UNRELATED_NAMES.len()];
        catalog.push(make_product(&format!("filler{i}"), name, 10.0, 3.0));
    }
    catalog
}

pub fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}
