//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Product;

/// Create a product with the fields ranking cares about.
///
/// This is the canonical implementation used across all tests.
pub fn make_product(id: &str, name: &str, price: f64, rating: f64) -> Product {
    Product {
        id: id.to_string(),
        name: Some(name.to_string()),
        price,
        rating,
        rating_count: 0,
        image_ref: format!("img/{}.jpg", id),
        external_url: format!("p/{}", id),
    }
}

/// Create a product record with no name, as a malformed upstream record.
pub fn make_nameless_product(id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: None,
        price: 0.0,
        rating: 0.0,
        rating_count: 0,
        image_ref: String::new(),
        external_url: String::new(),
    }
}

/// The three-product catalog used throughout the ranking tests.
pub fn shoe_catalog() -> Vec<Product> {
    vec![
        make_product("red", "Red Running Shoes", 59.0, 4.0),
        make_product("blue", "Blue Running Shoes", 64.0, 5.0),
        make_product("jacket", "Winter Jacket", 120.0, 3.0),
    ]
}
