// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog snapshots and the presentation-side orderings.
//!
//! The ranker takes whatever slice it is handed. These helpers cover the two
//! places a catalog comes from (a JSON dump) and the two deterministic
//! orderings the storefront layers on top: the price re-sort of a result page
//! and the top-rated "suggested for you" shelf.

use crate::error::CatalogError;
use crate::types::{PriceOrder, Product};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Read a JSON array of products from a file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Product>, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(BufReader::new(file))?;
    debug!(path = %path.display(), products = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse a JSON array of products.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Re-sort a result page by price. `Default` leaves it untouched.
///
/// Works on anything that exposes a product (`Product`, `ScoredProduct`, ...).
/// The sort is stable: equally priced products keep their ranked order.
pub fn sort_by_price<P: AsRef<Product>>(products: &mut [P], order: PriceOrder) {
    let price = |p: &P| p.as_ref().price;
    match order {
        PriceOrder::Default => {}
        PriceOrder::LowToHigh => products.sort_by(|a, b| price(a).total_cmp(&price(b))),
        PriceOrder::HighToLow => products.sort_by(|a, b| price(b).total_cmp(&price(a))),
    }
}

/// The `count` best-rated products, best first; equal ratings keep catalog
/// order.
pub fn top_rated(catalog: &[Product], count: usize) -> Vec<Product> {
    let mut by_rating: Vec<&Product> = catalog.iter().collect();
    by_rating.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    by_rating.into_iter().take(count).cloned().collect()
}
