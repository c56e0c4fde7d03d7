// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a search works on.
//!
//! A `Product` is a catalog entry exactly as the storefront delivers it. The
//! ranker borrows products, never edits them, and hands clones back in ranked
//! order. `ScoredProduct` only lives for the duration of one `rank` call.
//!
//! # Wire names
//!
//! The storefront's catalog provider speaks camelCase with a Mongo-style `_id`.
//! Serde aliases accept both that shape and plain snake_case, so a catalog
//! dumped by either side loads without a translation step.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog entry.
///
/// `name` is optional because upstream records are occasionally missing it.
/// Ranking a catalog that contains such a record fails and falls back to the
/// unranked catalog; see [`crate::RankError::MissingName`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "productName")]
    pub name: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default, alias = "ratingCount")]
    pub rating_count: u64,
    #[serde(default, alias = "searchImage")]
    pub image_ref: String,
    #[serde(default, alias = "landingPageUrl")]
    pub external_url: String,
}

impl Product {
    /// Product name, or the empty string when the record has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

impl AsRef<Product> for Product {
    fn as_ref(&self) -> &Product {
        self
    }
}

/// A product paired with its relevance score for one search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredProduct<'a> {
    pub product: &'a Product,
    pub score: f64,
}

impl AsRef<Product> for ScoredProduct<'_> {
    fn as_ref(&self) -> &Product {
        self.product
    }
}

/// Outcome of a successful ranking pass.
///
/// `Passthrough` means there was nothing to rank (empty cleaned query or empty
/// catalog) and the caller should show the catalog as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum RankOutcome<'a> {
    Passthrough,
    Ranked(Vec<ScoredProduct<'a>>),
}

impl<'a> RankOutcome<'a> {
    /// Materialize the outcome as an owned product list.
    pub fn into_products(self, catalog: &[Product]) -> Vec<Product> {
        match self {
            RankOutcome::Passthrough => catalog.to_vec(),
            RankOutcome::Ranked(scored) => scored.into_iter().map(|s| s.product.clone()).collect(),
        }
    }
}

/// Secondary ordering the presentation layer applies to ranked results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PriceOrder {
    /// Keep the ranker's order.
    #[default]
    Default,
    LowToHigh,
    HighToLow,
}

impl fmt::Display for PriceOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceOrder::Default => "default",
            PriceOrder::LowToHigh => "low-to-high",
            PriceOrder::HighToLow => "high-to-low",
        };
        f.write_str(label)
    }
}
