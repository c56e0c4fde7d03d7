// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the vectors a search is scored against.
//!
//! One index type, built fresh for every query. The catalog is small enough
//! that rebuilding beats keeping an incrementally-updated structure coherent
//! with a catalog that may change between calls.

mod tfidf;

pub use tfidf::*;
