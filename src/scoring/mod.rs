// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how products get their numbers.
//!
//! Cosine similarity decides whether a product is relevant at all. Keyword
//! bonuses then reward names that literally contain the query's content words.
//! Rating only breaks exact ties.

mod core;
pub mod ranking;

pub use self::core::*;
