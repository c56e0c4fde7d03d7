// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The relevance ranker: query + catalog in, ranked products out.
//!
//! # Pipeline
//!
//! ```text
//! clean_query ─▶ TfIdfIndex::build ─▶ cosine + threshold ─▶ keyword bonus
//!                                                                │
//!          truncate ◀─ perturbed_order ◀─ sort (score, rating) ◀─┘
//! ```
//!
//! # Failure policy
//!
//! [`Ranker::rank`] never fails. Any [`RankError`], and any panic inside the
//! pipeline, is logged and answered with the catalog in its original order.
//! Use [`Ranker::try_rank`] to see the error instead.

use crate::config::{Jitter, RankerConfig};
use crate::error::{ConfigError, RankError};
use crate::index::TfIdfIndex;
use crate::query::clean_query;
use crate::rerank::rerank;
use crate::scoring::ranking::sort_scored;
use crate::scoring::{boosted_score, passes_threshold};
use crate::tagger::{extract_keywords, LexiconTagger, Tagger};
use crate::types::{Product, RankOutcome, ScoredProduct};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Ranks catalog snapshots against free-text queries.
///
/// Holds only configuration and a tagger; every call rebuilds its index, so a
/// shared `&Ranker` can serve any number of searches.
#[derive(Debug, Clone, Default)]
pub struct Ranker<T = LexiconTagger> {
    config: RankerConfig,
    tagger: T,
}

impl Ranker<LexiconTagger> {
    /// Storefront defaults with the built-in lexicon tagger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validated custom configuration with the built-in tagger.
    pub fn with_config(config: RankerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            tagger: LexiconTagger::new(),
        })
    }
}

impl<T: Tagger> Ranker<T> {
    /// Swap in a different part-of-speech tagger.
    pub fn with_tagger<U: Tagger>(self, tagger: U) -> Ranker<U> {
        Ranker {
            config: self.config,
            tagger,
        }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    /// Rank `catalog` against `query`, falling back to the unranked catalog
    /// on any failure.
    ///
    /// Returns the catalog unchanged when the cleaned query or the catalog is
    /// empty, and at most `max_results` products otherwise.
    pub fn rank(&self, query: &str, catalog: &[Product]) -> Vec<Product> {
        self.rank_guarded(catalog, || self.try_rank(query, catalog))
    }

    /// Like [`Ranker::rank`] but with an explicit noise source, ignoring the
    /// configured [`Jitter`].
    pub fn rank_with_rng<R: Rng + ?Sized>(
        &self,
        query: &str,
        catalog: &[Product],
        rng: &mut R,
    ) -> Vec<Product> {
        self.rank_guarded(catalog, || self.run(query, catalog, Some(rng)))
    }

    /// Rank without the fallback.
    pub fn try_rank<'a>(
        &self,
        query: &str,
        catalog: &'a [Product],
    ) -> Result<RankOutcome<'a>, RankError> {
        match self.config.jitter {
            Jitter::Disabled => self.run::<StdRng>(query, catalog, None),
            Jitter::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.run(query, catalog, Some(&mut rng))
            }
            Jitter::Entropy => {
                let mut rng = rand::thread_rng();
                self.run(query, catalog, Some(&mut rng))
            }
        }
    }

    fn rank_guarded<'a, F>(&self, catalog: &'a [Product], ranking: F) -> Vec<Product>
    where
        F: FnOnce() -> Result<RankOutcome<'a>, RankError>,
    {
        let outcome = panic::catch_unwind(AssertUnwindSafe(ranking))
            .unwrap_or_else(|payload| Err(RankError::Panicked(panic_message(&*payload))));

        match outcome {
            Ok(outcome) => outcome.into_products(catalog),
            Err(err) => {
                warn!(
                    error = %err,
                    catalog_len = catalog.len(),
                    "ranking failed, serving unranked catalog"
                );
                catalog.to_vec()
            }
        }
    }

    fn run<'a, R: Rng + ?Sized>(
        &self,
        query: &str,
        catalog: &'a [Product],
        rng: Option<&mut R>,
    ) -> Result<RankOutcome<'a>, RankError> {
        let cleaned = clean_query(query);
        if cleaned.is_empty() || catalog.is_empty() {
            debug!(
                query_empty = cleaned.is_empty(),
                catalog_len = catalog.len(),
                "nothing to rank, passing catalog through"
            );
            return Ok(RankOutcome::Passthrough);
        }

        let names = catalog
            .iter()
            .enumerate()
            .map(|(index, product)| {
                product.name.as_deref().ok_or_else(|| RankError::MissingName {
                    index,
                    id: product.id.clone(),
                })
            })
            .collect::<Result<Vec<&str>, _>>()?;

        let mut documents = Vec::with_capacity(names.len() + 1);
        documents.push(cleaned.as_str());
        documents.extend(names.iter().copied());
        let index = TfIdfIndex::build(&documents);

        let keywords = extract_keywords(&self.tagger, &cleaned);
        debug!(
            cleaned = %cleaned,
            vocabulary = index.vocabulary().len(),
            keywords = ?keywords,
            "index built"
        );

        let mut scored = Vec::new();
        for (i, (product, name)) in catalog.iter().zip(&names).enumerate() {
            let similarity = index.similarity(0, i + 1);
            if !passes_threshold(similarity, self.config.min_similarity) {
                continue;
            }
            let score = boosted_score(similarity, name, &keywords, self.config.keyword_bonus);
            scored.push(ScoredProduct { product, score });
        }

        sort_scored(&mut scored);
        let matched = scored.len();
        let ranked = rerank(
            scored,
            self.config.noise_amplitude,
            self.config.max_results,
            rng,
        );
        debug!(matched, returned = ranked.len(), "ranking complete");

        Ok(RankOutcome::Ranked(ranked))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
