// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF vectors over a handful of short documents.
//!
//! Document 0 is the cleaned query; documents 1..=N are product names. Every
//! document gets a dense vector over the global vocabulary, so cosine
//! similarity is a straight zip over two slices.
//!
//! # Weights
//!
//! ```text
//! tf(t, d)  = count(t in tokens(d)) / raw_split_len(d)
//! idf(t)    = ln(docs / df(t))
//! w(t, d)   = tf(t, d) * idf(t)
//! ```
//!
//! The tf denominator counts split pieces *before* empty pieces are dropped,
//! so leading or trailing punctuation dilutes a document's weights slightly.
//! A term present in every document has idf 0 and contributes nothing.

use crate::utils::{raw_split_len, split_terms};
use std::collections::{HashMap, HashSet};

/// Dense term weights for one document, aligned with the index vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector {
    weights: Vec<f64>,
}

impl TermVector {
    /// Weights in vocabulary order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.weights.iter().map(|w| w * w).sum::<f64>().sqrt()
    }
}

/// TF-IDF index over a small document set.
#[derive(Debug, Clone)]
pub struct TfIdfIndex {
    /// Terms in first-seen order.
    vocabulary: Vec<String>,
    term_ids: HashMap<String, usize>,
    idf: Vec<f64>,
    vectors: Vec<TermVector>,
}

impl TfIdfIndex {
    /// Build the index. Document order is preserved: `vector(i)` belongs to
    /// `documents[i]`.
    pub fn build<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| split_terms(doc.as_ref()))
            .collect();

        let mut vocabulary: Vec<String> = Vec::new();
        let mut term_ids: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for tokens in &tokenized {
            // Walk tokens in order so the vocabulary order is deterministic.
            let mut seen: HashSet<&str> = HashSet::with_capacity(tokens.len());
            for token in tokens {
                if !seen.insert(token.as_str()) {
                    continue;
                }
                match term_ids.get(token) {
                    Some(&id) => doc_freq[id] += 1,
                    None => {
                        term_ids.insert(token.clone(), vocabulary.len());
                        vocabulary.push(token.clone());
                        doc_freq.push(1);
                    }
                }
            }
        }

        let total_docs = documents.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| (total_docs / df as f64).ln())
            .collect();

        let vectors = documents
            .iter()
            .zip(&tokenized)
            .map(|(doc, tokens)| {
                let denominator = raw_split_len(doc.as_ref()) as f64;
                let mut counts = vec![0usize; vocabulary.len()];
                for token in tokens {
                    counts[term_ids[token]] += 1;
                }
                let weights = counts
                    .iter()
                    .zip(&idf)
                    .map(|(&count, &idf)| (count as f64 / denominator) * idf)
                    .collect();
                TermVector { weights }
            })
            .collect();

        Self {
            vocabulary,
            term_ids,
            idf,
            vectors,
        }
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn vector(&self, doc: usize) -> Option<&TermVector> {
        self.vectors.get(doc)
    }

    /// Inverse document frequency of a term, `None` if the term is unknown.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_ids.get(term).map(|&id| self.idf[id])
    }

    /// Weight of `term` in document `doc`; 0 for unknown terms or documents.
    pub fn weight(&self, doc: usize, term: &str) -> f64 {
        match (self.vectors.get(doc), self.term_ids.get(term)) {
            (Some(vector), Some(&id)) => vector.weights[id],
            _ => 0.0,
        }
    }

    /// Cosine similarity between two documents of this index.
    pub fn similarity(&self, a: usize, b: usize) -> f64 {
        match (self.vectors.get(a), self.vectors.get(b)) {
            (Some(a), Some(b)) => cosine_similarity(&a.weights, &b.weights),
            _ => 0.0,
        }
    }
}

/// Cosine similarity of two equal-length vectors.
///
/// Returns 0 when either vector has zero norm instead of dividing by zero.
/// Extra trailing components of the longer slice are ignored.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let norm_a = norm_a.sqrt();
    let norm_b = norm_b.sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
