//! TF-IDF relevance ranking for storefront product search.
//!
//! Given a free-text query and an in-memory catalog snapshot, [`Ranker`]
//! returns the matching products, best first, at most one result page long.
//! Nothing is cached between calls: each search builds its own index from the
//! snapshot it is handed.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌────────────┐
//! │  query.rs   │────▶│   index/     │────▶│  scoring/   │────▶│ rerank.rs  │
//! │(clean_query)│     │ (TfIdfIndex, │     │ (threshold, │     │  (jitter,  │
//! │             │     │  cosine)     │     │  bonus,sort)│     │  truncate) │
//! └─────────────┘     └──────────────┘     └─────────────┘     └────────────┘
//!        │                                        ▲
//!        └──────────────▶ tagger/ ────────────────┘
//!                   (extract_keywords)
//! ```
//!
//! `ranker.rs` strings the stages together and owns the failure policy: any
//! error or panic inside the pipeline degrades to the unranked catalog.
//!
//! # Usage
//!
//! ```ignore
//! use shoprank::{Ranker, load_catalog};
//!
//! let catalog = load_catalog("catalog.json")?;
//! let results = Ranker::new().rank("show me red running shoes", &catalog);
//! ```

// Module declarations
pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
mod query;
pub mod rerank;
mod ranker;
pub mod scoring;
pub mod tagger;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use catalog::{load_catalog, parse_catalog, sort_by_price, top_rated};
pub use config::{Jitter, RankerConfig};
pub use error::{CatalogError, ConfigError, RankError};
pub use index::{cosine_similarity, TermVector, TfIdfIndex};
pub use query::{clean_query, FILLER_PHRASES};
pub use ranker::Ranker;
pub use scoring::{
    KEYWORD_BONUS, MAX_RESULTS, MIN_SIMILARITY_THRESHOLD, NOISE_AMPLITUDE, SUGGESTION_COUNT,
};
pub use tagger::{extract_keywords, LexiconTagger, PartOfSpeech, Tagger};
pub use types::{PriceOrder, Product, RankOutcome, ScoredProduct};
pub use utils::{raw_split_len, split_terms};
