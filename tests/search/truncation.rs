//! Result page size.

use super::common::{deterministic_ranker, ranker_with, sneaker_catalog};
use shoprank::{Jitter, RankerConfig, MAX_RESULTS};

#[test]
fn test_hundred_matches_truncate_to_seventy() {
    let catalog = sneaker_catalog(100);
    let results = deterministic_ranker().rank("trail sneaker", &catalog);
    assert_eq!(results.len(), MAX_RESULTS);
    assert_eq!(results.len(), 70);
    assert!(results.iter().all(|p| p.id.starts_with("sneaker")));
}

#[test]
fn test_truncation_with_noise_enabled() {
    let catalog = sneaker_catalog(100);
    let results = ranker_with(RankerConfig::default()).rank("trail sneaker", &catalog);
    assert_eq!(results.len(), 70);
}

#[test]
fn test_fewer_matches_than_page_size() {
    let catalog = sneaker_catalog(12);
    let results = deterministic_ranker().rank("trail sneaker", &catalog);
    assert_eq!(results.len(), 12);
}

#[test]
fn test_custom_page_size() {
    let catalog = sneaker_catalog(30);
    let ranker = ranker_with(RankerConfig {
        max_results: 5,
        jitter: Jitter::Disabled,
        ..RankerConfig::default()
    });
    assert_eq!(ranker.rank("trail sneaker", &catalog).len(), 5);
}

#[test]
fn test_equal_scores_order_by_rating() {
    let catalog = sneaker_catalog(20);
    let results = deterministic_ranker().rank("trail sneaker", &catalog);
    assert!(results.windows(2).all(|w| w[0].rating >= w[1].rating));
}
