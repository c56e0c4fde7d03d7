//! Failure handling: ranking never fails outward.

use super::common::{deterministic_ranker, make_nameless_product, padded_shoe_catalog, shoe_catalog};
use shoprank::{RankError, Ranker};

#[test]
fn test_empty_query_returns_catalog_unchanged() {
    let catalog = shoe_catalog();
    assert_eq!(Ranker::new().rank("", &catalog), catalog);
    assert_eq!(Ranker::new().rank("   ", &catalog), catalog);
}

#[test]
fn test_filler_only_query_returns_catalog_unchanged() {
    let catalog = padded_shoe_catalog();
    assert_eq!(Ranker::new().rank("can you find", &catalog), catalog);
}

#[test]
fn test_empty_catalog_returns_empty() {
    assert!(Ranker::new().rank("running shoes", &[]).is_empty());
    assert!(Ranker::new().rank("", &[]).is_empty());
}

#[test]
fn test_nameless_record_returns_original_catalog() {
    let mut catalog = padded_shoe_catalog();
    catalog.insert(1, make_nameless_product("broken"));

    let ranker = deterministic_ranker();
    assert_eq!(ranker.rank("running shoes", &catalog), catalog);
    assert!(matches!(
        ranker.try_rank("running shoes", &catalog),
        Err(RankError::MissingName { index: 1, .. })
    ));
}

#[test]
fn test_nameless_record_is_harmless_for_empty_query() {
    let catalog = vec![make_nameless_product("broken")];
    assert_eq!(Ranker::new().rank("", &catalog), catalog);
}
