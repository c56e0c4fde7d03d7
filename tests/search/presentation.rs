//! Price re-sort and suggestions layered on top of ranking.

use super::common::{deterministic_ranker, ids, padded_shoe_catalog};
use shoprank::{sort_by_price, top_rated, PriceOrder, SUGGESTION_COUNT};

#[test]
fn test_price_sort_applies_to_ranked_page() {
    let catalog = padded_shoe_catalog();
    let mut page = deterministic_ranker().rank("running shoes", &catalog);
    assert_eq!(ids(&page), vec!["blue", "red"]);

    sort_by_price(&mut page, PriceOrder::LowToHigh);
    assert_eq!(ids(&page), vec!["red", "blue"]);

    sort_by_price(&mut page, PriceOrder::HighToLow);
    assert_eq!(ids(&page), vec!["blue", "red"]);
}

#[test]
fn test_suggestions_are_top_rated() {
    let catalog = padded_shoe_catalog();
    let suggested = top_rated(&catalog, SUGGESTION_COUNT);
    assert_eq!(suggested.len(), catalog.len().min(SUGGESTION_COUNT));
    assert_eq!(suggested[0].id, "blue");
    assert!(suggested.windows(2).all(|w| w[0].rating >= w[1].rating));
}
