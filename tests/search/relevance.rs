//! Relevance ordering: threshold, keyword bonus, rating tiebreak.

use super::common::{deterministic_ranker, ids, make_product, padded_shoe_catalog, ranker_with, shoe_catalog};
use shoprank::{clean_query, Jitter, RankOutcome, RankerConfig};

#[test]
fn test_filler_is_stripped_before_scoring() {
    assert_eq!(clean_query("find me running shoes"), "running shoes");
}

#[test]
fn test_shoes_match_and_jacket_does_not() {
    let catalog = padded_shoe_catalog();
    let results = deterministic_ranker().rank("find me running shoes", &catalog);

    assert_eq!(ids(&results), vec!["blue", "red"]);
}

#[test]
fn test_shoe_scores_clear_threshold() {
    let catalog = padded_shoe_catalog();
    let RankOutcome::Ranked(scored) = deterministic_ranker()
        .try_rank("find me running shoes", &catalog)
        .unwrap()
    else {
        panic!("expected a ranked outcome");
    };

    assert_eq!(scored.len(), 2);
    // Cosine >= 0.3 plus two keyword hits ("running", "shoes").
    for entry in &scored {
        assert!(entry.score >= 0.3 + 0.4, "{} scored {}", entry.product.id, entry.score);
    }
    assert_eq!(scored[0].score, scored[1].score);
}

#[test]
fn test_equal_relevance_ties_break_by_rating_unless_noise_swaps() {
    // The two shoes score exactly equal, so with noise on either can lead;
    // both stay on the page and within one place of each other.
    let catalog = padded_shoe_catalog();
    let ranker = ranker_with(RankerConfig::default());
    let mut blue_first = 0;
    for _ in 0..200 {
        let results = ranker.rank("find me running shoes", &catalog);
        let mut page = ids(&results);
        if page[0] == "blue" {
            blue_first += 1;
        }
        page.sort_unstable();
        assert_eq!(page, vec!["blue", "red"]);
    }
    assert!(blue_first > 0 && blue_first < 200, "blue led {blue_first} of 200");

    let disabled = deterministic_ranker().rank("find me running shoes", &catalog);
    assert_eq!(disabled[0].id, "blue");
}

#[test]
fn test_three_product_catalog_with_lower_threshold() {
    // In a three-item catalog "running" and "shoes" appear in 3 of 4
    // documents, so their idf is small and cosine lands near 0.28.
    let catalog = shoe_catalog();
    assert!(deterministic_ranker().rank("find me running shoes", &catalog).is_empty());

    let lenient = ranker_with(RankerConfig {
        min_similarity: 0.25,
        jitter: Jitter::Disabled,
        ..RankerConfig::default()
    });
    let results = lenient.rank("find me running shoes", &catalog);
    assert_eq!(ids(&results), vec!["blue", "red"]);
}

#[test]
fn test_keyword_bonus_lifts_literal_matches() {
    let catalog = vec![
        make_product("plain", "Trail Sneaker", 40.0, 5.0),
        make_product("waterproof", "Waterproof Trail Sneaker", 55.0, 3.0),
        make_product("wallet", "Leather Wallet", 20.0, 4.0),
        make_product("bottle", "Steel Water Bottle", 15.0, 4.0),
        make_product("saree", "Silk Saree", 80.0, 4.0),
    ];
    let results = deterministic_ranker().rank("waterproof trail sneaker", &catalog);

    // The exact name wins on cosine and collects three keyword bonuses.
    assert_eq!(results[0].id, "waterproof");
    assert!(ids(&results).contains(&"plain"));
    assert!(!ids(&results).contains(&"wallet"));
}

#[test]
fn test_case_and_punctuation_do_not_matter() {
    let catalog = padded_shoe_catalog();
    let ranker = deterministic_ranker();
    assert_eq!(
        ranker.rank("RUNNING, shoes!", &catalog),
        ranker.rank("running shoes", &catalog)
    );
}
