// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Part-of-speech tagging for keyword extraction.
//!
//! Cosine similarity treats every query term alike. Keywords add a flat bonus
//! for content words (nouns, adjectives, verbs) that appear verbatim in a
//! product name, so "red running shoes" favours names that literally say
//! "running" over names that merely share "shoes".
//!
//! The tagger sits behind a trait so callers can plug in a heavier NLP
//! pipeline. Taggers may disagree at the margins; only the category split
//! between content words and function words matters for ranking.

mod lexicon;

pub use lexicon::LexiconTagger;

use std::collections::HashSet;

/// Minimum keyword length, exclusive: keywords need at least 3 characters.
pub const MIN_KEYWORD_CHARS: usize = 2;

/// Coarse word class assigned by a tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Verb,
    /// Determiners, pronouns, prepositions, auxiliaries, numerals, etc.
    Other,
}

/// Something that can pull nouns, adjectives, and verbs out of text.
///
/// Each method returns the matching tokens in text order. Case is up to the
/// implementation; [`extract_keywords`] lowercases.
pub trait Tagger {
    fn nouns(&self, text: &str) -> Vec<String>;
    fn adjectives(&self, text: &str) -> Vec<String>;
    fn verbs(&self, text: &str) -> Vec<String>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn nouns(&self, text: &str) -> Vec<String> {
        (**self).nouns(text)
    }

    fn adjectives(&self, text: &str) -> Vec<String> {
        (**self).adjectives(text)
    }

    fn verbs(&self, text: &str) -> Vec<String> {
        (**self).verbs(text)
    }
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn nouns(&self, text: &str) -> Vec<String> {
        (**self).nouns(text)
    }

    fn adjectives(&self, text: &str) -> Vec<String> {
        (**self).adjectives(text)
    }

    fn verbs(&self, text: &str) -> Vec<String> {
        (**self).verbs(text)
    }
}

/// Keywords of a cleaned query: nouns, then adjectives, then verbs, each
/// longer than [`MIN_KEYWORD_CHARS`], lowercased, first occurrence kept.
pub fn extract_keywords<T: Tagger + ?Sized>(tagger: &T, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tagger
        .nouns(text)
        .into_iter()
        .chain(tagger.adjectives(text))
        .chain(tagger.verbs(text))
        .filter(|term| term.chars().count() > MIN_KEYWORD_CHARS)
        .map(|term| term.to_lowercase())
        .filter(|term| seen.insert(term.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tags every word as a noun, verbatim.
    struct EveryWordNoun;

    impl Tagger for EveryWordNoun {
        fn nouns(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(str::to_string).collect()
        }

        fn adjectives(&self, _text: &str) -> Vec<String> {
            Vec::new()
        }

        fn verbs(&self, _text: &str) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_keywords_drop_short_tokens() {
        let keywords = extract_keywords(&EveryWordNoun, "tv for men");
        assert_eq!(keywords, vec!["for", "men"]);
    }

    #[test]
    fn test_keywords_lowercase_and_dedupe() {
        let keywords = extract_keywords(&EveryWordNoun, "Shoes shoes SHOES socks");
        assert_eq!(keywords, vec!["shoes", "socks"]);
    }

    #[test]
    fn test_keywords_from_lexicon_tagger() {
        let keywords = extract_keywords(&LexiconTagger::new(), "running shoes");
        assert!(keywords.contains(&"running".to_string()));
        assert!(keywords.contains(&"shoes".to_string()));
    }

    #[test]
    fn test_keywords_skip_function_words() {
        let keywords = extract_keywords(&LexiconTagger::new(), "a jacket for the winter");
        for word in ["for", "the"] {
            assert!(!keywords.contains(&word.to_string()), "{word} leaked");
        }
        assert!(keywords.contains(&"jacket".to_string()));
        assert!(keywords.contains(&"winter".to_string()));
    }

    #[test]
    fn test_trait_objects_tag() {
        let boxed: Box<dyn Tagger> = Box::new(LexiconTagger::new());
        assert_eq!(extract_keywords(&boxed, "blue sneakers"), vec!["sneakers", "blue"]);
    }
}
