// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A small rule-based tagger tuned for product queries.
//!
//! Shopping queries are short noun phrases with a few modifiers, so a full
//! statistical tagger is overkill. Classification per token, first hit wins:
//!
//! 1. closed-class words (determiners, pronouns, prepositions, conjunctions,
//!    auxiliaries, adverbs) and bare numbers → `Other`
//! 2. verb lexicon → `Verb`
//! 3. adjective lexicon (colours, sizes, fits, qualities) → `Adjective`
//! 4. noun exceptions that look like verbs or adjectives by suffix → `Noun`
//! 5. suffix rules: `-ing`, `-ize`, `-ise` → `Verb`;
//!    `-ed`, `-ful`, `-less`, `-ous`, `-ive`, `-able`, `-ible`, `-ish`, `-est` → `Adjective`
//! 6. everything else → `Noun`

use super::{PartOfSpeech, Tagger};
use crate::utils::split_terms;
use std::collections::HashSet;
use std::sync::LazyLock;

static CLOSED_CLASS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // determiners
        "a", "an", "the", "this", "that", "these", "those", "some", "any", "every", "each", "all",
        "no", "my", "your", "his", "her", "its", "our", "their", "another", "other", "such",
        // pronouns
        "i", "me", "you", "he", "she", "it", "we", "they", "them", "us", "him", "mine", "yours",
        "something", "anything", "one", "ones", "myself", "yourself",
        // prepositions
        "for", "with", "in", "on", "at", "of", "to", "from", "by", "under", "over", "about",
        "without", "between", "near", "into", "onto", "up", "down", "off", "out", "around",
        "below", "above", "within", "upto", "per", "via", "than",
        // conjunctions
        "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "either", "neither",
        // auxiliaries and modals
        "is", "are", "was", "were", "be", "been", "being", "am", "do", "does", "did", "can",
        "could", "will", "would", "should", "shall", "may", "might", "must", "have", "has", "had",
        // adverbs and question words
        "very", "really", "too", "also", "just", "only", "more", "most", "less", "least", "not",
        "please", "quite", "even", "again", "here", "there", "now", "then", "what", "which",
        "who", "whom", "where", "when", "how", "why",
    ]
    .into_iter()
    .collect()
});

static VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "buy", "wear", "run", "walk", "jog", "hike", "train", "play", "work", "sleep", "travel",
        "swim", "cook", "carry", "fit", "fits", "want", "need", "get", "make", "go", "look",
        "use", "gift", "dance", "ride", "cycle", "clean", "wash", "charge", "protect", "keep",
        "match", "love", "like", "store", "hold", "lift", "stretch", "wrap", "zip", "button",
    ]
    .into_iter()
    .collect()
});

static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // colours
        "red", "blue", "green", "black", "white", "yellow", "pink", "purple", "orange", "brown",
        "grey", "gray", "navy", "beige", "maroon", "olive", "teal", "gold", "golden", "silver",
        "cream", "khaki", "tan", "mustard", "peach", "lavender", "multicolor", "multicolour",
        // sizes and fits
        "small", "medium", "large", "big", "tiny", "long", "short", "tall", "wide", "slim",
        "skinny", "regular", "loose", "tight", "oversized", "fitted", "petite", "mini", "maxi",
        // qualities
        "new", "old", "cheap", "expensive", "good", "great", "soft", "hard", "warm", "cool",
        "cold", "hot", "light", "dark", "heavy", "casual", "formal", "fancy", "elegant",
        "stylish", "classic", "modern", "vintage", "premium", "waterproof", "wireless", "smart",
        "cute", "pretty", "plain", "solid", "floral", "ethnic", "sporty", "comfy", "trendy",
        "stretchable", "breathable", "lightweight", "high", "low", "mid", "full", "half",
        "sleeveless", "round", "square", "straight", "flat", "thin", "thick", "bright", "pastel",
        "everyday", "festive", "party", "summer", "winter",
    ]
    .into_iter()
    .collect()
});

/// Nouns a suffix rule would misfile.
static NOUN_EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "clothing", "bedding", "wedding", "string", "ring", "earring", "earrings", "sling",
        "legging", "leggings", "stocking", "stockings", "ceiling", "evening", "morning", "swing",
        "thing", "things", "king", "wing", "spring", "building", "packaging", "lighting",
        "padding", "stuffing", "sibling", "bed", "shed", "sled", "chest", "forest", "interest",
        "harvest", "vest", "crest", "tunic", "table", "cable", "vegetable", "bible",
    ]
    .into_iter()
    .collect()
});

/// Lexicon-and-suffix tagger. Stateless and cheap to construct.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tag every token of `text`, in order.
    pub fn tag(&self, text: &str) -> Vec<(String, PartOfSpeech)> {
        split_terms(text)
            .into_iter()
            .map(|token| {
                let pos = classify(&token);
                (token, pos)
            })
            .collect()
    }

    fn select(&self, text: &str, wanted: PartOfSpeech) -> Vec<String> {
        self.tag(text)
            .into_iter()
            .filter(|(_, pos)| *pos == wanted)
            .map(|(token, _)| token)
            .collect()
    }
}

impl Tagger for LexiconTagger {
    fn nouns(&self, text: &str) -> Vec<String> {
        self.select(text, PartOfSpeech::Noun)
    }

    fn adjectives(&self, text: &str) -> Vec<String> {
        self.select(text, PartOfSpeech::Adjective)
    }

    fn verbs(&self, text: &str) -> Vec<String> {
        self.select(text, PartOfSpeech::Verb)
    }
}

/// Classify one lowercase token.
pub(crate) fn classify(token: &str) -> PartOfSpeech {
    if CLOSED_CLASS.contains(token) || token.chars().all(|c| c.is_ascii_digit()) {
        return PartOfSpeech::Other;
    }
    if VERBS.contains(token) {
        return PartOfSpeech::Verb;
    }
    if ADJECTIVES.contains(token) {
        return PartOfSpeech::Adjective;
    }
    if NOUN_EXCEPTIONS.contains(token) {
        return PartOfSpeech::Noun;
    }
    classify_by_suffix(token).unwrap_or(PartOfSpeech::Noun)
}

fn classify_by_suffix(token: &str) -> Option<PartOfSpeech> {
    // Short words ending in a suffix are usually roots ("ring", "red").
    let len = token.len();
    let ends = |suffix: &str| len > suffix.len() + 2 && token.ends_with(suffix);

    if ends("ing") || ends("ize") || ends("ise") {
        return Some(PartOfSpeech::Verb);
    }
    let adjective_suffixes = ["ed", "ful", "less", "ous", "ive", "able", "ible", "ish", "est"];
    if adjective_suffixes.iter().any(|suffix| ends(suffix)) {
        return Some(PartOfSpeech::Adjective);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_words_are_other() {
        for word in ["the", "for", "with", "and", "is", "very", "what", "42"] {
            assert_eq!(classify(word), PartOfSpeech::Other, "{word}");
        }
    }

    #[test]
    fn test_lexicon_hits() {
        assert_eq!(classify("buy"), PartOfSpeech::Verb);
        assert_eq!(classify("red"), PartOfSpeech::Adjective);
        assert_eq!(classify("waterproof"), PartOfSpeech::Adjective);
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(classify("running"), PartOfSpeech::Verb);
        assert_eq!(classify("hiking"), PartOfSpeech::Verb);
        assert_eq!(classify("printed"), PartOfSpeech::Adjective);
        assert_eq!(classify("colorful"), PartOfSpeech::Adjective);
        assert_eq!(classify("cheapest"), PartOfSpeech::Adjective);
    }

    #[test]
    fn test_noun_exceptions_beat_suffixes() {
        assert_eq!(classify("clothing"), PartOfSpeech::Noun);
        assert_eq!(classify("earrings"), PartOfSpeech::Noun);
        assert_eq!(classify("vest"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_unknown_words_default_to_noun() {
        assert_eq!(classify("shoes"), PartOfSpeech::Noun);
        assert_eq!(classify("kurta"), PartOfSpeech::Noun);
        assert_eq!(classify("65w"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_tagger_categories() {
        let tagger = LexiconTagger::new();
        let text = "comfortable black leather boots for hiking";
        assert_eq!(tagger.nouns(text), vec!["leather", "boots"]);
        assert_eq!(tagger.adjectives(text), vec!["comfortable", "black"]);
        assert_eq!(tagger.verbs(text), vec!["hiking"]);
    }
}
