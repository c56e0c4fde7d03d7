// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenizer helpers shared by the index and the tagger.
//!
//! A word character is `[A-Za-z0-9_]`. Anything else, including non-ASCII
//! letters, separates tokens. This matches the storefront's original
//! tokenization, so "café" yields the single token `caf`.

/// Is this a token character?
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split text into lowercase terms, dropping empty pieces.
///
/// ```ignore
/// assert_eq!(split_terms("Red, Running-Shoes!"), vec!["red", "running", "shoes"]);
/// ```
pub fn split_terms(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Number of pieces a split on separator runs produces, empties included.
///
/// Leading and trailing separators each contribute an empty piece, and the
/// empty string is one (empty) piece. This is the term-frequency denominator.
///
/// ```ignore
/// assert_eq!(raw_split_len("red shoes"), 2);
/// assert_eq!(raw_split_len(" red "), 3);
/// assert_eq!(raw_split_len(""), 1);
/// ```
pub fn raw_split_len(text: &str) -> usize {
    let mut pieces = 1;
    let mut in_separator = false;
    for c in text.chars() {
        if is_word_char(c) {
            in_separator = false;
        } else if !in_separator {
            pieces += 1;
            in_separator = true;
        }
    }
    pieces
}

/// Case-insensitive substring check.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
