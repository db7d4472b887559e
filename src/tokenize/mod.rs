// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization: text in, comparable tokens out.
//!
//! The rankers never tokenize anything themselves. They compare token sequences
//! built elsewhere, which only works if every sequence (documents, sentences, the
//! query) came out of the same [`Tokenizer`]. The pipeline owns one tokenizer and
//! threads it through all three.
//!
//! Two implementations ship:
//!
//! - [`StopwordTokenizer`]: the default. Lowercases, folds accents, strips
//!   punctuation, drops English stopwords, and keeps numeric literals verbatim.
//! - [`WhitespaceTokenizer`]: lowercase + whitespace split. No filtering at all,
//!   which makes it the right choice when a test needs an exact vocabulary.

pub mod sentences;
mod stopwords;

use crate::types::{Query, Token};
use crate::util::normalize::normalize;
use std::collections::HashSet;

pub use sentences::{passages, split_sentences};

/// Turns text into a sequence of normalized tokens.
///
/// Implementations must be pure: the same text always yields the same tokens.
/// `Send + Sync` because the pipeline tokenizes documents in parallel.
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text`, preserving token order.
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        (**self).tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        (**self).tokenize(text)
    }
}

/// Tokenize a free-text query into a set.
pub fn query_from<T: Tokenizer + ?Sized>(tokenizer: &T, text: &str) -> Query {
    tokenizer.tokenize(text).into_iter().collect()
}

// =============================================================================
// STOPWORD TOKENIZER
// =============================================================================

/// Default tokenizer: words minus stopwords, plus numbers.
///
/// Per whitespace-separated chunk:
///
/// 1. If the chunk (minus surrounding punctuation) is a finite number, keep it
///    as written: `1969`, `3.14`, `-2`. Numbers survive even though they are not
///    words.
/// 2. Otherwise split on anything that is not a letter or digit. Keep purely
///    alphabetic pieces that are not stopwords, keep numeric pieces, drop mixed
///    ones like `abc123`.
#[derive(Debug, Clone, Default)]
pub struct StopwordTokenizer {
    extra: HashSet<String>,
}

impl StopwordTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also drop these words, on top of the English list.
    ///
    /// Words are normalized the same way as text, so `"Python"` filters `python`.
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra.extend(
            words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty()),
        );
        self
    }

    fn is_stopword(&self, word: &str) -> bool {
        stopwords::ENGLISH.contains(word) || self.extra.contains(word)
    }
}

impl Tokenizer for StopwordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let normalized = normalize(text);
        let mut tokens = Vec::new();

        for chunk in normalized.split(' ') {
            let candidate = numeric_candidate(chunk);
            if is_number(candidate) {
                tokens.push(candidate.to_string());
                continue;
            }

            for piece in chunk.split(|c: char| !c.is_alphanumeric()) {
                if piece.is_empty() {
                    continue;
                }
                if piece.chars().all(char::is_alphabetic) {
                    if !self.is_stopword(piece) {
                        tokens.push(piece.to_string());
                    }
                } else if is_number(piece) {
                    tokens.push(piece.to_string());
                }
            }
        }

        tokens
    }
}

/// Trim punctuation around a possible number, keeping a leading sign or dot.
fn numeric_candidate(chunk: &str) -> &str {
    chunk
        .trim_start_matches(|c: char| !(c.is_alphanumeric() || matches!(c, '-' | '+' | '.')))
        .trim_end_matches(|c: char| !c.is_alphanumeric())
}

/// Finite `f64` literal. Rejects `nan` and `inf`, which `parse` would accept.
fn is_number(s: &str) -> bool {
    !s.is_empty() && s.parse::<f64>().is_ok_and(f64::is_finite)
}

// =============================================================================
// WHITESPACE TOKENIZER
// =============================================================================

/// Lowercase and split on whitespace. Nothing is filtered.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace().map(str::to_lowercase).collect()
    }
}
