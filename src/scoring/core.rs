// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind document and sentence scores.
//!
//! # Document score (TF-IDF)
//!
//! ```text
//! score(D) = Σ  tf(t, D) · idf(t)      over distinct t ∈ D ∩ Q ∩ idf
//! ```
//!
//! Each distinct query term counts once with its full term frequency. A term that
//! appears three times contributes `3 · idf`, not `3 · 3 · idf`. See
//! `test_repeated_term_counts_once_per_distinct_term` for the pinned behavior.
//!
//! # Sentence score (matching-word measure)
//!
//! ```text
//! score(S) = Σ  idf(w)                 over w ∈ Q with w ∈ S and w ∈ idf
//! ```
//!
//! Iterates the query, not the sentence: repeats inside the sentence add nothing.
//!
//! # Query term density
//!
//! ```text
//! density(S) = |{ i : S[i] ∈ Q }| / |S|
//! ```
//!
//! Counted per occurrence. Only consulted to order sentences with identical
//! matching-word scores.

use crate::types::{IdfTable, Query};
use std::collections::{HashMap, HashSet};

/// Raw term frequencies of one token sequence.
pub fn term_frequencies(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

/// TF-IDF mass of a document restricted to query terms.
///
/// Terms missing from `idf` contribute nothing. An empty document scores 0.
pub fn document_score(query: &Query, tokens: &[String], idf: &IdfTable) -> f64 {
    let tf = term_frequencies(tokens);

    // Walk the query (ordered) rather than the HashMap so the float sum is
    // reproducible between runs.
    query
        .iter()
        .filter_map(|term| {
            let count = *tf.get(term.as_str())?;
            let weight = *idf.get(term)?;
            Some(count as f64 * weight)
        })
        .sum()
}

/// IDF sum of the query terms present in a sentence.
pub fn matching_word_score(query: &Query, tokens: &[String], idf: &IdfTable) -> f64 {
    let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    query
        .iter()
        .filter(|term| present.contains(term.as_str()))
        .filter_map(|term| idf.get(term))
        .sum()
}

/// Fraction of a sentence's tokens that are query terms.
///
/// Sentences without tokens never reach ranking; 0 keeps the sort total if one
/// slips through in a release build.
pub fn query_term_density(query: &Query, tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let matches = tokens.iter().filter(|t| query.contains(t.as_str())).count();
    matches as f64 / tokens.len() as f64
}
