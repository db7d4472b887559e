// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sentence ranking: IDF sum first, query term density for ties.
//!
//! # Algorithm
//!
//! ```text
//! 1. score every sentence (matching-word measure)
//! 2. stable sort, score descending          ← full collection, not top n
//! 3. split into runs of identical score     ← contiguous after the sort
//! 4. stable sort each run of size > 1 by density descending
//! 5. concatenate runs, truncate to n
//! ```
//!
//! Density only reorders sentences inside a run, so it can never lift a sentence
//! above one with a strictly higher score. `check_scores_descending` asserts this
//! after step 4 in debug builds.
//!
//! # Preconditions
//!
//! Every sentence carries at least one token. The pipeline drops token-less
//! sentences before they get here; `check_units_non_empty` enforces it in debug
//! builds.

use crate::contracts::{check_ranking_subset, check_scores_descending, check_units_non_empty};
use crate::scoring::ranking::{compare_densities, compare_scores, tie_runs};
use crate::scoring::{matching_word_score, query_term_density};
use crate::types::{ids, IdfTable, Query, RankedUnit, Units};

/// Score and order every sentence, best first.
///
/// Sentences that shared a score with a neighbour carry their density.
pub fn rank_sentences<'a>(
    query: &Query,
    sentences: &'a Units,
    idf: &IdfTable,
) -> Vec<RankedUnit<'a>> {
    check_units_non_empty(sentences);

    let mut ranked: Vec<RankedUnit<'a>> = sentences
        .iter()
        .map(|(text, tokens)| {
            RankedUnit::new(text.as_str(), matching_word_score(query, tokens, idf))
        })
        .collect();

    ranked.sort_by(compare_scores);

    for run in tie_runs(&ranked) {
        if run.len() < 2 {
            continue;
        }
        let tied = &mut ranked[run];
        for unit in tied.iter_mut() {
            // Keys come straight from `sentences`, so the lookup always hits.
            let tokens = sentences.get(unit.id).map(Vec::as_slice).unwrap_or_default();
            unit.density = Some(query_term_density(query, tokens));
        }
        tied.sort_by(compare_densities);
    }

    check_scores_descending(&ranked);
    check_ranking_subset(&ranked, sentences);
    ranked
}

/// The `n` sentences that best answer `query`, best first.
///
/// # Example
///
/// ```
/// use gist::{top_sentences, IdfTable, Query, Units};
///
/// let mut sentences = Units::new();
/// sentences.insert("The cat sat.".into(), vec!["cat".into(), "sat".into()]);
/// sentences.insert("A dog ran fast.".into(), vec!["dog".into(), "ran".into(), "fast".into()]);
///
/// let idf: IdfTable = [("cat", 1.0), ("sat", 1.0), ("dog", 0.5)]
///     .into_iter()
///     .map(|(t, v)| (t.to_string(), v))
///     .collect();
/// let query: Query = ["cat", "dog"].into_iter().map(String::from).collect();
///
/// assert_eq!(top_sentences(&query, &sentences, &idf, 1), vec!["The cat sat."]);
/// ```
pub fn top_sentences<'a>(
    query: &Query,
    sentences: &'a Units,
    idf: &IdfTable,
    n: usize,
) -> Vec<&'a str> {
    let mut ranked = rank_sentences(query, sentences, idf);
    ranked.truncate(n);
    ids(&ranked)
}
