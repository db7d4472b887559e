// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document ranking by TF-IDF.
//!
//! Score every document, stable-sort by score, cut at `n`. Documents with equal
//! scores keep the order they had in the input map, so an empty query (all
//! scores 0) returns the first `n` documents as given.

use crate::contracts::{check_ranking_subset, check_scores_descending};
use crate::scoring::document_score;
use crate::scoring::ranking::compare_scores;
use crate::types::{ids, IdfTable, Query, RankedUnit, Units};

/// Score and order every document, best first.
pub fn rank_files<'a>(query: &Query, docs: &'a Units, idf: &IdfTable) -> Vec<RankedUnit<'a>> {
    let mut ranked: Vec<RankedUnit<'a>> = docs
        .iter()
        .map(|(name, tokens)| RankedUnit::new(name.as_str(), document_score(query, tokens, idf)))
        .collect();

    // sort_by is stable: ties stay in input order
    ranked.sort_by(compare_scores);

    check_scores_descending(&ranked);
    check_ranking_subset(&ranked, docs);
    ranked
}

/// The `n` documents that best match `query`, best first.
///
/// Returns `min(n, docs.len())` names.
///
/// # Example
///
/// ```
/// use gist::{compute_idfs, top_files, Query, Units};
///
/// let mut docs = Units::new();
/// docs.insert("a.txt".into(), vec!["cat".into(), "sat".into()]);
/// docs.insert("b.txt".into(), vec!["dog".into(), "ran".into()]);
/// let idf = compute_idfs(&docs);
/// let query: Query = ["cat".to_string()].into_iter().collect();
///
/// assert_eq!(top_files(&query, &docs, &idf, 1), vec!["a.txt"]);
/// ```
pub fn top_files<'a>(query: &Query, docs: &'a Units, idf: &IdfTable, n: usize) -> Vec<&'a str> {
    let mut ranked = rank_files(query, docs, idf);
    ranked.truncate(n);
    ids(&ranked)
}
