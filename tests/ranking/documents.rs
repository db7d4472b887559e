//! Document ranking tests.
//!
//! Document scores are TF-IDF sums over distinct query terms. Ties keep corpus
//! order, so "first document wins" is reproducible.

use crate::common::{assert_ranking_well_formed, idf_table, query, units};
use gist::{compute_idfs, ids, rank_files, top_files};

// ============================================================================
// BASIC SELECTION
// ============================================================================

#[test]
fn test_picks_document_containing_query_term() {
    let docs = units(&[("a.txt", "cat sat"), ("b.txt", "dog ran")]);
    let idf = compute_idfs(&docs);
    assert_eq!(top_files(&query("cat"), &docs, &idf, 1), vec!["a.txt"]);
}

#[test]
fn test_more_occurrences_score_higher() {
    let docs = units(&[
        ("once.txt", "rust speed"),
        ("thrice.txt", "rust rust rust"),
        ("none.txt", "python speed"),
    ]);
    let idf = compute_idfs(&docs);
    let ranked = rank_files(&query("rust"), &docs, &idf);

    assert_eq!(ids(&ranked), vec!["thrice.txt", "once.txt", "none.txt"]);
    let rust_idf = (3.0f64 / 2.0).ln();
    assert!((ranked[0].score - 3.0 * rust_idf).abs() < 1e-12);
    assert!((ranked[1].score - rust_idf).abs() < 1e-12);
    assert_eq!(ranked[2].score, 0.0);
}

#[test]
fn test_term_in_every_document_does_not_discriminate() {
    let docs = units(&[("a.txt", "common alpha"), ("b.txt", "common beta")]);
    let idf = compute_idfs(&docs);
    let ranked = rank_files(&query("common"), &docs, &idf);

    assert!(ranked.iter().all(|r| r.score == 0.0));
    assert_eq!(ids(&ranked), vec!["a.txt", "b.txt"]);
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// A repeated query term contributes `tf · idf` once, not once per occurrence.
///
/// Per-occurrence summing would give `repeat.txt` 3 · (3 · 0.5) = 4.5 and put it
/// first. Distinct-term summing gives 3 · 0.5 = 1.5, below `single.txt`'s 2.0.
#[test]
fn test_repeated_query_term_is_not_double_counted() {
    let docs = units(&[("repeat.txt", "cat cat cat"), ("single.txt", "dog")]);
    let idf = idf_table(&[("cat", 0.5), ("dog", 2.0)]);
    let ranked = rank_files(&query("cat dog"), &docs, &idf);

    assert_eq!(ids(&ranked), vec!["single.txt", "repeat.txt"]);
    assert!((ranked[1].score - 1.5).abs() < 1e-12);
}

#[test]
fn test_query_terms_missing_from_idf_contribute_nothing() {
    let docs = units(&[("a.txt", "cat unknown"), ("b.txt", "cat")]);
    let idf = idf_table(&[("cat", 1.0)]);
    let ranked = rank_files(&query("cat unknown"), &docs, &idf);

    assert_eq!(ranked[0].score, 1.0);
    assert_eq!(ranked[1].score, 1.0);
    assert_eq!(ids(&ranked), vec!["a.txt", "b.txt"]);
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn test_empty_query_returns_input_order() {
    let docs = units(&[("c.txt", "x"), ("a.txt", "y"), ("b.txt", "z")]);
    let idf = compute_idfs(&docs);
    let ranked = rank_files(&query(""), &docs, &idf);

    assert!(ranked.iter().all(|r| r.score == 0.0));
    assert_eq!(top_files(&query(""), &docs, &idf, 2), vec!["c.txt", "a.txt"]);
}

#[test]
fn test_document_without_tokens_scores_zero() {
    let docs = units(&[("empty.txt", ""), ("full.txt", "cat")]);
    let idf = compute_idfs(&docs);
    let ranked = rank_files(&query("cat"), &docs, &idf);

    assert_eq!(ids(&ranked), vec!["full.txt", "empty.txt"]);
    assert_eq!(ranked[1].score, 0.0);
}

#[test]
fn test_n_bounds() {
    let docs = units(&[("a.txt", "cat"), ("b.txt", "dog")]);
    let idf = compute_idfs(&docs);
    let q = query("cat");

    assert!(top_files(&q, &docs, &idf, 0).is_empty());
    assert_eq!(top_files(&q, &docs, &idf, 10).len(), 2);
    assert!(top_files(&q, &units(&[]), &idf, 3).is_empty());
}

#[test]
fn test_ranking_is_well_formed() {
    let docs = units(&[
        ("a.txt", "alpha beta gamma"),
        ("b.txt", "beta beta delta"),
        ("c.txt", "gamma epsilon"),
        ("d.txt", "alpha alpha alpha beta"),
    ]);
    let idf = compute_idfs(&docs);
    let ranked = rank_files(&query("alpha beta gamma"), &docs, &idf);

    assert_eq!(ranked.len(), docs.len());
    assert_ranking_well_formed(&ranked, &docs);
}
