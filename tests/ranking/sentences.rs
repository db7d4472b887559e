//! Sentence ranking tests.
//!
//! Sentences are scored by the IDF sum of the query terms they contain. Exact
//! ties are reordered by query term density; nothing else moves.

use crate::common::{assert_ranking_well_formed, idf_table, query, units};
use gist::{ids, rank_sentences, top_sentences};

// ============================================================================
// MATCHING-WORD SCORE
// ============================================================================

#[test]
fn test_rarer_terms_win() {
    let sentences = units(&[("The cat sat.", "cat sat"), ("A dog ran fast.", "dog ran fast")]);
    let idf = idf_table(&[("cat", 1.0), ("sat", 1.0), ("dog", 0.5)]);
    assert_eq!(
        top_sentences(&query("cat dog"), &sentences, &idf, 1),
        vec!["The cat sat."]
    );
}

#[test]
fn test_repeats_inside_a_sentence_count_once() {
    let sentences = units(&[("Cat cat cat.", "cat cat cat"), ("Cat and dog.", "cat dog")]);
    let idf = idf_table(&[("cat", 1.0), ("dog", 0.5)]);
    let ranked = rank_sentences(&query("cat dog"), &sentences, &idf);

    assert_eq!(ids(&ranked), vec!["Cat and dog.", "Cat cat cat."]);
    assert_eq!(ranked[0].score, 1.5);
    assert_eq!(ranked[1].score, 1.0);
}

#[test]
fn test_query_terms_without_idf_are_ignored() {
    let sentences = units(&[("One.", "alpha"), ("Two.", "beta")]);
    let idf = idf_table(&[("beta", 0.3)]);
    let ranked = rank_sentences(&query("alpha beta"), &sentences, &idf);

    assert_eq!(ids(&ranked), vec!["Two.", "One."]);
    assert_eq!(ranked[1].score, 0.0);
}

// ============================================================================
// DENSITY TIE-BREAK
// ============================================================================

/// X and Y both score 2.0. Y packs 2 query terms into 3 tokens, X into 4.
#[test]
fn test_denser_sentence_wins_a_tie() {
    let sentences = units(&[("X", "cat dog fish bird"), ("Y", "cat dog emu")]);
    let idf = idf_table(&[("cat", 1.0), ("dog", 1.0)]);
    let ranked = rank_sentences(&query("cat dog"), &sentences, &idf);

    assert_eq!(ids(&ranked), vec!["Y", "X"]);
    assert_eq!(ranked[0].score, ranked[1].score);
    assert!((ranked[0].density.unwrap() - 2.0 / 3.0).abs() < 1e-12);
    assert!((ranked[1].density.unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn test_density_counts_every_occurrence() {
    // Both score 2.0; "cat cat dog" is all query terms, "cat dog bird" is not.
    let sentences = units(&[("loose", "cat dog bird"), ("dense", "cat cat dog")]);
    let idf = idf_table(&[("cat", 1.0), ("dog", 1.0)]);
    let ranked = rank_sentences(&query("cat dog"), &sentences, &idf);

    assert_eq!(ids(&ranked), vec!["dense", "loose"]);
    assert_eq!(ranked[0].density, Some(1.0));
}

#[test]
fn test_density_never_lifts_a_lower_score() {
    // "dense" would win on density but has a strictly lower score.
    let sentences = units(&[
        ("sparse", "cat dog a b c d e f"),
        ("dense", "cat cat cat"),
    ]);
    let idf = idf_table(&[("cat", 1.0), ("dog", 1.0)]);
    let ranked = rank_sentences(&query("cat dog"), &sentences, &idf);

    assert_eq!(ids(&ranked), vec!["sparse", "dense"]);
    assert!(ranked.iter().all(|r| r.density.is_none()));
}

#[test]
fn test_unique_scores_carry_no_density() {
    let sentences = units(&[("A", "cat"), ("B", "dog")]);
    let idf = idf_table(&[("cat", 2.0), ("dog", 1.0)]);
    let ranked = rank_sentences(&query("cat dog"), &sentences, &idf);
    assert!(ranked.iter().all(|r| r.density.is_none()));
}

#[test]
fn test_equal_density_keeps_input_order() {
    let sentences = units(&[("first", "cat x"), ("second", "cat y"), ("third", "cat z")]);
    let idf = idf_table(&[("cat", 1.0)]);
    let ranked = rank_sentences(&query("cat"), &sentences, &idf);
    assert_eq!(ids(&ranked), vec!["first", "second", "third"]);
}

#[test]
fn test_trailing_tie_run_is_reordered_and_kept() {
    // The lowest-scoring run sits at the end of the ranking and must still be
    // emitted and tie-broken.
    let sentences = units(&[
        ("top", "rare"),
        ("tail loose", "cat a b c"),
        ("tail dense", "cat a"),
    ]);
    let idf = idf_table(&[("rare", 5.0), ("cat", 1.0)]);
    let ranked = rank_sentences(&query("rare cat"), &sentences, &idf);

    assert_eq!(ids(&ranked), vec!["top", "tail dense", "tail loose"]);
}

#[test]
fn test_several_tie_runs_are_handled_independently() {
    let sentences = units(&[
        ("hi-loose", "cat dog x y"),
        ("lo-loose", "emu x y z"),
        ("hi-dense", "cat dog"),
        ("lo-dense", "emu"),
    ]);
    let idf = idf_table(&[("cat", 1.0), ("dog", 1.0), ("emu", 1.0)]);
    let ranked = rank_sentences(&query("cat dog emu"), &sentences, &idf);

    assert_eq!(ids(&ranked), vec!["hi-dense", "hi-loose", "lo-dense", "lo-loose"]);
    assert_ranking_well_formed(&ranked, &sentences);
}

// ============================================================================
// BOUNDS
// ============================================================================

#[test]
fn test_empty_collection() {
    let sentences = units(&[]);
    let idf = idf_table(&[]);
    assert!(top_sentences(&query("cat"), &sentences, &idf, 5).is_empty());
}

#[test]
fn test_n_larger_than_collection_returns_everything() {
    let sentences = units(&[("a", "cat"), ("b", "dog"), ("c", "emu")]);
    let idf = idf_table(&[("cat", 1.0)]);
    let top = top_sentences(&query("cat"), &sentences, &idf, 100);
    assert_eq!(top, vec!["a", "b", "c"]);
}

#[test]
fn test_n_zero() {
    let sentences = units(&[("a", "cat")]);
    let idf = idf_table(&[("cat", 1.0)]);
    assert!(top_sentences(&query("cat"), &sentences, &idf, 0).is_empty());
}
