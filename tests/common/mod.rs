//! Shared test utilities and fixtures.

#![allow(dead_code)]

use gist::{Corpus, RankedUnit, Units};
use std::collections::HashSet;

// Re-export canonical test utilities from gist::testing
#[allow(unused_imports)]
pub use gist::testing::{corpus, idf_table, query, tokens, units};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small corpus with one obvious answer per topic.
pub fn encyclopedia() -> Corpus {
    corpus(&[
        (
            "python.txt",
            "Python is a high-level programming language.\n\
             Guido van Rossum created Python. The first release came out in 1991.\n\
             Python emphasizes code readability.",
        ),
        (
            "rust.txt",
            "Rust is a systems programming language.\n\
             Graydon Hoare started Rust as a personal project. Mozilla sponsored Rust in 2009.\n\
             The borrow checker enforces memory safety.",
        ),
        (
            "cats.txt",
            "Cats are small carnivorous mammals.\n\
             A domestic cat sleeps up to sixteen hours a day. Cats groom themselves often.",
        ),
    ])
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert scores never increase and every id is unique and present in `units`.
pub fn assert_ranking_well_formed(ranked: &[RankedUnit<'_>], units: &Units) {
    for pair in ranked.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "scores out of order: {} ({}) before {} ({})",
            pair[0].id,
            pair[0].score,
            pair[1].id,
            pair[1].score
        );
    }

    let mut seen = HashSet::new();
    for unit in ranked {
        assert!(units.contains_key(unit.id), "unknown unit {}", unit.id);
        assert!(seen.insert(unit.id), "duplicate unit {}", unit.id);
    }
}
