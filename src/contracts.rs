// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking invariants.
//!
//! Debug-mode assertions that the rankers call on their own output. They are
//! zero-cost in release builds (`debug_assert!` all the way down) and fail loudly
//! in tests the moment an invariant slips.
//!
//! | Contract                    | Invariant                                          |
//! |-----------------------------|----------------------------------------------------|
//! | `check_units_non_empty`     | Sentences fed to ranking have at least one token   |
//! | `check_idf_table_complete`  | Every token of the collection has a finite IDF ≥ 0 |
//! | `check_scores_descending`   | Rankings never put a lower score first             |
//! | `check_ranking_subset`      | Rankings only name input units, each at most once  |
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! The density tie-break relies on `check_scores_descending` after reordering:
//! if it fires, a density sort leaked across a score boundary.

use crate::types::{IdfTable, RankedUnit, Units};
use std::collections::HashSet;

/// Check that no unit has an empty token sequence.
///
/// # Panics (debug builds only)
/// Panics naming the first offending unit.
#[inline]
pub fn check_units_non_empty(units: &Units) {
    if cfg!(debug_assertions) {
        for (id, tokens) in units {
            debug_assert!(
                !tokens.is_empty(),
                "Contract violation: unit {:?} has no tokens; filter it before ranking",
                id
            );
        }
    }
}

/// Check that an IDF table covers the collection it was built from.
///
/// # Panics (debug builds only)
/// Panics if a token is missing, or its IDF is negative or not finite.
#[inline]
pub fn check_idf_table_complete(units: &Units, idf: &IdfTable) {
    if cfg!(debug_assertions) {
        for token in units.values().flatten() {
            let value = idf.get(token);
            debug_assert!(
                value.is_some(),
                "Contract violation: token {:?} has no IDF entry",
                token
            );
            if let Some(&v) = value {
                debug_assert!(
                    v.is_finite() && v >= 0.0,
                    "Contract violation: IDF of {:?} is {}",
                    token,
                    v
                );
            }
        }
    }
}

/// Check that scores are non-increasing.
///
/// # Panics (debug builds only)
/// Panics at the first position where a score rises.
#[inline]
pub fn check_scores_descending(ranked: &[RankedUnit<'_>]) {
    for (i, pair) in ranked.windows(2).enumerate() {
        debug_assert!(
            pair[0].score >= pair[1].score,
            "Contract violation: ranked[{}].score {} < ranked[{}].score {}",
            i,
            pair[0].score,
            i + 1,
            pair[1].score
        );
    }
}

/// Check that a ranking only names units from its input, without repeats.
///
/// # Panics (debug builds only)
/// Panics on an unknown or duplicate identifier, or a ranking longer than the input.
#[inline]
pub fn check_ranking_subset(ranked: &[RankedUnit<'_>], units: &Units) {
    if cfg!(debug_assertions) {
        debug_assert!(
            ranked.len() <= units.len(),
            "Contract violation: ranking has {} entries for {} units",
            ranked.len(),
            units.len()
        );
        let mut seen: HashSet<&str> = HashSet::with_capacity(ranked.len());
        for unit in ranked {
            debug_assert!(
                units.contains_key(unit.id),
                "Contract violation: ranking names unknown unit {:?}",
                unit.id
            );
            debug_assert!(
                seen.insert(unit.id),
                "Contract violation: ranking names {:?} twice",
                unit.id
            );
        }
    }
}
