// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverse document frequency over a collection of units.
//!
//! `idf(t) = ln(N / df(t))` where `N` is the number of units and `df(t)` the
//! number of units containing `t` at least once. No smoothing: a token that
//! appears everywhere gets exactly 0, a token unique to one unit gets `ln(N)`.
//!
//! `df(t) >= 1` holds by construction because the vocabulary is collected from
//! the units themselves, so the logarithm never sees a zero denominator.

use crate::types::{IdfTable, Units};
use std::collections::{HashMap, HashSet};

/// Compute the IDF of every distinct token across `units`.
///
/// Presence counts, not frequency: a unit mentioning a token ten times adds one
/// to its document frequency. Empty input gives an empty table.
///
/// # Example
///
/// ```
/// use gist::{compute_idfs, Units};
///
/// let mut units = Units::new();
/// units.insert("a.txt".into(), vec!["cat".into(), "sat".into()]);
/// units.insert("b.txt".into(), vec!["cat".into()]);
///
/// let idf = compute_idfs(&units);
/// assert_eq!(idf["cat"], 0.0);
/// assert!((idf["sat"] - 2f64.ln()).abs() < 1e-12);
/// ```
pub fn compute_idfs(units: &Units) -> IdfTable {
    let mut doc_freq: HashMap<&str, usize> = HashMap::new();

    for tokens in units.values() {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in distinct {
            *doc_freq.entry(token).or_insert(0) += 1;
        }
    }

    let total = units.len() as f64;
    doc_freq
        .into_iter()
        .map(|(token, df)| (token.to_string(), (total / df as f64).ln()))
        .collect()
}
