// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: comparators and tie runs.
//!
//! Every sort in this crate is a stable sort over a total order, so equal keys
//! keep their input order. That is the whole tie-break story for documents. For
//! sentences there is one more level: a run of identical scores gets reordered
//! by query term density, and nothing outside the run moves.

use crate::types::RankedUnit;
use std::cmp::Ordering;
use std::ops::Range;

/// Higher score first.
///
/// Uses `total_cmp` so the order is total even for values a `partial_cmp`
/// would refuse. Scores are finite and non-negative in practice.
pub fn compare_scores(a: &RankedUnit<'_>, b: &RankedUnit<'_>) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Higher density first. A missing density sorts as 0.
pub fn compare_densities(a: &RankedUnit<'_>, b: &RankedUnit<'_>) -> Ordering {
    let a = a.density.unwrap_or(0.0);
    let b = b.density.unwrap_or(0.0);
    b.total_cmp(&a)
}

/// Maximal runs of exactly equal scores in an already score-sorted slice.
///
/// Runs cover the slice end to end, in order, so concatenating them gives the
/// slice back. Equality is bit-level `==`: two sentences that match the same
/// query terms sum the same IDFs in the same order and land in the same run.
///
/// # Example
///
/// ```ignore
/// // scores: [3.0, 2.0, 2.0, 1.0]
/// assert_eq!(tie_runs(&ranked), vec![0..1, 1..3, 3..4]);
/// ```
pub fn tie_runs(ranked: &[RankedUnit<'_>]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = 0;

    for i in 1..=ranked.len() {
        if i == ranked.len() || ranked[i].score != ranked[start].score {
            runs.push(start..i);
            start = i;
        }
    }

    runs
}
