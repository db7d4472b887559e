// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shapes that flow through ranking.
//!
//! Everything here is a plain container. A *unit* is either a whole document
//! (keyed by file name) or a single sentence (keyed by its literal text), always
//! paired with its token sequence. The same containers serve both ranking phases,
//! which is why the IDF calculator can be reused verbatim for sentences.
//!
//! # Invariants
//!
//! - **Units**: insertion order is the tie-break order. Two units with the same
//!   score come back in the order they were inserted. Never swap `IndexMap` for a
//!   `HashMap` here.
//!
//! - **IdfTable**: only contains tokens that occur in at least one unit of the
//!   collection it was built from. Absent tokens are skipped, never read as 0.
//!
//! - **Query**: a set, ordered. Iterating it in a fixed order keeps floating-point
//!   score sums bit-identical between sentences that match the same terms, which
//!   is what makes exact-equality tie runs meaningful.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A normalized token produced by a [`Tokenizer`](crate::Tokenizer).
pub type Token = String;

/// Unit identifier → token sequence, in input order.
pub type Units = IndexMap<String, Vec<Token>>;

/// Token → inverse document frequency.
pub type IdfTable = HashMap<Token, f64>;

/// Query tokens. Duplicates collapse; iteration order is lexicographic.
pub type Query = BTreeSet<Token>;

/// A unit with the numbers that put it where it is in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedUnit<'a> {
    /// File name or sentence text.
    pub id: &'a str,
    /// TF-IDF sum (documents) or matching-word IDF sum (sentences).
    pub score: f64,
    /// Query term density, only computed for sentences that tied on `score`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
}

impl<'a> RankedUnit<'a> {
    pub(crate) fn new(id: &'a str, score: f64) -> Self {
        Self {
            id,
            score,
            density: None,
        }
    }
}

/// Strip scores off a ranking, keeping only identifiers.
pub fn ids<'a>(ranked: &[RankedUnit<'a>]) -> Vec<&'a str> {
    ranked.iter().map(|r| r.id).collect()
}
