// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! Fixtures split on whitespace only, so tests control the exact vocabulary
//! without going through stopword filtering.

#![doc(hidden)]

use crate::corpus::Corpus;
use crate::types::{IdfTable, Query, Token, Units};

/// Split a fixture string on whitespace.
pub fn tokens(text: &str) -> Vec<Token> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Build units from `(id, space-separated tokens)` pairs, in order.
pub fn units(pairs: &[(&str, &str)]) -> Units {
    pairs
        .iter()
        .map(|(id, text)| (id.to_string(), tokens(text)))
        .collect()
}

/// Build a query set from space-separated tokens.
pub fn query(text: &str) -> Query {
    text.split_whitespace().map(str::to_string).collect()
}

/// Build an IDF table from literal values.
pub fn idf_table(pairs: &[(&str, f64)]) -> IdfTable {
    pairs.iter().map(|(t, v)| (t.to_string(), *v)).collect()
}

/// Build an in-memory corpus from `(file name, text)` pairs.
pub fn corpus(pairs: &[(&str, &str)]) -> Corpus {
    Corpus::from_texts(pairs.iter().map(|(name, text)| (name.to_string(), text.to_string())))
}
