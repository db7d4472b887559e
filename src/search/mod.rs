// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking operations: where scores turn into answers.
//!
//! Two passes, same shape. First pick the documents most likely to hold the
//! answer, then pick the sentences inside them. Both take pre-tokenized units and
//! a precomputed IDF table, so neither knows anything about files or tokenizers.

pub mod documents;
pub mod sentences;

pub use documents::{rank_files, top_files};
pub use sentences::{rank_sentences, top_sentences};
