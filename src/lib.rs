// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Answer questions from a small corpus with TF-IDF ranking.
//!
//! Give it a directory of text files and a question. It picks the documents most
//! likely to contain the answer by TF-IDF, splits them into sentences, and returns
//! the sentence whose query terms are rarest, breaking exact ties by how densely
//! the sentence packs query terms.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  corpus     │────▶│  tokenize    │────▶│  scoring::idf    │
//! │ (load dir)  │     │ (Tokenizer,  │     │ (compute_idfs)   │
//! └─────────────┘     │  sentences)  │     └──────────────────┘
//!                     └──────────────┘              │
//!                                                   ▼
//! ┌─────────────┐     ┌──────────────────────────────────────────┐
//! │  pipeline   │────▶│  search::documents   search::sentences    │
//! │ (Pipeline)  │     │  (top_files)         (top_sentences)      │
//! └─────────────┘     └──────────────────────────────────────────┘
//! ```
//!
//! The three ranking operations (`compute_idfs`, `top_files`, `top_sentences`)
//! are pure functions over pre-tokenized units. They never touch the filesystem
//! or a tokenizer, so they can be called on any collection with any vocabulary.
//!
//! # Usage
//!
//! ```
//! use gist::{Corpus, Pipeline};
//!
//! let corpus = Corpus::from_texts(vec![
//!     ("python.txt".to_string(), "Guido van Rossum created Python.".to_string()),
//!     ("cats.txt".to_string(), "Cats sleep a lot.".to_string()),
//! ]);
//!
//! let answer = Pipeline::default().answer(&corpus, "Who created Python?");
//! assert_eq!(answer.best(), Some("Guido van Rossum created Python."));
//! ```

pub mod contracts;
pub mod corpus;
pub mod pipeline;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod tokenize;
mod types;
pub mod util;

// Re-exports for public API
pub use corpus::{Corpus, CorpusError};
pub use pipeline::{Answer, AnswerConfig, ConfigError, CorpusStats, Match, Pipeline, TermStat};
pub use scoring::{compute_idfs, document_score, matching_word_score, query_term_density};
pub use search::{rank_files, rank_sentences, top_files, top_sentences};
pub use tokenize::{
    passages, query_from, split_sentences, StopwordTokenizer, Tokenizer, WhitespaceTokenizer,
};
pub use types::{ids, IdfTable, Query, RankedUnit, Token, Units};
pub use util::normalize::normalize;
