// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The answer pipeline: one question against one corpus.
//!
//! ```text
//! corpus ──tokenize──▶ documents ──idf──▶ rank_files ──top N──▶ files
//!                                                                 │
//!          sentences ◀──split + tokenize (top files only)─────────┘
//!              │
//!              └──idf (sentence scope)──▶ rank_sentences ──top N──▶ answer
//! ```
//!
//! The same tokenizer builds document tokens, sentence tokens and the query, so
//! scores stay comparable. Sentence IDFs are computed over the sentences of the
//! selected files only: a term is rare if few of *those* sentences use it.

use crate::contracts::check_idf_table_complete;
use crate::corpus::Corpus;
use crate::scoring::compute_idfs;
use crate::search::{rank_files, rank_sentences};
use crate::tokenize::{passages, query_from, split_sentences, StopwordTokenizer, Tokenizer};
use crate::types::{RankedUnit, Token, Units};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// How many files and sentences an answer keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnswerConfig {
    /// Documents whose sentences are considered.
    pub file_matches: usize,
    /// Sentences returned.
    pub sentence_matches: usize,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
        }
    }
}

impl AnswerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_matches == 0 {
            return Err(ConfigError::ZeroMatches {
                field: "file_matches",
            });
        }
        if self.sentence_matches == 0 {
            return Err(ConfigError::ZeroMatches {
                field: "sentence_matches",
            });
        }
        Ok(())
    }
}

/// Error type for invalid pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A match count was zero; an answer needs at least one file and one sentence.
    ZeroMatches { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroMatches { field } => write!(f, "{} must be at least 1", field),
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// RESULTS
// =============================================================================

/// One ranked file or sentence, owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// File name or sentence text.
    pub id: String,
    pub score: f64,
    /// Query term density, present when the sentence tied on score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    /// File a sentence was taken from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Match {
    fn from_ranked(unit: &RankedUnit<'_>, source: Option<&str>) -> Self {
        Self {
            id: unit.id.to_string(),
            score: unit.score,
            density: unit.density,
            source: source.map(str::to_string),
        }
    }
}

/// The pipeline's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Query tokens after tokenization, in scoring order.
    pub query: Vec<Token>,
    pub files: Vec<Match>,
    pub sentences: Vec<Match>,
}

impl Answer {
    /// The single best sentence, if any sentence survived tokenization.
    pub fn best(&self) -> Option<&str> {
        self.sentences.first().map(|m| m.id.as_str())
    }
}

/// A term and its document-scope IDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermStat {
    pub term: Token,
    pub idf: f64,
}

/// Corpus summary for `gist inspect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub documents: usize,
    /// Documents with no tokens left after filtering.
    pub skipped: Vec<String>,
    pub tokens: usize,
    pub vocabulary: usize,
    /// Highest IDF first.
    pub rarest: Vec<TermStat>,
    /// Lowest IDF first.
    pub commonest: Vec<TermStat>,
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Answers questions over a corpus with an injected tokenizer.
#[derive(Debug, Clone)]
pub struct Pipeline<T: Tokenizer = StopwordTokenizer> {
    tokenizer: T,
    config: AnswerConfig,
}

impl Default for Pipeline<StopwordTokenizer> {
    fn default() -> Self {
        Self {
            tokenizer: StopwordTokenizer::new(),
            config: AnswerConfig::default(),
        }
    }
}

impl<T: Tokenizer> Pipeline<T> {
    pub fn new(tokenizer: T, config: AnswerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { tokenizer, config })
    }

    pub fn config(&self) -> &AnswerConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Find the sentences that best answer `question`.
    pub fn answer(&self, corpus: &Corpus, question: &str) -> Answer {
        let (documents, _) = self.tokenize_documents(corpus);
        let file_idfs = compute_idfs(&documents);
        check_idf_table_complete(&documents, &file_idfs);

        let query = query_from(&self.tokenizer, question);
        if query.is_empty() {
            tracing::warn!(question, "query has no tokens after filtering; ranking falls back to corpus order");
        }

        let mut files = rank_files(&query, &documents, &file_idfs);
        files.truncate(self.config.file_matches);
        tracing::debug!(files = ?files.iter().map(|f| f.id).collect::<Vec<_>>(), "selected files");

        let (sentences, sources) = self.collect_sentences(corpus, &files);
        let sentence_idfs = compute_idfs(&sentences);
        check_idf_table_complete(&sentences, &sentence_idfs);

        let mut ranked = rank_sentences(&query, &sentences, &sentence_idfs);
        ranked.truncate(self.config.sentence_matches);
        tracing::debug!(
            candidates = sentences.len(),
            returned = ranked.len(),
            "ranked sentences"
        );

        Answer {
            query: query.into_iter().collect(),
            files: files.iter().map(|f| Match::from_ranked(f, None)).collect(),
            sentences: ranked
                .iter()
                .map(|s| Match::from_ranked(s, sources.get(s.id).map(String::as_str)))
                .collect(),
        }
    }

    /// Summarize the corpus as the ranker sees it.
    pub fn inspect(&self, corpus: &Corpus, top: usize) -> CorpusStats {
        let (documents, skipped) = self.tokenize_documents(corpus);
        let idf = compute_idfs(&documents);

        let mut terms: Vec<TermStat> = idf
            .into_iter()
            .map(|(term, idf)| TermStat { term, idf })
            .collect();
        terms.sort_by(|a, b| b.idf.total_cmp(&a.idf).then_with(|| a.term.cmp(&b.term)));

        let rarest = terms.iter().take(top).cloned().collect();
        let commonest = terms
            .iter()
            .rev()
            .take(top)
            .cloned()
            .collect();

        CorpusStats {
            documents: documents.len(),
            skipped,
            tokens: documents.values().map(Vec::len).sum(),
            vocabulary: terms.len(),
            rarest,
            commonest,
        }
    }

    /// Tokenize every document. Documents left without tokens are dropped from
    /// the units and returned by name.
    fn tokenize_documents(&self, corpus: &Corpus) -> (Units, Vec<String>) {
        let docs: Vec<(&String, &String)> = corpus.documents().iter().collect();

        #[cfg(feature = "parallel")]
        let iter = docs.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = docs.iter();

        let tokenized: Vec<(String, Vec<Token>)> = iter
            .map(|&(name, text)| (name.clone(), self.tokenizer.tokenize(text)))
            .collect();

        let mut units = Units::with_capacity(tokenized.len());
        let mut skipped = Vec::new();
        for (name, tokens) in tokenized {
            if tokens.is_empty() {
                tracing::warn!(document = %name, "no tokens after filtering; skipped");
                skipped.push(name);
            } else {
                units.insert(name, tokens);
            }
        }

        tracing::debug!(documents = units.len(), skipped = skipped.len(), "tokenized corpus");
        (units, skipped)
    }

    /// Sentences of the selected files, keyed by text, plus the file each came from.
    ///
    /// A sentence repeated across passages or files keeps its first position.
    fn collect_sentences(
        &self,
        corpus: &Corpus,
        files: &[RankedUnit<'_>],
    ) -> (Units, HashMap<String, String>) {
        let mut sentences = Units::new();
        let mut sources = HashMap::new();

        for file in files {
            let Some(text) = corpus.get(file.id) else {
                continue;
            };
            for passage in passages(text) {
                for sentence in split_sentences(passage) {
                    if sentences.contains_key(sentence) {
                        continue;
                    }
                    let tokens = self.tokenizer.tokenize(sentence);
                    if tokens.is_empty() {
                        continue;
                    }
                    sentences.insert(sentence.to_string(), tokens);
                    sources.insert(sentence.to_string(), file.id.to_string());
                }
            }
        }

        (sentences, sources)
    }
}
