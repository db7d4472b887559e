// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus: named raw texts, in a stable order.
//!
//! A corpus is a flat directory of text files. Each regular, non-hidden file is
//! one document, keyed by its file name. Files are ordered by name so that every
//! tie-break downstream ("first document wins") is reproducible across machines
//! and filesystems.

mod load;

#[cfg(feature = "parallel")]
pub use load::load_documents_with_progress;
pub use load::{list_documents, load_documents};

use indexmap::IndexMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for corpus loading.
///
/// Messages name the path; the underlying I/O error is the `source`.
#[derive(Debug)]
pub enum CorpusError {
    /// The corpus directory could not be listed.
    ReadDir { path: PathBuf, source: io::Error },
    /// A document could not be read (missing, unreadable, or not UTF-8).
    ReadFile { path: PathBuf, source: io::Error },
    /// The directory holds no documents.
    Empty { path: PathBuf },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::ReadDir { path, .. } => {
                write!(f, "failed to list corpus directory {}", path.display())
            }
            CorpusError::ReadFile { path, .. } => write!(f, "failed to read {}", path.display()),
            CorpusError::Empty { path } => {
                write!(f, "corpus directory {} contains no documents", path.display())
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::ReadDir { source, .. } | CorpusError::ReadFile { source, .. } => {
                Some(source)
            }
            CorpusError::Empty { .. } => None,
        }
    }
}

/// File name → raw text, ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: IndexMap<String, String>,
}

impl Corpus {
    /// Load every document in `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let dir = dir.as_ref();
        let paths = list_documents(dir)?;
        Ok(Self::from_texts(load_documents(&paths)?))
    }

    /// Build a corpus from in-memory texts, keeping their order.
    ///
    /// A repeated name keeps its first position and its last text.
    pub fn from_texts<I>(texts: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            documents: texts.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Raw text of a document.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.documents.get(name).map(String::as_str)
    }

    /// Documents in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn documents(&self) -> &IndexMap<String, String> {
        &self.documents
    }
}
