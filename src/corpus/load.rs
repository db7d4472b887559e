// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading documents from disk, in parallel when the `parallel` feature is on.
//!
//! Rayon's `collect` keeps input order, so the parallel and sequential paths
//! return identical corpora.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use super::CorpusError;

/// Regular, non-hidden files directly inside `dir`, sorted by file name.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let read_dir_err = |source: std::io::Error| CorpusError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() && !is_hidden(&path) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(CorpusError::Empty {
            path: dir.to_path_buf(),
        });
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(dir = %dir.display(), documents = paths.len(), "listed corpus");
    Ok(paths)
}

/// Read every path as UTF-8, returning `(file name, text)` in input order.
pub fn load_documents(paths: &[PathBuf]) -> Result<Vec<(String, String)>, CorpusError> {
    #[cfg(feature = "parallel")]
    let iter = paths.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = paths.iter();

    iter.map(|path| read_document(path)).collect()
}

/// Read every path as UTF-8 with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    paths: &[PathBuf],
    progress: &ProgressBar,
) -> Result<Vec<(String, String)>, CorpusError> {
    let counter = AtomicUsize::new(0);
    let total = paths.len();

    paths
        .par_iter()
        .map(|path| {
            let doc = read_document(path)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(doc)
        })
        .collect()
}

fn read_document(path: &Path) -> Result<(String, String), CorpusError> {
    let text = fs::read_to_string(path).map_err(|source| CorpusError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((file_name(path), text))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
