// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the gist command-line interface.
//!
//! Two subcommands: `ask` answers a question from a corpus directory, and
//! `inspect` shows what the ranker sees in that corpus (vocabulary, rarest and
//! commonest terms, documents dropped for having no tokens).

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gist",
    about = "Answer questions from a directory of text files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the sentence that best answers a question
    Ask {
        /// Directory of text files, one document per file
        corpus: PathBuf,

        /// Question to answer (prompted on stdin when omitted)
        query: Option<String>,

        /// Number of top documents whose sentences are considered
        #[arg(short, long, default_value = "1", env = "GIST_FILE_MATCHES")]
        files: usize,

        /// Number of sentences to print
        #[arg(short, long, default_value = "1", env = "GIST_SENTENCE_MATCHES")]
        sentences: usize,

        /// File of extra stopwords, one per line
        #[arg(long)]
        extra_stopwords: Option<PathBuf>,

        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show corpus statistics
    Inspect {
        /// Directory of text files, one document per file
        corpus: PathBuf,

        /// Number of rarest/commonest terms to list
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// File of extra stopwords, one per line
        #[arg(long)]
        extra_stopwords: Option<PathBuf>,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}
