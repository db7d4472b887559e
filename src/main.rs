// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use gist::{AnswerConfig, Corpus, Pipeline, StopwordTokenizer};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ask {
            corpus,
            query,
            files,
            sentences,
            extra_stopwords,
            json,
        } => {
            let config = AnswerConfig {
                file_matches: files,
                sentence_matches: sentences,
            };
            run_ask(&corpus, query, config, extra_stopwords.as_deref(), json)
        }
        Commands::Inspect {
            corpus,
            top,
            extra_stopwords,
            json,
        } => run_inspect(&corpus, top, extra_stopwords.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout stays clean for answers and JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("GIST_LOG").unwrap_or_else(|_| EnvFilter::new("gist=warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run_ask(
    corpus_dir: &Path,
    query: Option<String>,
    config: AnswerConfig,
    extra_stopwords: Option<&Path>,
    json: bool,
) -> Result<()> {
    let pipeline = Pipeline::new(tokenizer(extra_stopwords)?, config)?;
    let corpus = load_corpus(corpus_dir)?;

    let question = match query {
        Some(q) => q,
        None => prompt_query()?,
    };

    let answer = pipeline.answer(&corpus, &question);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&answer).context("failed to serialize answer")?
        );
    } else {
        display::print_answer(&answer);
    }
    Ok(())
}

fn run_inspect(
    corpus_dir: &Path,
    top: usize,
    extra_stopwords: Option<&Path>,
    json: bool,
) -> Result<()> {
    let pipeline = Pipeline::new(tokenizer(extra_stopwords)?, AnswerConfig::default())?;
    let corpus = load_corpus(corpus_dir)?;
    let stats = pipeline.inspect(&corpus, top);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("failed to serialize statistics")?
        );
    } else {
        display::print_stats(&stats);
    }
    Ok(())
}

fn tokenizer(extra_stopwords: Option<&Path>) -> Result<StopwordTokenizer> {
    let tokenizer = StopwordTokenizer::new();
    let Some(path) = extra_stopwords else {
        return Ok(tokenizer);
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read stopwords from {}", path.display()))?;
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    tracing::debug!(count = words.len(), "extra stopwords");
    Ok(tokenizer.with_extra_stopwords(words))
}

/// Create a progress style for the loading bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<8} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

#[cfg(feature = "parallel")]
fn load_corpus(dir: &Path) -> Result<Corpus> {
    let paths = gist::corpus::list_documents(dir)?;

    let load_pb = ProgressBar::new(paths.len() as u64);
    load_pb.set_style(create_progress_style());
    load_pb.set_prefix("Loading");
    load_pb.set_message("documents...");

    let documents = gist::corpus::load_documents_with_progress(&paths, &load_pb)?;
    load_pb.finish_and_clear();

    tracing::info!(documents = documents.len(), dir = %dir.display(), "loaded corpus");
    Ok(Corpus::from_texts(documents))
}

#[cfg(not(feature = "parallel"))]
fn load_corpus(dir: &Path) -> Result<Corpus> {
    let corpus = Corpus::load(dir)?;
    tracing::info!(documents = corpus.len(), dir = %dir.display(), "loaded corpus");
    Ok(corpus)
}

/// Read the query from stdin. The prompt goes to stderr, and only when a person
/// is typing, so stdout stays parseable with `--json`.
fn prompt_query() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        eprint!("Query: ");
        io::stderr().flush().context("failed to flush stderr")?;
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read query from stdin")?;

    let line = line.trim();
    if line.is_empty() {
        bail!("no query given");
    }
    Ok(line.to_string())
}
