// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the answer pipeline's ranking invariants.
//!
//! Whatever text the fuzzer produces, an answer must respect its match counts,
//! return sentences in non-increasing score order, and only quote sentences
//! from the files it selected.

#![no_main]

use arbitrary::Arbitrary;
use gist::{AnswerConfig, Corpus, Pipeline, StopwordTokenizer};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    documents: Vec<String>,
    question: String,
    file_matches: u8,
    sentence_matches: u8,
}

fuzz_target!(|input: Input| {
    // Cap sizes to avoid timeouts
    let documents: Vec<(String, String)> = input
        .documents
        .into_iter()
        .take(16)
        .enumerate()
        .map(|(i, text)| (format!("doc{:02}.txt", i), text.chars().take(2000).collect()))
        .collect();
    let question: String = input.question.chars().take(200).collect();

    let config = AnswerConfig {
        file_matches: usize::from(input.file_matches % 8) + 1,
        sentence_matches: usize::from(input.sentence_matches % 8) + 1,
    };
    let Ok(pipeline) = Pipeline::new(StopwordTokenizer::new(), config) else {
        return;
    };

    let corpus = Corpus::from_texts(documents);
    let answer = pipeline.answer(&corpus, &question);

    // INVARIANT 1: match counts are upper bounds
    assert!(answer.files.len() <= config.file_matches);
    assert!(answer.sentences.len() <= config.sentence_matches);

    // INVARIANT 2: scores never increase
    for pair in answer.files.windows(2) {
        assert!(pair[0].score >= pair[1].score, "file order: {:?}", pair);
    }
    for pair in answer.sentences.windows(2) {
        assert!(pair[0].score >= pair[1].score, "sentence order: {:?}", pair);
    }

    // INVARIANT 3: every sentence comes from a selected file
    for sentence in &answer.sentences {
        let source = sentence.source.as_deref().expect("sentence without source");
        assert!(
            answer.files.iter().any(|f| f.id == source),
            "sentence from unselected file {}",
            source
        );
        let text = corpus.get(source).expect("source missing from corpus");
        assert!(text.contains(sentence.id.as_str()));
    }
});
