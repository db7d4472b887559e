//! End-to-end answers over an in-memory corpus.

use crate::common::{corpus, encyclopedia};
use gist::{AnswerConfig, Pipeline, StopwordTokenizer, WhitespaceTokenizer};

#[test]
fn test_who_question() {
    let answer = Pipeline::default().answer(&encyclopedia(), "Who created Python?");

    assert_eq!(answer.query, vec!["created", "python"]);
    assert_eq!(answer.files[0].id, "python.txt");
    assert_eq!(answer.best(), Some("Guido van Rossum created Python."));
    assert_eq!(answer.sentences[0].source.as_deref(), Some("python.txt"));
}

#[test]
fn test_answer_from_second_document() {
    let answer = Pipeline::default().answer(&encyclopedia(), "When did Mozilla sponsor Rust?");

    assert_eq!(answer.files[0].id, "rust.txt");
    assert_eq!(answer.best(), Some("Mozilla sponsored Rust in 2009."));
}

#[test]
fn test_tied_sentences_resolved_by_density() {
    // "Cats are small carnivorous mammals." and "Cats groom themselves often."
    // both match only "cats"; the shorter one packs it denser.
    let answer = Pipeline::default().answer(&encyclopedia(), "How long do cats sleep?");

    assert_eq!(answer.files[0].id, "cats.txt");
    assert_eq!(answer.best(), Some("Cats groom themselves often."));
    let density = answer.sentences[0].density.unwrap();
    assert!((density - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_sentences_come_only_from_selected_files() {
    let config = AnswerConfig {
        file_matches: 1,
        sentence_matches: 100,
    };
    let pipeline = Pipeline::new(StopwordTokenizer::new(), config).unwrap();
    let answer = pipeline.answer(&encyclopedia(), "programming language Rust");

    assert_eq!(answer.files.len(), 1);
    assert_eq!(answer.files[0].id, "rust.txt");
    assert_eq!(answer.sentences.len(), 4);
    assert!(answer
        .sentences
        .iter()
        .all(|s| s.source.as_deref() == Some("rust.txt")));
}

#[test]
fn test_more_files_widen_the_sentence_pool() {
    let config = AnswerConfig {
        file_matches: 3,
        sentence_matches: 100,
    };
    let pipeline = Pipeline::new(StopwordTokenizer::new(), config).unwrap();
    let answer = pipeline.answer(&encyclopedia(), "programming language");

    assert_eq!(answer.files.len(), 3);
    // 4 + 4 + 3 sentences across the three files
    assert_eq!(answer.sentences.len(), 11);
}

#[test]
fn test_duplicate_sentences_kept_once() {
    let docs = corpus(&[
        ("a.txt", "Bees make honey. Bees make honey."),
        ("b.txt", "Bees make honey. Wasps do not."),
    ]);
    let config = AnswerConfig {
        file_matches: 2,
        sentence_matches: 10,
    };
    let pipeline = Pipeline::new(StopwordTokenizer::new(), config).unwrap();
    let answer = pipeline.answer(&docs, "honey bees");

    let texts: Vec<&str> = answer.sentences.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(texts, vec!["Bees make honey.", "Wasps do not."]);
    assert_eq!(answer.sentences[0].source.as_deref(), Some("a.txt"));
}

#[test]
fn test_custom_tokenizer_is_used_everywhere() {
    // The whitespace tokenizer keeps stopwords and punctuation, so "the" matches.
    let docs = corpus(&[("a.txt", "the end"), ("b.txt", "a start")]);
    let answer = Pipeline::new(WhitespaceTokenizer, AnswerConfig::default())
        .unwrap()
        .answer(&docs, "the");

    assert_eq!(answer.query, vec!["the"]);
    assert_eq!(answer.files[0].id, "a.txt");
    assert_eq!(answer.best(), Some("the end"));
}

#[test]
fn test_answer_serializes_without_empty_fields() {
    let answer = Pipeline::default().answer(&encyclopedia(), "Who created Python?");
    let json = serde_json::to_value(&answer).unwrap();

    assert_eq!(json["files"][0]["id"], "python.txt");
    assert!(json["files"][0].get("source").is_none());
    assert!(json["files"][0].get("density").is_none());
    assert_eq!(json["sentences"][0]["source"], "python.txt");
}

#[test]
fn test_extra_stopwords_change_the_answer() {
    let tokenizer = StopwordTokenizer::new().with_extra_stopwords(["python"]);
    let answer = Pipeline::new(tokenizer, AnswerConfig::default())
        .unwrap()
        .answer(&encyclopedia(), "python memory safety");

    assert_eq!(answer.query, vec!["memory", "safety"]);
    assert_eq!(answer.best(), Some("The borrow checker enforces memory safety."));
}
