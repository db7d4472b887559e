// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for tokenization and sentence splitting.
//!
//! Tokens are never empty and never contain whitespace, and every sentence is
//! a non-empty, trimmed slice of its passage.

#![no_main]

use gist::{passages, split_sentences, StopwordTokenizer, Tokenizer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Cap length to avoid timeouts
    let text: String = String::from_utf8_lossy(data).chars().take(4000).collect();

    let tokenizer = StopwordTokenizer::new();
    for token in tokenizer.tokenize(&text) {
        assert!(!token.is_empty());
        assert!(!token.contains(char::is_whitespace), "token {:?}", token);
    }

    for passage in passages(&text) {
        for sentence in split_sentences(passage) {
            assert!(!sentence.is_empty());
            assert_eq!(sentence, sentence.trim());
            assert!(passage.contains(sentence));
        }
    }
});
