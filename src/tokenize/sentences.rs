// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sentence segmentation.
//!
//! Documents are split into passages on line breaks, and each passage into
//! sentences. Segmentation never crosses a line: a heading on its own line is its
//! own sentence even without a full stop.
//!
//! A sentence ends at `.`, `!` or `?` (plus any closing quotes or brackets) when
//! followed by whitespace or the end of the passage. A full stop after a known
//! abbreviation or a single capital initial does not end a sentence, so
//! "Dr. Smith met J. Doe." stays whole.

/// Abbreviations that end in a full stop without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "inc",
    "ltd", "co", "corp", "no", "fig", "approx", "dept", "est", "jan", "feb", "mar", "apr", "jun",
    "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Non-blank lines of a document, trimmed.
pub fn passages(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Split one passage into trimmed, non-empty sentences.
///
/// # Example
///
/// ```
/// use gist::split_sentences;
///
/// let s = split_sentences("Dr. Smith arrived. Was he late? No!");
/// assert_eq!(s, vec!["Dr. Smith arrived.", "Was he late?", "No!"]);
/// ```
pub fn split_sentences(passage: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = passage.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }

        // Swallow "?!", "...", closing quotes and brackets.
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if is_terminator(next) || is_closing(next) {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let at_boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
        if !at_boundary {
            continue;
        }
        if c == '.' && ends_with_abbreviation(&passage[start..i]) {
            continue;
        }

        push_trimmed(&mut sentences, &passage[start..end]);
        start = end;
    }

    push_trimmed(&mut sentences, &passage[start..]);
    sentences
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’' | '»')
}

/// Does the text before a full stop end in an abbreviation or an initial?
fn ends_with_abbreviation(before: &str) -> bool {
    let word = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = word.chars();
    if let (Some(only), None) = (chars.next(), chars.next()) {
        return only.is_uppercase();
    }

    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}
