//! Per-chunk statistics: word and sentence counts, frequent words

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::types::ChunkMetadata;

/// Maximum number of key phrases kept per chunk
pub const MAX_KEY_PHRASES: usize = 5;

/// Words must be longer than this to count as key phrases
const MIN_KEY_PHRASE_EXCLUSIVE: usize = 3;

static SENTENCE_TERMINATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence terminator pattern"));

/// Compute metadata for a chunk's text
pub fn generate_metadata(text: &str) -> ChunkMetadata {
    ChunkMetadata {
        word_count: count_words(text),
        sentence_count: count_sentences(text),
        key_phrases: extract_key_phrases(text, MAX_KEY_PHRASES),
    }
}

/// Whitespace-delimited tokens
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Non-empty segments between runs of `.`, `!` and `?`
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_TERMINATORS
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Most frequent normalized words longer than three characters
///
/// Words are lowercased and stripped of everything except alphanumerics and
/// `_`. Equal counts are ordered by first occurrence in the text.
pub fn extract_key_phrases(text: &str, limit: usize) -> Vec<String> {
    // word -> (count, first occurrence)
    let mut frequencies: HashMap<String, (usize, usize)> = HashMap::new();

    for (position, token) in text.split_whitespace().enumerate() {
        let word: String = token
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect();

        if word.chars().count() <= MIN_KEY_PHRASE_EXCLUSIVE {
            continue;
        }

        frequencies
            .entry(word)
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, position));
    }

    let mut ranked: Vec<(String, usize, usize)> = frequencies
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(word, _, _)| word)
        .collect()
}
