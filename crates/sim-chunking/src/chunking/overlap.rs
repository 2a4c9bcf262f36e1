//! Overlap tail extraction for the semantic strategy

use unicode_segmentation::UnicodeSegmentation;

/// Trailing sentences of `text` that fit within `target` characters
///
/// Sentences are accumulated from the end while they fit. If even the last
/// sentence is longer than `target` the tail is empty. Text without sentence
/// boundaries falls back to its raw character suffix.
pub fn extract_overlap(text: &str, target: usize) -> String {
    if target == 0 || text.trim().is_empty() {
        return String::new();
    }

    let sentences: Vec<&str> = text.split_sentence_bounds().collect();

    if sentences.len() > 1 {
        let mut taken = 0usize;
        let mut length = 0usize;

        for sentence in sentences.iter().rev() {
            let sentence_len = sentence.chars().count();
            if length + sentence_len > target {
                break;
            }
            length += sentence_len;
            taken += 1;
        }

        return sentences[sentences.len() - taken..].concat().trim().to_string();
    }

    char_suffix(text, target).trim().to_string()
}

/// Last `count` characters of `text`
fn char_suffix(text: &str, count: usize) -> &str {
    let total = text.chars().count();
    if total <= count {
        return text;
    }

    let skip = total - count;
    let start = text
        .char_indices()
        .nth(skip)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len());
    &text[start..]
}
