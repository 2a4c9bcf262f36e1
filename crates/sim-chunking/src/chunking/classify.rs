//! Structural classification of chunks and lines
//!
//! Rules are evaluated in priority order: heading, list, quote, code.
//! Anything else is content.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ChunkType;

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6}\s").expect("valid heading pattern"));
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*+]|\d+\.)\s").expect("valid list pattern"));
static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>\s").expect("valid quote pattern"));

/// Opening or closing marker of a fenced code block
pub const CODE_FENCE: &str = "```";

/// A classification rule: `(leading line, whole text) -> matches`
type Rule = (ChunkType, fn(&str, &str) -> bool);

const RULES: [Rule; 4] = [
    (ChunkType::Heading, is_heading),
    (ChunkType::List, is_list_item),
    (ChunkType::Quote, is_quote),
    (ChunkType::Code, has_code_fence),
];

fn is_heading(line: &str, _text: &str) -> bool {
    HEADING.is_match(line)
}

fn is_list_item(line: &str, _text: &str) -> bool {
    LIST_ITEM.is_match(line)
}

fn is_quote(line: &str, _text: &str) -> bool {
    QUOTE.is_match(line)
}

fn has_code_fence(_line: &str, text: &str) -> bool {
    text.contains(CODE_FENCE)
}

/// Classify a chunk from its leading trimmed line
///
/// The code rule looks for a fence anywhere in the text, not only at the start.
pub fn classify_chunk(text: &str) -> ChunkType {
    let trimmed = text.trim();
    let leading = trimmed.lines().next().unwrap_or("");

    RULES
        .iter()
        .find(|(_, matches)| matches(leading, trimmed))
        .map(|(chunk_type, _)| *chunk_type)
        .unwrap_or(ChunkType::Content)
}

/// Classify a single line outside of a code block
pub(crate) fn classify_line(line: &str) -> ChunkType {
    let trimmed = line.trim();
    if trimmed.starts_with(CODE_FENCE) {
        return ChunkType::Code;
    }
    classify_chunk(trimmed)
}
