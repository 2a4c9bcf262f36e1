//! Paragraph-packing strategy
//!
//! Paragraphs are never split. A chunk may exceed `max_chunk_size` when a
//! single paragraph is longer than the limit.

use once_cell::sync::Lazy;
use regex::Regex;

use super::classify::classify_chunk;
use super::overlap::extract_overlap;
use super::text::CharIndex;
use super::ChunkBuilder;
use crate::types::{ChunkingOptions, DocumentChunk};

/// Separator placed between paragraphs inside a chunk
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

static BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid blank line pattern"));

/// A trimmed paragraph and its char span in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Paragraph<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split on blank lines, dropping empty paragraphs
pub(crate) fn split_paragraphs(text: &str) -> Vec<Paragraph<'_>> {
    let index = CharIndex::new(text);
    let mut paragraphs = Vec::new();
    let mut piece_start = 0usize;

    let separators = BLANK_LINE
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .chain(std::iter::once((text.len(), text.len())));

    for (sep_start, sep_end) in separators {
        let piece = &text[piece_start..sep_start];
        let trimmed = piece.trim();

        if !trimmed.is_empty() {
            let leading = piece.len() - piece.trim_start().len();
            let byte_start = piece_start + leading;
            paragraphs.push(Paragraph {
                text: trimmed,
                start: index.char_offset(byte_start),
                end: index.char_offset(byte_start + trimmed.len()),
            });
        }

        piece_start = sep_end;
    }

    paragraphs
}

/// Pack whole paragraphs into chunks of at most `max_chunk_size` characters
///
/// When the next paragraph does not fit, the buffer is emitted and the next
/// one is seeded with the trailing sentences of the emitted chunk.
pub(crate) fn chunk_semantic(text: &str, options: &ChunkingOptions) -> Vec<DocumentChunk> {
    let separator_len = PARAGRAPH_SEPARATOR.len();
    let mut builder = ChunkBuilder::default();

    let mut buffer = String::new();
    let mut buffer_len = 0usize;
    let mut buffer_start = 0usize;
    let mut buffer_end = 0usize;

    for paragraph in split_paragraphs(text) {
        let paragraph_len = paragraph.text.chars().count();

        if buffer.is_empty() {
            buffer.push_str(paragraph.text);
            buffer_len = paragraph_len;
            buffer_start = paragraph.start;
        } else if buffer_len + separator_len + paragraph_len > options.max_chunk_size {
            builder.push(&buffer, buffer_start, buffer_end, classify_chunk(&buffer));

            let tail = extract_overlap(&buffer, options.overlap_size);
            let tail_len = tail.chars().count();

            buffer.clear();
            if tail.is_empty() {
                buffer_start = paragraph.start;
                buffer_len = paragraph_len;
            } else {
                buffer.push_str(&tail);
                buffer.push_str(PARAGRAPH_SEPARATOR);
                buffer_start = paragraph.start.saturating_sub(tail_len + separator_len);
                buffer_len = tail_len + separator_len + paragraph_len;
            }
            buffer.push_str(paragraph.text);
        } else {
            buffer.push_str(PARAGRAPH_SEPARATOR);
            buffer.push_str(paragraph.text);
            buffer_len += separator_len + paragraph_len;
        }

        buffer_end = paragraph.end;
    }

    if !buffer.is_empty() {
        builder.push(&buffer, buffer_start, buffer_end, classify_chunk(&buffer));
    }

    builder.finish()
}
