//! Fixed-size windows with optional backward sentence snapping

use super::classify::classify_chunk;
use super::text::CharIndex;
use super::ChunkBuilder;
use crate::types::{ChunkingOptions, DocumentChunk};

/// Split `text` into windows of `max_chunk_size` characters
pub(crate) fn chunk_fixed(text: &str, options: &ChunkingOptions) -> Vec<DocumentChunk> {
    let index = CharIndex::new(text);
    let mut builder = ChunkBuilder::default();

    for (start, end) in fixed_windows(
        &index,
        options.max_chunk_size,
        options.overlap_size,
        options.sentence_boundary,
    ) {
        let window = index.slice(start, end);
        builder.push(window, start, end, classify_chunk(window));
    }

    builder.finish()
}

/// Window spans `[start, end)` in char positions
///
/// Each window is `max_size` characters. With `sentence_boundary`, a window
/// that ends mid-document is cut after the last `.` at or before its end, if
/// that period lies in the window's second half. The
/// next window starts `overlap` characters before the previous end and always
/// advances by at least one character.
pub(crate) fn fixed_windows(
    index: &CharIndex<'_>,
    max_size: usize,
    overlap: usize,
    sentence_boundary: bool,
) -> Vec<(usize, usize)> {
    let len = index.len();
    let mut spans = Vec::new();
    let mut start = 0usize;

    while start < len {
        let mut end = start.saturating_add(max_size).min(len);

        if sentence_boundary && end < len {
            if let Some(period) = index.rfind_char('.', start, end + 1) {
                // Only snap within the latter half of the window
                if period * 2 > (start * 2).saturating_add(max_size) {
                    end = period + 1;
                }
            }
        }

        spans.push((start, end));

        if end >= len {
            break;
        }
        start = end.saturating_sub(overlap).max(start + 1);
    }

    spans
}
