//! Sliding windows with a constant step and forward sentence snapping

use super::classify::classify_chunk;
use super::text::CharIndex;
use super::ChunkBuilder;
use crate::types::{ChunkingOptions, DocumentChunk};

/// Split `text` into windows advancing by `max_chunk_size - overlap_size`
///
/// With `sentence_boundary`, a window is extended forward to the next `.` as
/// long as it grows no more than 20% past `max_chunk_size`. Chunks shorter
/// than the effective minimum are dropped, so coverage may have gaps.
pub(crate) fn chunk_sliding(text: &str, options: &ChunkingOptions) -> Vec<DocumentChunk> {
    let index = CharIndex::new(text);
    let len = index.len();
    let max_size = options.max_chunk_size;
    let step = max_size - options.overlap_size;
    let min_size = options.effective_min_chunk_size();

    let mut builder = ChunkBuilder::default();
    let mut dropped = 0usize;
    let mut start = 0usize;

    while start < len {
        let nominal_end = start.saturating_add(max_size).min(len);
        let mut end = nominal_end;

        if options.sentence_boundary && nominal_end < len {
            // A period at `limit` or later would push the chunk past 120%
            let limit = start.saturating_add(max_size.saturating_mul(6) / 5).min(len);
            if let Some(period) = index.find_char('.', nominal_end - 1, limit) {
                end = period + 1;
            }
        }

        let window = index.slice(start, end);
        if window.trim().chars().count() >= min_size {
            builder.push(window, start, end, classify_chunk(window));
        } else {
            dropped += 1;
        }

        if nominal_end >= len {
            break;
        }
        start += step;
    }

    if dropped > 0 {
        tracing::debug!(
            "Sliding strategy dropped {} window(s) shorter than {} chars",
            dropped,
            min_size
        );
    }

    builder.finish()
}
