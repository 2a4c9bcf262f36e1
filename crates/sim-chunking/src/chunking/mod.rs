//! Document chunking strategies
//!
//! [`create_chunks`] is the single entry point. It validates the options,
//! dispatches to one of four strategies and returns chunks ordered by index:
//!
//! - **fixed**: character windows, optionally snapped back to a sentence end
//! - **sliding**: constant-step windows, optionally extended to a sentence end
//! - **semantic**: whole paragraphs packed up to the size limit
//! - **adaptive**: structural sections chunked with type-specific sizes

mod adaptive;
mod classify;
mod fixed;
mod metadata;
mod overlap;
mod semantic;
mod sliding;
mod text;

pub use adaptive::MAX_HEADING_CHUNK_SIZE;
pub use classify::classify_chunk;
pub use metadata::{
    count_sentences, count_words, extract_key_phrases, generate_metadata, MAX_KEY_PHRASES,
};
pub use overlap::extract_overlap;
pub use semantic::PARAGRAPH_SEPARATOR;

use crate::error::Result;
use crate::types::{ChunkType, ChunkingOptions, ChunkingStrategy, DocumentChunk};

/// Split `text` into chunks according to `options`
///
/// Empty or whitespace-only text yields no chunks. Options are validated
/// first, so an overlap that would stop the windows from advancing is
/// reported as [`crate::Error::InvalidConfiguration`].
pub fn create_chunks(text: &str, options: &ChunkingOptions) -> Result<Vec<DocumentChunk>> {
    options.validate()?;

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let chunks = match options.strategy {
        ChunkingStrategy::Fixed => fixed::chunk_fixed(text, options),
        ChunkingStrategy::Sliding => sliding::chunk_sliding(text, options),
        ChunkingStrategy::Semantic => semantic::chunk_semantic(text, options),
        ChunkingStrategy::Adaptive => adaptive::chunk_adaptive(text, options),
    };

    tracing::debug!(
        strategy = %options.strategy,
        chars = text.chars().count(),
        chunks = chunks.len(),
        "Chunked document"
    );

    Ok(chunks)
}

/// Collects chunks with consecutive indices, skipping blank windows
#[derive(Default)]
pub(crate) struct ChunkBuilder {
    chunks: Vec<DocumentChunk>,
}

impl ChunkBuilder {
    /// Trim `raw` and record it as the next chunk unless it is blank
    pub(crate) fn push(&mut self, raw: &str, start: usize, end: usize, chunk_type: ChunkType) {
        let text = raw.trim();
        if text.is_empty() {
            return;
        }

        self.chunks.push(DocumentChunk {
            text: text.to_string(),
            index: self.chunks.len(),
            start_char: start,
            end_char: end,
            chunk_type,
            metadata: generate_metadata(text),
        });
    }

    pub(crate) fn finish(self) -> Vec<DocumentChunk> {
        self.chunks
    }
}
