//! Aggregate statistics over a chunk sequence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::DocumentChunk;

/// Size and type statistics for a set of chunks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChunkingSummary {
    pub chunk_count: usize,
    /// Chunk lengths in characters
    pub total_chars: usize,
    pub min_chars: usize,
    pub max_chars: usize,
    pub avg_chars: f64,
    pub total_words: usize,
    /// Chunk count per chunk type name
    pub by_type: BTreeMap<String, usize>,
}

impl ChunkingSummary {
    pub fn from_chunks(chunks: &[DocumentChunk]) -> Self {
        if chunks.is_empty() {
            return Self::default();
        }

        let lengths: Vec<usize> = chunks.iter().map(DocumentChunk::char_len).collect();
        let total_chars: usize = lengths.iter().sum();

        let mut by_type = BTreeMap::new();
        for chunk in chunks {
            *by_type.entry(chunk.chunk_type.to_string()).or_insert(0) += 1;
        }

        Self {
            chunk_count: chunks.len(),
            total_chars,
            min_chars: lengths.iter().copied().min().unwrap_or(0),
            max_chars: lengths.iter().copied().max().unwrap_or(0),
            avg_chars: total_chars as f64 / chunks.len() as f64,
            total_words: chunks.iter().map(|c| c.metadata.word_count).sum(),
            by_type,
        }
    }
}
