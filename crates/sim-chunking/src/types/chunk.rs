//! Chunk records produced for the embedding pipeline

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Structural type of a chunk, taken from its leading line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkType {
    /// Plain prose
    #[default]
    Content,
    /// Markdown heading (`#` to `######`)
    Heading,
    /// Bulleted or numbered list
    List,
    /// Block quote
    Quote,
    /// Fenced code block
    Code,
}

impl ChunkType {
    /// Name used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Heading => "heading",
            Self::List => "list",
            Self::Quote => "quote",
            Self::Code => "code",
        }
    }
}

impl std::fmt::Display for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lightweight statistics attached to every chunk
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Whitespace-delimited tokens
    pub word_count: usize,
    /// Non-empty segments between `.`, `!` and `?` runs
    pub sentence_count: usize,
    /// Up to five most frequent words longer than three characters
    pub key_phrases: Vec<String>,
}

/// A chunk of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChunk {
    /// Trimmed chunk content
    pub text: String,
    /// Zero-based position within the document's chunk sequence
    pub index: usize,
    /// Character offsets into the source text (best effort for semantic/adaptive)
    pub start_char: usize,
    pub end_char: usize,
    /// Structural type
    #[serde(rename = "type")]
    pub chunk_type: ChunkType,
    pub metadata: ChunkMetadata,
}

impl DocumentChunk {
    /// Length of the chunk text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Flatten into the metadata map stored next to the chunk's embedding
    pub fn to_embedding_metadata(&self, document_id: &str) -> HashMap<String, serde_json::Value> {
        let mut meta = HashMap::new();
        meta.insert("document_id".to_string(), serde_json::json!(document_id));
        meta.insert("chunk_index".to_string(), serde_json::json!(self.index));
        meta.insert("char_start".to_string(), serde_json::json!(self.start_char));
        meta.insert("char_end".to_string(), serde_json::json!(self.end_char));
        meta.insert("chunk_type".to_string(), serde_json::json!(self.chunk_type));
        meta.insert("word_count".to_string(), serde_json::json!(self.metadata.word_count));
        meta.insert("sentence_count".to_string(), serde_json::json!(self.metadata.sentence_count));
        meta.insert("key_phrases".to_string(), serde_json::json!(self.metadata.key_phrases));
        meta.insert("content".to_string(), serde_json::json!(self.text));
        meta
    }
}
