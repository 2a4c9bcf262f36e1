//! Core types for the chunking engine

pub mod chunk;
pub mod options;

pub use chunk::{ChunkMetadata, ChunkType, DocumentChunk};
pub use options::{ChunkingOptions, ChunkingStrategy};
