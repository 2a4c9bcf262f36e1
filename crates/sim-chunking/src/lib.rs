//! sim-chunking: document chunking for SIM AI knowledge ingestion
//!
//! Splits extracted document text into chunks ready for embedding. Four
//! strategies are available (fixed, sliding, semantic and adaptive) and every
//! chunk is annotated with its structural type, word and sentence counts and
//! its most frequent words.
//!
//! ```
//! use sim_chunking::{create_chunks, ChunkType, ChunkingOptions, ChunkingStrategy};
//!
//! let options = ChunkingOptions::new(ChunkingStrategy::Adaptive, 1000, 200);
//! let chunks = create_chunks("# Title\n\nSome content here.", &options).unwrap();
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].chunk_type, ChunkType::Heading);
//! assert_eq!(chunks[1].chunk_type, ChunkType::Content);
//! ```
//!
//! Chunking is a pure function of its input. Many documents can be chunked in
//! parallel with [`processing::chunk_documents`].

pub mod chunking;
pub mod config;
pub mod error;
pub mod processing;
pub mod types;

pub use chunking::{classify_chunk, create_chunks, extract_overlap, generate_metadata};
pub use config::{ProcessingConfig, SimChunkingConfig};
pub use error::{Error, Result};
pub use processing::{chunk_documents, ChunkedDocument, ChunkingSummary, SourceDocument};
pub use types::{ChunkMetadata, ChunkType, ChunkingOptions, ChunkingStrategy, DocumentChunk};
