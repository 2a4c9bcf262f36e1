//! Batch chunking of many documents

mod batch;
mod summary;

pub use batch::{chunk_documents, BatchChunker, ChunkedDocument, SourceDocument};
pub use summary::ChunkingSummary;
