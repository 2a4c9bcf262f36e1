//! Parallel chunking of independent documents
//!
//! Documents share no state, so they are distributed over a rayon pool.
//! Output order follows input order and each document keeps its own chunk
//! order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

use super::summary::ChunkingSummary;
use crate::chunking::create_chunks;
use crate::config::ProcessingConfig;
use crate::error::{Error, Result};
use crate::types::{ChunkingOptions, DocumentChunk};

/// Raw document text handed over by the ingestion caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Caller-assigned document ID
    pub id: String,
    /// Extracted plain text
    pub text: String,
}

impl SourceDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Chunks produced for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkedDocument {
    pub document_id: String,
    pub chunks: Vec<DocumentChunk>,
}

impl ChunkedDocument {
    /// Statistics over this document's chunks
    pub fn summary(&self) -> ChunkingSummary {
        ChunkingSummary::from_chunks(&self.chunks)
    }

    /// Metadata maps for the embedding pipeline, one per chunk
    pub fn embedding_records(&self) -> Vec<HashMap<String, serde_json::Value>> {
        self.chunks
            .iter()
            .map(|chunk| chunk.to_embedding_metadata(&self.document_id))
            .collect()
    }
}

/// Chunks batches of documents with a fixed set of options
pub struct BatchChunker {
    options: ChunkingOptions,
    pool: rayon::ThreadPool,
    parallelism: usize,
}

impl BatchChunker {
    /// Validate the options and build the worker pool
    pub fn new(options: ChunkingOptions, processing: &ProcessingConfig) -> Result<Self> {
        options.validate()?;
        processing.validate()?;

        let parallelism = processing.resolved_parallelism();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(parallelism)
            .thread_name(|i| format!("sim-chunking-{}", i))
            .build()
            .map_err(|e| Error::internal(format!("Failed to build chunking pool: {}", e)))?;

        tracing::info!(
            "Batch chunker configured: strategy={}, {} parallel documents",
            options.strategy,
            parallelism
        );

        Ok(Self {
            options,
            pool,
            parallelism,
        })
    }

    pub fn parallelism(&self) -> usize {
        self.parallelism
    }

    /// Chunk every document, preserving input order
    pub fn chunk_all(&self, documents: &[SourceDocument]) -> Result<Vec<ChunkedDocument>> {
        let started = Instant::now();

        let results: Result<Vec<ChunkedDocument>> = self.pool.install(|| {
            documents
                .par_iter()
                .map(|doc| {
                    let chunks = create_chunks(&doc.text, &self.options)?;
                    tracing::debug!("Document {} produced {} chunks", doc.id, chunks.len());
                    Ok(ChunkedDocument {
                        document_id: doc.id.clone(),
                        chunks,
                    })
                })
                .collect()
        });
        let results = results?;

        let total_chunks: usize = results.iter().map(|r| r.chunks.len()).sum();
        tracing::info!(
            "Chunked {} documents into {} chunks in {:?}",
            results.len(),
            total_chunks,
            started.elapsed()
        );

        Ok(results)
    }
}

/// Chunk a batch of documents in parallel
pub fn chunk_documents(
    documents: &[SourceDocument],
    options: &ChunkingOptions,
    processing: &ProcessingConfig,
) -> Result<Vec<ChunkedDocument>> {
    BatchChunker::new(options.clone(), processing)?.chunk_all(documents)
}
