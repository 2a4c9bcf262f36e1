//! Structure-aware chunking
//!
//! The document is partitioned into sections of consecutive lines with the
//! same structural type. Each section is chunked with the fixed windowing
//! algorithm using a size scaled for its type, and offsets are rebased onto
//! the whole document.

use super::classify::{classify_line, CODE_FENCE};
use super::fixed::fixed_windows;
use super::text::CharIndex;
use super::ChunkBuilder;
use crate::types::{ChunkType, ChunkingOptions, DocumentChunk};

/// Headings are never given windows larger than this
pub const MAX_HEADING_CHUNK_SIZE: usize = 300;

/// A run of lines sharing one type, as a trimmed char span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Section {
    pub kind: ChunkType,
    pub start: usize,
    pub end: usize,
}

impl Section {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Partition `text` into typed sections
///
/// Blank lines extend the current section, lines inside a fenced block are
/// code, and every heading line opens a section of its own.
pub(crate) fn partition_sections(text: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut in_code = false;
    let mut offset = 0usize;

    for line in text.split_inclusive('\n') {
        let line_len = line.chars().count();
        let trimmed = line.trim();
        let is_fence = trimmed.starts_with(CODE_FENCE);

        let kind = if in_code {
            if is_fence {
                in_code = false;
            }
            Some(ChunkType::Code)
        } else if is_fence {
            // A fence that also closes on the same line does not open a block
            in_code = trimmed.matches(CODE_FENCE).count() == 1;
            Some(ChunkType::Code)
        } else if trimmed.is_empty() {
            None
        } else {
            Some(classify_line(trimmed))
        };

        let line_end = offset + line_len;
        match kind {
            None => {
                if let Some(current) = sections.last_mut() {
                    current.end = line_end;
                }
            }
            Some(kind) => {
                let extends = sections
                    .last()
                    .is_some_and(|current| current.kind == kind && kind != ChunkType::Heading);
                if extends {
                    if let Some(current) = sections.last_mut() {
                        current.end = line_end;
                    }
                } else {
                    sections.push(Section {
                        kind,
                        start: offset,
                        end: line_end,
                    });
                }
            }
        }

        offset = line_end;
    }

    trim_sections(text, sections)
}

/// Shrink each section to its non-whitespace content
fn trim_sections(text: &str, sections: Vec<Section>) -> Vec<Section> {
    let index = CharIndex::new(text);

    sections
        .into_iter()
        .filter_map(|section| {
            let raw = index.slice(section.start, section.end);
            let leading = raw.chars().take_while(|c| c.is_whitespace()).count();
            let content = raw.trim().chars().count();
            (content > 0).then(|| Section {
                kind: section.kind,
                start: section.start + leading,
                end: section.start + leading + content,
            })
        })
        .collect()
}

/// Window size used for a section of the given type
///
/// Headings get half the base size capped at 300, but a heading section
/// shorter than 300 characters always fits in one window.
pub(crate) fn section_chunk_size(kind: ChunkType, base: usize, section_len: usize) -> usize {
    let size = match kind {
        ChunkType::Heading => {
            let size = (base / 2).min(MAX_HEADING_CHUNK_SIZE);
            if section_len < MAX_HEADING_CHUNK_SIZE {
                size.max(section_len)
            } else {
                size
            }
        }
        ChunkType::List => base.saturating_mul(4) / 5,
        ChunkType::Quote => base.saturating_mul(9) / 10,
        ChunkType::Code => base.saturating_mul(6) / 5,
        ChunkType::Content => base,
    };
    size.max(1)
}

/// Overlap scaled by the same factor as the section size
fn scaled_overlap(overlap: usize, base: usize, size: usize) -> usize {
    (overlap as u128 * size as u128 / base as u128) as usize
}

/// Chunk each section separately and renumber the results
pub(crate) fn chunk_adaptive(text: &str, options: &ChunkingOptions) -> Vec<DocumentChunk> {
    let index = CharIndex::new(text);
    let mut builder = ChunkBuilder::default();
    let base = options.max_chunk_size;

    for section in partition_sections(text) {
        let size = section_chunk_size(section.kind, base, section.len());
        let overlap = scaled_overlap(options.overlap_size, base, size);
        let section_index = CharIndex::new(index.slice(section.start, section.end));

        for (start, end) in fixed_windows(&section_index, size, overlap, options.sentence_boundary) {
            builder.push(
                section_index.slice(start, end),
                section.start + start,
                section.start + end,
                section.kind,
            );
        }
    }

    builder.finish()
}
