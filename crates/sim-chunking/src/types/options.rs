//! Chunking configuration supplied by the ingestion caller

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Minimum chunk length kept by the sliding strategy when none is configured
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 50;

/// Segmentation algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ChunkingStrategy {
    /// Fixed-size windows, optionally snapped back to a sentence end
    #[default]
    Fixed,
    /// Fixed step windows, optionally extended forward to a sentence end
    Sliding,
    /// Whole paragraphs packed up to the size limit
    Semantic,
    /// Structure-aware sections, each chunked with a type-specific size
    Adaptive,
}

impl ChunkingStrategy {
    /// All recognized strategies
    pub const ALL: [ChunkingStrategy; 4] = [
        ChunkingStrategy::Fixed,
        ChunkingStrategy::Sliding,
        ChunkingStrategy::Semantic,
        ChunkingStrategy::Adaptive,
    ];

    /// Name used in configuration and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Sliding => "sliding",
            Self::Semantic => "semantic",
            Self::Adaptive => "adaptive",
        }
    }

    /// Parse a strategy name, falling back to `Fixed` for anything unrecognized
    pub fn parse_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown chunking strategy '{}', falling back to fixed", name);
            Self::Fixed
        })
    }
}

impl FromStr for ChunkingStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "sliding" => Ok(Self::Sliding),
            "semantic" => Ok(Self::Semantic),
            "adaptive" => Ok(Self::Adaptive),
            other => Err(Error::invalid_configuration(format!(
                "unknown chunking strategy '{}' (expected fixed, sliding, semantic or adaptive)",
                other
            ))),
        }
    }
}

impl From<String> for ChunkingStrategy {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

impl std::fmt::Display for ChunkingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options controlling how a document is split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingOptions {
    /// Segmentation algorithm
    #[serde(default)]
    pub strategy: ChunkingStrategy,
    /// Maximum chunk length in characters (soft limit)
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,
    /// Characters (or whole sentences, for semantic) repeated from the previous chunk
    #[serde(default = "default_overlap_size")]
    pub overlap_size: usize,
    /// Chunks shorter than this are dropped (sliding strategy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_chunk_size: Option<usize>,
    /// Snap chunk ends to a `.` when one is close enough
    #[serde(default)]
    pub sentence_boundary: bool,
    /// Respect blank-line paragraph breaks
    #[serde(default = "default_true")]
    pub paragraph_boundary: bool,
    /// Keep headings, lists, quotes and code blocks apart
    #[serde(default = "default_true")]
    pub preserve_structure: bool,
}

fn default_max_chunk_size() -> usize { 1000 }
fn default_overlap_size() -> usize { 200 }
fn default_true() -> bool { true }

impl Default for ChunkingOptions {
    fn default() -> Self {
        Self {
            strategy: ChunkingStrategy::Fixed,
            max_chunk_size: 1000,
            overlap_size: 200,
            min_chunk_size: None,
            sentence_boundary: false,
            paragraph_boundary: true,
            preserve_structure: true,
        }
    }
}

impl ChunkingOptions {
    /// Create options for a strategy with the given size and overlap
    pub fn new(strategy: ChunkingStrategy, max_chunk_size: usize, overlap_size: usize) -> Self {
        Self {
            strategy,
            max_chunk_size,
            overlap_size,
            ..Default::default()
        }
    }

    /// Set the minimum chunk size
    pub fn with_min_chunk_size(mut self, min_chunk_size: usize) -> Self {
        self.min_chunk_size = Some(min_chunk_size);
        self
    }

    /// Enable or disable sentence boundary snapping
    pub fn with_sentence_boundary(mut self, enabled: bool) -> Self {
        self.sentence_boundary = enabled;
        self
    }

    /// Validate options before any chunking work is done
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(Error::invalid_configuration(
                "max_chunk_size must be greater than 0",
            ));
        }

        if self.overlap_size >= self.max_chunk_size {
            return Err(Error::invalid_configuration(format!(
                "overlap_size ({}) must be less than max_chunk_size ({})",
                self.overlap_size, self.max_chunk_size
            )));
        }

        if self.min_chunk_size == Some(0) {
            return Err(Error::invalid_configuration(
                "min_chunk_size must be greater than 0 when set",
            ));
        }

        Ok(())
    }

    /// Minimum chunk length applied by the sliding strategy
    ///
    /// Without an explicit value this is 50 characters, capped at half of
    /// `max_chunk_size` so small windows are not all discarded.
    pub fn effective_min_chunk_size(&self) -> usize {
        self.min_chunk_size
            .unwrap_or_else(|| DEFAULT_MIN_CHUNK_SIZE.min(self.max_chunk_size / 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parse() {
        assert_eq!("semantic".parse::<ChunkingStrategy>().unwrap(), ChunkingStrategy::Semantic);
        assert_eq!(" Adaptive ".parse::<ChunkingStrategy>().unwrap(), ChunkingStrategy::Adaptive);
        assert!("recursive".parse::<ChunkingStrategy>().is_err());
    }

    #[test]
    fn test_strategy_lossy_fallback() {
        assert_eq!(ChunkingStrategy::parse_lossy("recursive"), ChunkingStrategy::Fixed);
        assert_eq!(ChunkingStrategy::parse_lossy("sliding"), ChunkingStrategy::Sliding);
    }

    #[test]
    fn test_strategy_serde() {
        let strategy: ChunkingStrategy = serde_json::from_str("\"semantic\"").unwrap();
        assert_eq!(strategy, ChunkingStrategy::Semantic);

        let strategy: ChunkingStrategy = serde_json::from_str("\"token\"").unwrap();
        assert_eq!(strategy, ChunkingStrategy::Fixed);

        assert_eq!(serde_json::to_string(&ChunkingStrategy::Adaptive).unwrap(), "\"adaptive\"");
    }

    #[test]
    fn test_options_validation() {
        let mut options = ChunkingOptions::default();
        assert!(options.validate().is_ok());

        options.max_chunk_size = 0;
        assert!(options.validate().is_err());

        options.max_chunk_size = 100;
        options.overlap_size = 100;
        assert!(matches!(options.validate(), Err(Error::InvalidConfiguration(_))));

        options.overlap_size = 99;
        assert!(options.validate().is_ok());

        options.min_chunk_size = Some(0);
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_options_defaults_from_partial_json() {
        let options: ChunkingOptions =
            serde_json::from_str(r#"{"strategy": "sliding", "max_chunk_size": 400}"#).unwrap();
        assert_eq!(options.strategy, ChunkingStrategy::Sliding);
        assert_eq!(options.max_chunk_size, 400);
        assert_eq!(options.overlap_size, 200);
        assert!(!options.sentence_boundary);
        assert!(options.preserve_structure);
    }

    #[test]
    fn test_effective_min_chunk_size() {
        assert_eq!(ChunkingOptions::default().effective_min_chunk_size(), 50);
        assert_eq!(ChunkingOptions::new(ChunkingStrategy::Sliding, 10, 0).effective_min_chunk_size(), 5);
        assert_eq!(
            ChunkingOptions::new(ChunkingStrategy::Sliding, 10, 0)
                .with_min_chunk_size(8)
                .effective_min_chunk_size(),
            8
        );
    }
}
