//! Configuration for chunking runs
//!
//! Loaded from TOML:
//!
//! ```toml
//! [chunking]
//! strategy = "semantic"
//! max_chunk_size = 800
//! overlap_size = 120
//!
//! [processing]
//! parallelism = 4
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::ChunkingOptions;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimChunkingConfig {
    /// Options passed to every chunking call
    #[serde(default)]
    pub chunking: ChunkingOptions,
    /// Batch processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,
}

impl SimChunkingConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;

        tracing::info!(
            "Loaded chunking configuration from {}: strategy={}, max_chunk_size={}, overlap_size={}",
            path.display(),
            config.chunking.strategy,
            config.chunking.max_chunk_size,
            config.chunking.overlap_size
        );

        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.chunking.validate()?;
        self.processing.validate()
    }
}

/// Batch processing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Number of documents chunked in parallel (default: CPU count)
    #[serde(default)]
    pub parallelism: Option<usize>,
}

impl ProcessingConfig {
    /// Worker count to use
    pub fn resolved_parallelism(&self) -> usize {
        self.parallelism.unwrap_or_else(num_cpus::get).max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.parallelism == Some(0) {
            return Err(Error::config("processing.parallelism must be greater than 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChunkingStrategy;

    #[test]
    fn test_parse_full_config() {
        let config = SimChunkingConfig::from_toml_str(
            r#"
            [chunking]
            strategy = "semantic"
            max_chunk_size = 800
            overlap_size = 120
            sentence_boundary = true

            [processing]
            parallelism = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.chunking.strategy, ChunkingStrategy::Semantic);
        assert_eq!(config.chunking.max_chunk_size, 800);
        assert_eq!(config.chunking.overlap_size, 120);
        assert!(config.chunking.sentence_boundary);
        assert_eq!(config.processing.resolved_parallelism(), 4);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SimChunkingConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimChunkingConfig::default());
        assert!(config.processing.resolved_parallelism() >= 1);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = SimChunkingConfig::from_toml_str(
            "[chunking]\nmax_chunk_size = 100\noverlap_size = 150\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        let err = SimChunkingConfig::from_toml_str("[processing]\nparallelism = 0\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = SimChunkingConfig::from_toml_str("[chunking]\nmax_chunk_size = \"big\"\n")
            .unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_unknown_strategy_falls_back() {
        let config =
            SimChunkingConfig::from_toml_str("[chunking]\nstrategy = \"markdown\"\n").unwrap();
        assert_eq!(config.chunking.strategy, ChunkingStrategy::Fixed);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimChunkingConfig::load("/nonexistent/sim-chunking.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
