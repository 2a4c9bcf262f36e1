//! Error types for the chunking engine

use thiserror::Error;

/// Result type alias for chunking operations
pub type Result<T> = std::result::Result<T, Error>;

/// Chunking errors
#[derive(Debug, Error)]
pub enum Error {
    /// Options that would make a chunking loop stall or emit nothing
    #[error("Invalid chunking configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration file could not be interpreted
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create a configuration file error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error was caused by the caller's options rather than I/O
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_) | Self::Config(_) | Self::Toml(_))
    }
}
