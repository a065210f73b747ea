//! # Reader Error Types
//!
//! Typed error handling for provider operations.
//! All `ReaderClient` calls return `Result<T, ReaderError>`.

use thiserror::Error;

/// Core error type for provider operations
#[derive(Debug, Error)]
pub enum ReaderError {
    /// Configuration errors (missing keys, invalid values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The provider answered with a non-success status
    #[error("Provider error [{status}]: {message}")]
    Provider { status: u16, message: String },

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Provider response could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ReaderError {
    /// Status code reported by the provider, if the provider answered at all
    pub fn provider_status(&self) -> Option<u16> {
        match self {
            ReaderError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for provider operations
pub type ReaderResult<T> = Result<T, ReaderError>;
