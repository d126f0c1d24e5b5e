//! Custom error types for the common library
//!
//! This module defines the errors raised by the persistence store.

use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for document store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error occurred while reading or writing the document file
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document exists but could not be parsed
    #[error("Store document at '{}' is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory document could not be serialized
    #[error("Store serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
