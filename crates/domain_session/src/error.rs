//! Session domain errors

use thiserror::Error;

/// Failure in the key-value storage backing the session
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    pub fn backend(message: impl Into<String>) -> Self {
        StorageError::Backend(message.into())
    }
}

/// Errors that can occur in the session domain
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Session record is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
}
