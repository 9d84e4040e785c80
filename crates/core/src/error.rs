//! Storage error model.

use thiserror::Error;

/// Result type returned by key-value adapters.
pub type StorageResult<T> = Result<T, StorageError>;

/// Failure of the underlying key-value medium.
///
/// Only writes surface this; reads degrade to "absent" instead.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The medium could not be read or written (file system, lock poisoning).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A value could not be encoded to or decoded from JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
