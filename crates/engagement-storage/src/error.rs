//! Error types for the storage layer.
//!
//! Storage errors stop at the engine boundary: the engine absorbs them
//! into default state (reads) or a logged no-op (writes), so nothing
//! here is ever surfaced to application callers.

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A filesystem read or write failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A key contains characters that cannot form a file name.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}
