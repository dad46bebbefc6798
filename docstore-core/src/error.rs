//! Error types and result types for document store operations.
//!
//! Lookups report absence through `Option` and searches cannot fail. The only
//! fallible paths are the `Reject` unknown-id policy and JSON interchange.
//! Use [`DocumentStoreResult<T>`] as the return type for fallible operations.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a document store.
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// Serialization/deserialization error when converting documents to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// A save referenced an id the store does not hold and the store is
    /// configured with [`UnknownIdPolicy::Reject`](crate::config::UnknownIdPolicy::Reject).
    #[error("Document not found: {0}")]
    DocumentNotFound(String),
}

/// A specialized `Result` type for document store operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

impl From<SerdeJsonError> for DocumentStoreError {
    fn from(err: SerdeJsonError) -> Self {
        DocumentStoreError::Serialization(err.to_string())
    }
}
