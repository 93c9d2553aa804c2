//! Error types for the retrieval layer

use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::vector_index::VectorIndexError;

/// Errors that can occur while indexing or searching passages
#[derive(Error, Debug)]
pub enum StoreError {
    /// Text could not be embedded
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Vector index failure
    #[error("Vector index error: {0}")]
    Index(#[from] VectorIndexError),

    /// Invalid index configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
