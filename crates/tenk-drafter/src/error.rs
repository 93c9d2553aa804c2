//! Error types for drafting

use thiserror::Error;

/// Boxed upstream error
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced while drafting a section
#[derive(Error, Debug)]
pub enum DrafterError {
    /// The retrieval service failed
    #[error("Retrieval failed: {0}")]
    Retrieval(#[source] BoxError),

    /// The narrative generator failed
    #[error("Generation failed: {0}")]
    Generation(#[source] BoxError),
}

impl DrafterError {
    /// Wrap a retrieval failure
    pub fn retrieval(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        DrafterError::Retrieval(Box::new(error))
    }

    /// Wrap a generation failure
    pub fn generation(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        DrafterError::Generation(Box::new(error))
    }
}
