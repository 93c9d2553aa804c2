//! Error types for the Extractor

use thiserror::Error;

/// Errors raised while setting up an extractor
///
/// Extraction itself is infallible; these only come from configuration.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
