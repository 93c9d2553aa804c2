//! Error types for the loader

use thiserror::Error;

/// Errors raised while fetching or reading filings
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The filing could not be downloaded
    #[error("HTTP error: {0}")]
    Http(String),

    /// Local file access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ticker cannot be used in a file name
    #[error("Invalid ticker: {0:?}")]
    InvalidTicker(String),

    /// Invalid loader configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
