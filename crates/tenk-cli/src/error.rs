//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file failed to parse or validate
    #[error(transparent)]
    AppConfig(#[from] tenk_router::config::ConfigError),

    /// Narrative generator setup failed
    #[error("LLM error: {0}")]
    Llm(#[from] tenk_llm::LlmError),

    /// Filing download or parsing failed
    #[error("Document error: {0}")]
    Loader(#[from] tenk_loader::LoaderError),

    /// Indexing failed
    #[error("Index error: {0}")]
    Store(#[from] tenk_store::StoreError),

    /// Drafting failed
    #[error("Drafting error: {0}")]
    Drafter(#[from] tenk_drafter::DrafterError),

    /// Extractor configuration rejected
    #[error("Extractor error: {0}")]
    Extractor(#[from] tenk_extractor::ExtractorError),

    /// HTTP server failed
    #[error("Server error: {0}")]
    Server(#[from] tenk_router::RouterError),

    /// Line editor failed
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No filing to work from
    #[error("Document not found: {0}")]
    NotFound(String),
}
