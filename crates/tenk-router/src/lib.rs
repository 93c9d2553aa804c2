//! Tenk Router
//!
//! HTTP shell over the drafting pipeline. Each processed filing gets its own
//! session (passage index + drafter) held in router state, keyed by ticker.

#![warn(missing_docs)]

pub mod config;
pub mod conversions;
pub mod handlers;
pub mod registry;

use config::RouterConfig;
use handlers::{create_router, AppState};
use registry::SessionRegistry;
use std::sync::Arc;
use tenk_extractor::{ExtractorError, FinancialDataExtractor};
use tenk_llm::{LlmClient, LlmError};
use tenk_loader::{FilingDownloader, HtmlFilingLoader, LoaderError};
use tokio::net::TcpListener;
use tracing::info;

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Narrative generator could not be created
    #[error("LLM setup failed: {0}")]
    Llm(#[from] LlmError),

    /// Loader could not be created
    #[error("Loader setup failed: {0}")]
    Loader(#[from] LoaderError),

    /// Extractor could not be created
    #[error("Extractor setup failed: {0}")]
    Extractor(#[from] ExtractorError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

impl AppState {
    /// Build shared state from configuration
    pub fn from_config(config: RouterConfig) -> Result<Self, RouterError> {
        config.validate()?;

        Ok(Self {
            generator: Arc::new(LlmClient::from_config(&config.llm)?),
            sessions: Arc::new(SessionRegistry::new()),
            loader: Arc::new(HtmlFilingLoader::new(&config.loader)),
            downloader: Arc::new(FilingDownloader::new(&config.loader)?),
            extractor: Arc::new(FinancialDataExtractor::new(config.extractor.clone())?),
            config: Arc::new(config),
        })
    }
}

/// Install the stderr tracing subscriber (`RUST_LOG`, default `info`)
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Start the HTTP server
///
/// Builds application state from `config`, binds the listener, and serves
/// until the process is stopped.
pub async fn start_server(config: RouterConfig) -> Result<(), RouterError> {
    info!("Starting Tenk Router");
    info!("Bind address: {}", config.bind_addr());
    info!("LLM provider: {:?} ({})", config.llm.provider, config.llm.model);
    info!("Filings directory: {}", config.loader.documents_dir.display());

    let bind_addr = config.bind_addr();
    let state = AppState::from_config(config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Router listening on {}", bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_test_config() {
        let state = AppState::from_config(RouterConfig::default_test_config()).unwrap();
        assert!(state.sessions.is_empty());
        assert_eq!(state.config.companies.len(), 9);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = RouterConfig::default_test_config();
        config.drafter.top_k = 0;
        assert!(matches!(
            AppState::from_config(config),
            Err(RouterError::Config(_))
        ));
    }
}
