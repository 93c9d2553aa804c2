//! Filing download

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::LoaderConfig;
use crate::error::LoaderError;

/// Path a filing for `ticker` is saved under
///
/// Tickers may contain letters, digits, `.` and `-`.
pub fn local_filing_path(documents_dir: &Path, ticker: &str) -> Result<PathBuf, LoaderError> {
    let ticker = ticker.trim();
    let valid = !ticker.is_empty()
        && ticker.len() <= 10
        && ticker
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && !ticker.starts_with('.');
    if !valid {
        return Err(LoaderError::InvalidTicker(ticker.to_string()));
    }
    Ok(documents_dir.join(format!("{}_10k.html", ticker.to_uppercase())))
}

/// Fetches filings over HTTP
///
/// Each download is a single attempt bounded by the configured timeout.
pub struct FilingDownloader {
    client: reqwest::Client,
    documents_dir: PathBuf,
}

impl FilingDownloader {
    /// Create a downloader from configuration
    pub fn new(config: &LoaderConfig) -> Result<Self, LoaderError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| LoaderError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            documents_dir: config.documents_dir.clone(),
        })
    }

    /// Download the filing at `url` and save it for `ticker`
    pub async fn download(&self, ticker: &str, url: &str) -> Result<PathBuf, LoaderError> {
        let path = local_filing_path(&self.documents_dir, ticker)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoaderError::Http(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Filing download rejected");
            return Err(LoaderError::Http(format!("HTTP {} from {}", status, url)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoaderError::Http(format!("Failed to read body from {}: {}", url, e)))?;

        tokio::fs::create_dir_all(&self.documents_dir).await?;
        tokio::fs::write(&path, body.as_bytes()).await?;
        info!(ticker, path = %path.display(), bytes = body.len(), "Filing saved");
        Ok(path)
    }
}
