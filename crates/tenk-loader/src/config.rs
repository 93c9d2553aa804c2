//! Loader configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::LoaderError;

/// Where filings are kept and how they are fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Directory holding downloaded filings
    pub documents_dir: PathBuf,

    /// User-Agent sent to EDGAR; SEC asks for a contact address
    pub user_agent: String,

    /// Download timeout (seconds)
    pub timeout_secs: u64,

    /// Longest section kept (characters)
    pub max_section_chars: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            documents_dir: PathBuf::from("data/10k_filings"),
            user_agent: "tenk/0.1 (admin@example.com)".to_string(),
            timeout_secs: 30,
            max_section_chars: 50_000,
        }
    }
}

impl LoaderConfig {
    /// Get the download timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LoaderError> {
        if self.timeout_secs == 0 {
            return Err(LoaderError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.max_section_chars == 0 {
            return Err(LoaderError::Config(
                "max_section_chars must be greater than 0".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(LoaderError::Config("user_agent must not be empty".to_string()));
        }
        Ok(())
    }
}
