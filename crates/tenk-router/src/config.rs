//! Configuration file parsing for the HTTP shell.
//!
//! One TOML file aggregates the settings of every collaborator crate plus
//! the bind address and the company directory.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tenk_drafter::DrafterConfig;
use tenk_extractor::ExtractorConfig;
use tenk_llm::LlmConfig;
use tenk_loader::LoaderConfig;
use tenk_store::IndexConfig;
use thiserror::Error;

/// Router configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A section failed validation
    #[error("Invalid [{section}] configuration: {message}")]
    Invalid {
        /// TOML section name
        section: &'static str,
        /// What was wrong
        message: String,
    },
}

/// Bind settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    pub bind_address: String,

    /// Bind port
    pub bind_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            bind_port: 8000,
        }
    }
}

/// Application configuration loaded from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// HTTP bind settings
    pub server: ServerConfig,

    /// Narrative generator
    pub llm: LlmConfig,

    /// Passage index
    pub index: IndexConfig,

    /// Filing download and parsing
    pub loader: LoaderConfig,

    /// Retrieval depth for drafting
    pub drafter: DrafterConfig,

    /// Financial data parsing limits
    pub extractor: ExtractorConfig,

    /// Ticker to company display name
    #[serde(default = "default_companies")]
    pub companies: BTreeMap<String, String>,
}

fn default_companies() -> BTreeMap<String, String> {
    [
        ("NVDA", "NVIDIA Corporation"),
        ("MSFT", "Microsoft Corporation"),
        ("KO", "The Coca-Cola Company"),
        ("NKE", "Nike, Inc."),
        ("AMZN", "Amazon.com, Inc."),
        ("DASH", "DoorDash, Inc."),
        ("TJX", "The TJX Companies, Inc."),
        ("DRI", "Darden Restaurants, Inc."),
        ("UBER", "UBER TECHNOLOGIES, INC."),
    ]
    .into_iter()
    .map(|(ticker, name)| (ticker.to_string(), name.to_string()))
    .collect()
}

impl RouterConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: RouterConfig = toml::from_str(contents)?;
        if config.companies.is_empty() {
            config.companies = default_companies();
        }
        config.validate()?;
        Ok(config)
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(section: &'static str, e: impl ToString) -> ConfigError {
            ConfigError::Invalid {
                section,
                message: e.to_string(),
            }
        }

        if self.server.bind_port == 0 {
            return Err(invalid("server", "bind_port must be greater than 0"));
        }
        self.llm.validate().map_err(|e| invalid("llm", e))?;
        self.index.validate().map_err(|e| invalid("index", e))?;
        self.loader.validate().map_err(|e| invalid("loader", e))?;
        self.drafter.validate().map_err(|e| invalid("drafter", e))?;
        self.extractor.validate().map_err(|e| invalid("extractor", e))?;
        Ok(())
    }

    /// Create a configuration for tests: mock generator, defaults elsewhere
    pub fn default_test_config() -> Self {
        Self {
            server: ServerConfig {
                bind_address: "127.0.0.1".to_string(),
                bind_port: 8000,
            },
            llm: LlmConfig::mock("Mock narrative"),
            companies: default_companies(),
            ..Self::default()
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.bind_port)
    }

    /// Display name for a ticker, if configured
    pub fn company_name(&self, ticker: &str) -> Option<&str> {
        self.companies
            .get(&ticker.to_uppercase())
            .map(String::as_str)
    }
}
