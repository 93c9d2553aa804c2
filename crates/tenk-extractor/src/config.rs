//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

use crate::ExtractorError;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Inputs longer than this many characters are truncated before parsing
    pub max_input_length: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_input_length: 200_000,
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_input_length == 0 {
            return Err(ExtractorError::Config(
                "max_input_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
