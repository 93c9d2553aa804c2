//! Provider selection and connection settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::LlmError;

/// Which backend generates narrative text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Deterministic canned responses
    Mock,
    /// Local Ollama server
    Ollama,
    /// OpenAI-compatible chat completions
    #[serde(rename = "openai")]
    OpenAi,
}

/// Configuration for the narrative generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Backend to use
    pub provider: ProviderKind,

    /// Model name passed to the backend
    pub model: String,

    /// Base URL; defaults per provider when absent
    pub endpoint: Option<String>,

    /// Sampling temperature
    pub temperature: f32,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    /// Retries after the first failed attempt
    pub max_retries: u32,

    /// Environment variable holding the API key (OpenAI only)
    pub api_key_env: String,

    /// Canned response for the mock provider
    pub mock_response: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::OpenAi,
            model: "gpt-4-turbo-preview".to_string(),
            endpoint: None,
            temperature: 0.3,
            timeout_secs: 60,
            max_retries: 2,
            api_key_env: "OPENAI_API_KEY".to_string(),
            mock_response: "Mock narrative".to_string(),
        }
    }
}

impl LlmConfig {
    /// Mock provider returning `response` for every prompt
    pub fn mock(response: impl Into<String>) -> Self {
        Self {
            provider: ProviderKind::Mock,
            mock_response: response.into(),
            ..Self::default()
        }
    }

    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.model.trim().is_empty() {
            return Err(LlmError::Configuration("model must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(LlmError::Configuration(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(LlmError::Configuration(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        if self.provider == ProviderKind::OpenAi && self.api_key_env.trim().is_empty() {
            return Err(LlmError::Configuration(
                "api_key_env must name an environment variable".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LlmConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_provider_names_in_toml() {
        let config: LlmConfig = toml::from_str("provider = \"openai\"\nmodel = \"gpt-4o\"").unwrap();
        assert_eq!(config.provider, ProviderKind::OpenAi);
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.max_retries, 2);

        let config: LlmConfig = toml::from_str("provider = \"ollama\"").unwrap();
        assert_eq!(config.provider, ProviderKind::Ollama);

        assert!(toml::from_str::<LlmConfig>("provider = \"bard\"").is_err());
    }

    #[test]
    fn test_invalid_values() {
        let mut config = LlmConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = LlmConfig::default();
        config.temperature = 3.5;
        assert!(config.validate().is_err());

        let mut config = LlmConfig::default();
        config.model = " ".to_string();
        assert!(config.validate().is_err());
    }
}
