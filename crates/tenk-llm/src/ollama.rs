//! Ollama Provider Implementation
//!
//! Talks to a local Ollama server through its chat API.
//!
//! # Features
//!
//! - Async HTTP communication with Ollama API
//! - Configurable endpoint, model, and temperature
//! - Bounded retry with exponential backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use tenk_llm::OllamaProvider;
//!
//! let provider = OllamaProvider::new("http://localhost:11434", "llama3").unwrap();
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tenk_domain::traits::NarrativeGenerator;
use tracing::{debug, warn};

use crate::config::LlmConfig;
use crate::{backoff_delay, LlmError};

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default timeout for LLM requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Ollama API provider for local LLM inference
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatOptions {
    temperature: f32,
}

/// Request body for Ollama chat API
#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    options: ChatOptions,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Response from Ollama chat API
#[derive(Deserialize)]
struct OllamaChatResponse {
    message: ResponseMessage,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "llama3", "mistral")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        Self::build(
            endpoint.into(),
            model.into(),
            0.3,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            DEFAULT_MAX_RETRIES,
        )
    }

    /// Create a provider from configuration
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        Self::build(
            config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            config.model.clone(),
            config.temperature,
            config.timeout(),
            config.max_retries,
        )
    }

    fn build(
        endpoint: String,
        model: String,
        temperature: f32,
        timeout: Duration,
        max_retries: u32,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model,
            temperature,
            client,
            max_retries,
        })
    }

    /// Set the number of retries after the first attempt
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// The model this provider asks for
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/chat", self.endpoint);
        let request_body = OllamaChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            stream: false,
            options: ChatOptions {
                temperature: self.temperature,
            },
        };

        let mut attempt = 0;
        loop {
            let error = match self.client.post(&url).json(&request_body).send().await {
                Ok(response) if response.status().is_success() => {
                    return response
                        .json::<OllamaChatResponse>()
                        .await
                        .map(|body| body.message.content)
                        .map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                        });
                }
                Ok(response) if response.status() == reqwest::StatusCode::NOT_FOUND => {
                    return Err(LlmError::ModelNotAvailable(self.model.clone()));
                }
                Ok(response) => {
                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    LlmError::Communication(format!("HTTP {}: {}", status, error_text))
                }
                Err(e) => LlmError::Communication(format!("Request failed: {}", e)),
            };

            if attempt >= self.max_retries {
                return Err(error);
            }
            attempt += 1;
            warn!(attempt, error = %error, "Ollama request failed; retrying");
            tokio::time::sleep(backoff_delay(attempt)).await;
        }
    }
}

#[async_trait]
impl NarrativeGenerator for OllamaProvider {
    type Error = LlmError;

    async fn generate(&self, system: &str, user: &str) -> Result<String, Self::Error> {
        debug!(model = %self.model, prompt_chars = user.len(), "Requesting Ollama completion");
        self.chat(system, user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_provider_creation() {
        let provider = OllamaProvider::new("http://localhost:11434/", "llama3").unwrap();
        assert_eq!(provider.endpoint, "http://localhost:11434");
        assert_eq!(provider.model(), "llama3");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_ollama_provider_from_config() {
        let config = LlmConfig {
            model: "mistral".to_string(),
            max_retries: 5,
            ..LlmConfig::default()
        };
        let provider = OllamaProvider::from_config(&config).unwrap();
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model(), "mistral");
        assert_eq!(provider.max_retries, 5);
    }

    #[test]
    fn test_ollama_provider_with_max_retries() {
        let provider = OllamaProvider::new(DEFAULT_ENDPOINT, "llama3")
            .unwrap()
            .with_max_retries(0);
        assert_eq!(provider.max_retries, 0);
    }

    // Requires a running Ollama server
    #[tokio::test]
    #[ignore]
    async fn test_ollama_generate_integration() {
        let provider = OllamaProvider::new(DEFAULT_ENDPOINT, "llama3").unwrap();
        let response = provider
            .generate("Answer in one word.", "Say hello")
            .await
            .unwrap();
        assert!(!response.is_empty());
    }

    #[tokio::test]
    async fn test_ollama_error_handling() {
        // Nothing listens on port 9
        let provider = OllamaProvider::new("http://127.0.0.1:9", "llama3")
            .unwrap()
            .with_max_retries(0);

        let result = provider.generate("system", "test").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
