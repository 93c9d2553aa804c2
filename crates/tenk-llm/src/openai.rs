//! OpenAI-compatible chat completions provider

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tenk_domain::traits::NarrativeGenerator;
use tracing::{debug, warn};

use crate::config::LlmConfig;
use crate::{backoff_delay, LlmError};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat completions client authenticated with a bearer key
pub struct OpenAiProvider {
    base_url: String,
    model: String,
    api_key: String,
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
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Outcome of one request attempt
enum Attempt {
    Done(Result<String, LlmError>),
    Retry(LlmError),
}

impl OpenAiProvider {
    /// Create a provider with an explicit key
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
            temperature: 0.3,
            client,
            max_retries: 2,
        })
    }

    /// Create a provider from configuration, reading the key from the environment
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                LlmError::Configuration(format!(
                    "environment variable {} is not set",
                    config.api_key_env
                ))
            })?;

        let base_url = config
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut provider = Self::new(base_url, config.model.clone(), api_key, config.timeout())?;
        provider.temperature = config.temperature;
        provider.max_retries = config.max_retries;
        Ok(provider)
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
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

    async fn attempt(&self, body: &ChatCompletionRequest<'_>) -> Attempt {
        let url = format!("{}/chat/completions", self.base_url);
        let response = match self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Attempt::Retry(LlmError::Communication(format!("Request failed: {}", e))),
        };

        let status = response.status();
        if status.is_success() {
            return Attempt::Done(parse_completion(response).await);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Attempt::Retry(LlmError::RateLimitExceeded);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let error = LlmError::Communication(format!("HTTP {}: {}", status, error_text));
        if status.is_server_error() {
            Attempt::Retry(error)
        } else if status == StatusCode::NOT_FOUND {
            Attempt::Done(Err(LlmError::ModelNotAvailable(self.model.clone())))
        } else {
            Attempt::Done(Err(error))
        }
    }
}

async fn parse_completion(response: reqwest::Response) -> Result<String, LlmError> {
    let body: ChatCompletionResponse = response
        .json()
        .await
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LlmError::InvalidResponse("Response contained no message".to_string()))
}

#[async_trait]
impl NarrativeGenerator for OpenAiProvider {
    type Error = LlmError;

    async fn generate(&self, system: &str, user: &str) -> Result<String, Self::Error> {
        debug!(model = %self.model, prompt_chars = user.len(), "Requesting chat completion");
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            temperature: self.temperature,
        };

        let mut attempt = 0;
        loop {
            let error = match self.attempt(&body).await {
                Attempt::Done(result) => return result,
                Attempt::Retry(error) => error,
            };
            if attempt >= self.max_retries {
                return Err(error);
            }
            attempt += 1;
            warn!(attempt, error = %error, "Chat completion failed; retrying");
            tokio::time::sleep(backoff_delay(attempt)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_key() {
        let config = LlmConfig {
            api_key_env: "TENK_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..LlmConfig::default()
        };
        assert!(matches!(
            OpenAiProvider::from_config(&config),
            Err(LlmError::Configuration(_))
        ));
    }

    #[test]
    fn test_builder_settings() {
        let provider = OpenAiProvider::new(
            "https://example.test/v1/",
            "gpt-4o-mini",
            "sk-test",
            Duration::from_secs(5),
        )
        .unwrap()
        .with_temperature(0.7)
        .with_max_retries(0);

        assert_eq!(provider.base_url, "https://example.test/v1");
        assert_eq!(provider.model(), "gpt-4o-mini");
        assert_eq!(provider.temperature, 0.7);
        assert_eq!(provider.max_retries, 0);
    }

    #[test]
    fn test_parse_completion_body() {
        let body: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Drafted text"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            body.choices[0].message.content.as_deref(),
            Some("Drafted text")
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_communication_error() {
        let provider = OpenAiProvider::new("http://127.0.0.1:9", "gpt", "sk-test", Duration::from_secs(2))
            .unwrap()
            .with_max_retries(0);
        let result = provider.generate("system", "user").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
