//! Tenk LLM Provider Layer
//!
//! Narrative generator implementations for drafting 10-K sections.
//!
//! # Architecture
//!
//! This crate provides implementations of the `NarrativeGenerator` trait from
//! `tenk-domain`. Every provider takes role instructions plus user content
//! and returns prose.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama chat API
//! - `OpenAiProvider`: OpenAI-compatible chat completions API
//! - `LlmClient`: whichever of the above an [`LlmConfig`] selects
//!
//! # Examples
//!
//! ```
//! use tenk_llm::MockProvider;
//! use tenk_domain::traits::NarrativeGenerator;
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = rt.block_on(provider.generate("system", "user")).unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod ollama;
pub mod openai;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tenk_domain::traits::NarrativeGenerator;
use thiserror::Error;

pub use client::LlmClient;
pub use config::{LlmConfig, ProviderKind};
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Provider could not be set up
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses are keyed on the user content; the system instructions of the
/// most recent call are kept for inspection.
///
/// # Examples
///
/// ```
/// use tenk_llm::MockProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_error("prompt2");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<Mutex<usize>>,
    last_prompt: Arc<Mutex<Option<(String, String)>>>,
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Fail,
}

/// Delay before retry number `attempt` (1-based): 1s, 2s, 4s, ...
pub(crate) fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(2u64.saturating_pow(attempt.saturating_sub(1)).min(30))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a specific response for a given user content
    pub fn add_response(&mut self, user: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(user.into(), MockReply::Text(response.into()));
    }

    /// Configure to return an error for a specific user content
    pub fn add_error(&mut self, user: impl Into<String>) {
        lock(&self.responses).insert(user.into(), MockReply::Fail);
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *lock(&self.call_count) = 0;
    }

    /// The `(system, user)` pair of the most recent call
    pub fn last_prompt(&self) -> Option<(String, String)> {
        lock(&self.last_prompt).clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl NarrativeGenerator for MockProvider {
    type Error = LlmError;

    async fn generate(&self, system: &str, user: &str) -> Result<String, Self::Error> {
        *lock(&self.call_count) += 1;
        *lock(&self.last_prompt) = Some((system.to_string(), user.to_string()));

        match lock(&self.responses).get(user) {
            Some(MockReply::Text(response)) => Ok(response.clone()),
            Some(MockReply::Fail) => Err(LlmError::Other("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_delay_doubles_and_caps() {
        assert_eq!(backoff_delay(1), Duration::from_secs(1));
        assert_eq!(backoff_delay(2), Duration::from_secs(2));
        assert_eq!(backoff_delay(3), Duration::from_secs(4));
        assert_eq!(backoff_delay(40), Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("system", "any prompt").await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate("s", "hello").await.unwrap(), "world");
        assert_eq!(provider.generate("s", "foo").await.unwrap(), "bar");
        assert_eq!(
            provider.generate("s", "unknown").await.unwrap(),
            "Default mock response"
        );
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.generate("s", "prompt1").await.unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.generate("s", "prompt2").await.unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.generate("s", "bad prompt").await;
        assert!(matches!(result, Err(LlmError::Other(_))));
    }

    #[tokio::test]
    async fn test_mock_provider_records_last_prompt() {
        let provider = MockProvider::default();
        assert!(provider.last_prompt().is_none());

        provider.generate("be concise", "draft item 1").await.unwrap();
        assert_eq!(
            provider.last_prompt(),
            Some(("be concise".to_string(), "draft item 1".to_string()))
        );
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("s", "test").await.unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
