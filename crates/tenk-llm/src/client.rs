//! Config-selected narrative generator

use async_trait::async_trait;
use tenk_domain::traits::NarrativeGenerator;
use tracing::info;

use crate::config::{LlmConfig, ProviderKind};
use crate::{LlmError, MockProvider, OllamaProvider, OpenAiProvider};

/// One of the supported providers, chosen at startup
pub enum LlmClient {
    /// Canned responses
    Mock(MockProvider),
    /// Local Ollama server
    Ollama(OllamaProvider),
    /// OpenAI-compatible API
    OpenAi(OpenAiProvider),
}

impl LlmClient {
    /// Build the provider named by `config`
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        config.validate()?;
        let client = match config.provider {
            ProviderKind::Mock => LlmClient::Mock(MockProvider::new(config.mock_response.clone())),
            ProviderKind::Ollama => LlmClient::Ollama(OllamaProvider::from_config(config)?),
            ProviderKind::OpenAi => LlmClient::OpenAi(OpenAiProvider::from_config(config)?),
        };
        info!(provider = ?config.provider, model = %config.model, "LLM client ready");
        Ok(client)
    }

    /// Provider kind in use
    pub fn kind(&self) -> ProviderKind {
        match self {
            LlmClient::Mock(_) => ProviderKind::Mock,
            LlmClient::Ollama(_) => ProviderKind::Ollama,
            LlmClient::OpenAi(_) => ProviderKind::OpenAi,
        }
    }
}

#[async_trait]
impl NarrativeGenerator for LlmClient {
    type Error = LlmError;

    async fn generate(&self, system: &str, user: &str) -> Result<String, Self::Error> {
        match self {
            LlmClient::Mock(provider) => provider.generate(system, user).await,
            LlmClient::Ollama(provider) => provider.generate(system, user).await,
            LlmClient::OpenAi(provider) => provider.generate(system, user).await,
        }
    }
}
