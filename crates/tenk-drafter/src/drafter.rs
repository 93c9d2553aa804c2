//! Section drafting against a retriever and a narrative generator

use std::sync::Arc;

use tenk_domain::{FinancialDataSet, NarrativeGenerator, Retriever};
use tracing::{debug, info, instrument};

use crate::config::DrafterConfig;
use crate::error::DrafterError;
use crate::format::{format_financial_data, parse_bullet_questions};
use crate::prompt::{PromptBuilder, SectionKind};

/// Drafts 10-K sections for one company session
pub struct Drafter<G, R> {
    generator: Arc<G>,
    retriever: Arc<R>,
    config: DrafterConfig,
}

impl<G, R> Clone for Drafter<G, R> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            retriever: Arc::clone(&self.retriever),
            config: self.config.clone(),
        }
    }
}

impl<G, R> Drafter<G, R>
where
    G: NarrativeGenerator,
    R: Retriever,
{
    /// Create a drafter with default configuration
    pub fn new(generator: Arc<G>, retriever: Arc<R>) -> Self {
        Self::with_config(generator, retriever, DrafterConfig::default())
    }

    /// Create a drafter with custom configuration
    pub fn with_config(generator: Arc<G>, retriever: Arc<R>, config: DrafterConfig) -> Self {
        Self {
            generator,
            retriever,
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &DrafterConfig {
        &self.config
    }

    /// Retrieve up to `k` passages and join them with blank lines
    pub async fn retrieve_context(&self, query: &str, k: usize) -> Result<String, DrafterError> {
        let passages = self
            .retriever
            .search(query, k)
            .await
            .map_err(DrafterError::retrieval)?;

        debug!(query, returned = passages.len(), "Retrieved context");

        Ok(passages
            .into_iter()
            .map(|p| p.content)
            .collect::<Vec<_>>()
            .join("\n\n"))
    }

    /// Draft Item 1. Business from prior-year context
    #[instrument(skip(self))]
    pub async fn generate_business_section(
        &self,
        ticker: &str,
        fiscal_year: &str,
    ) -> Result<String, DrafterError> {
        let kind = SectionKind::Business;
        let context = self
            .retrieve_context(&kind.retrieval_query(ticker), self.config.top_k)
            .await?;

        let prompt = PromptBuilder::new(kind, ticker, fiscal_year).with_context(context);
        let text = self.generate(&prompt).await?;

        info!(chars = text.len(), "Business section drafted");
        Ok(text)
    }

    /// Ask the generator which current-year figures the MD&A needs
    #[instrument(skip(self))]
    pub async fn identify_missing_financial_data(
        &self,
        ticker: &str,
        fiscal_year: &str,
    ) -> Result<Vec<String>, DrafterError> {
        let kind = SectionKind::MissingData;
        let context = self
            .retrieve_context(&kind.retrieval_query(ticker), self.config.questions_top_k)
            .await?;

        let prompt = PromptBuilder::new(kind, ticker, fiscal_year).with_context(context);
        let response = self.generate(&prompt).await?;
        let questions = parse_bullet_questions(&response);

        info!(count = questions.len(), "Missing data questions identified");
        Ok(questions)
    }

    /// Draft Item 7. MD&A from prior-year context and user figures
    #[instrument(skip(self, data), fields(metrics = data.len()))]
    pub async fn generate_mda_section(
        &self,
        ticker: &str,
        fiscal_year: &str,
        data: &FinancialDataSet,
    ) -> Result<String, DrafterError> {
        let kind = SectionKind::Mda;
        let context = self
            .retrieve_context(&kind.retrieval_query(ticker), self.config.top_k)
            .await?;

        let prompt = PromptBuilder::new(kind, ticker, fiscal_year)
            .with_context(context)
            .with_financial_data(format_financial_data(data));
        let text = self.generate(&prompt).await?;

        info!(chars = text.len(), "MD&A section drafted");
        Ok(text)
    }

    async fn generate(&self, prompt: &PromptBuilder) -> Result<String, DrafterError> {
        self.generator
            .generate(&prompt.system_prompt(), &prompt.build())
            .await
            .map_err(DrafterError::generation)
    }
}
