//! Per-company drafting sessions.
//!
//! A session owns the passage index built from one company's prior-year
//! filing. Both request shells create one before drafting.

use std::sync::Arc;

use tenk_domain::{FilingSections, NarrativeGenerator};
use tenk_store::{IndexConfig, PassageIndex, StoreError};
use tracing::info;

use crate::config::DrafterConfig;
use crate::drafter::Drafter;

/// Everything needed to draft sections for one company
pub struct SessionContext<G> {
    /// Upper-case ticker
    pub ticker: String,
    /// Fiscal year the filing was processed for
    pub fiscal_year: String,
    /// Section names found in the filing
    pub sections_found: Vec<String>,
    /// Drafter over this session's index
    pub drafter: Drafter<G, PassageIndex>,
}

impl<G: NarrativeGenerator> SessionContext<G> {
    /// Index the filing sections and wire up a drafter
    pub fn build(
        ticker: &str,
        fiscal_year: &str,
        sections: &FilingSections,
        generator: Arc<G>,
        index_config: &IndexConfig,
        drafter_config: &DrafterConfig,
    ) -> Result<Self, StoreError> {
        let index = PassageIndex::new(index_config)?;
        let chunks = index.add_documents(&sections.indexable_documents())?;

        let ticker = ticker.trim().to_uppercase();
        info!(ticker = %ticker, chunks, "Session index built");

        Ok(Self {
            sections_found: sections.names().map(str::to_string).collect(),
            drafter: Drafter::with_config(generator, Arc::new(index), drafter_config.clone()),
            ticker,
            fiscal_year: fiscal_year.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenk_llm::MockProvider;

    fn sections() -> FilingSections {
        let mut sections = FilingSections::new();
        sections.insert(
            FilingSections::ITEM_1_BUSINESS,
            "Acme Corporation designs industrial robots.",
        );
        sections.insert(FilingSections::FULL_DOCUMENT, "Acme sells robots worldwide.");
        sections
    }

    #[tokio::test]
    async fn test_build_indexes_filing_sections() {
        let provider = MockProvider::new("Drafted business.");
        let session = SessionContext::build(
            " acme ",
            "2024",
            &sections(),
            Arc::new(provider.clone()),
            &IndexConfig::default(),
            &DrafterConfig::default(),
        )
        .unwrap();

        assert_eq!(session.ticker, "ACME");
        assert_eq!(session.fiscal_year, "2024");
        assert_eq!(session.sections_found.len(), 2);

        let business = session
            .drafter
            .generate_business_section(&session.ticker, &session.fiscal_year)
            .await
            .unwrap();
        assert_eq!(business, "Drafted business.");
        let (_, user) = provider.last_prompt().unwrap();
        assert!(user.contains("industrial robots"));
    }
}
