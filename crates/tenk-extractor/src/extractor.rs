//! Core extractor: ordered rules layered with later-wins semantics

use tenk_domain::FinancialDataSet;
use tracing::{debug, warn};

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::phrases::{contextual_change_records, key_value_records};
use crate::table::TableModel;

/// One extraction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionRule {
    /// Pipe-delimited markdown tables
    MarkdownTable,
    /// HTML `<table>` markup
    MarkupTable,
    /// `Label: amount`, `Label = amount`, `Label of amount`
    KeyValue,
    /// `<label> growth|change|increase|decrease [of|by] N%`
    ContextualChange,
}

impl ExtractionRule {
    /// Every rule, in the order results are layered
    pub const ORDERED: [ExtractionRule; 4] = [
        ExtractionRule::MarkdownTable,
        ExtractionRule::MarkupTable,
        ExtractionRule::KeyValue,
        ExtractionRule::ContextualChange,
    ];

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            ExtractionRule::MarkdownTable => "markdown_table",
            ExtractionRule::MarkupTable => "markup_table",
            ExtractionRule::KeyValue => "key_value",
            ExtractionRule::ContextualChange => "contextual_change",
        }
    }

    /// Run this rule alone over `text`
    pub fn apply(&self, text: &str, fiscal_year: Option<&str>) -> FinancialDataSet {
        match self {
            ExtractionRule::MarkdownTable => TableModel::from_markdown(text)
                .map(|table| table.markdown_records(fiscal_year))
                .unwrap_or_default(),
            ExtractionRule::MarkupTable => {
                let mut records = FinancialDataSet::new();
                for table in TableModel::from_markup(text) {
                    records.extend_from(table.markup_records(fiscal_year));
                }
                records
            }
            ExtractionRule::KeyValue => key_value_records(text),
            ExtractionRule::ContextualChange => contextual_change_records(text),
        }
    }
}

/// Extracts financial metrics from free-form text
///
/// Holds no mutable state; one instance can serve any number of sessions
/// concurrently.
#[derive(Debug, Clone, Default)]
pub struct FinancialDataExtractor {
    config: ExtractorConfig,
}

impl FinancialDataExtractor {
    /// Create an extractor after validating its configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a fresh data set from one block of user text
    ///
    /// `fiscal_year` picks the column of multi-year tables. Never fails:
    /// empty input yields an empty set.
    pub fn extract(&self, text: &str, fiscal_year: Option<&str>) -> FinancialDataSet {
        if text.trim().is_empty() {
            return FinancialDataSet::new();
        }
        let text = self.bounded(text);

        let mut data = FinancialDataSet::new();
        for rule in ExtractionRule::ORDERED {
            let records = rule.apply(text, fiscal_year);
            debug!(rule = rule.name(), records = records.len(), "Extraction rule applied");
            data.extend_from(records);
        }

        debug!(total = data.len(), "Extraction complete");
        data
    }

    fn bounded<'a>(&self, text: &'a str) -> &'a str {
        let limit = self.config.max_input_length;
        match text.char_indices().nth(limit) {
            Some((cut, _)) => {
                warn!(
                    "Input exceeds {} characters; truncating before extraction",
                    limit
                );
                &text[..cut]
            }
            None => text,
        }
    }
}

/// Extract with the default configuration
pub fn extract(text: &str, fiscal_year: Option<&str>) -> FinancialDataSet {
    FinancialDataExtractor::default().extract(text, fiscal_year)
}

/// Merge two data sets; `incoming` overwrites `existing` on collision
pub fn merge(existing: &FinancialDataSet, incoming: &FinancialDataSet) -> FinancialDataSet {
    FinancialDataSet::merge(existing, incoming)
}
