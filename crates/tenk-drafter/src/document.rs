//! Plain-text draft assembly

use std::fmt;

const RULE_WIDTH: usize = 60;

/// Title used for the MD&A heading in a rendered draft
pub const MDA_TITLE: &str =
    "Item 7. Management's Discussion and Analysis of Financial Condition and Results of Operations";

/// A drafted 10-K, ready to write to disk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftDocument {
    /// Uppercase ticker
    pub ticker: String,
    /// Display name of the company, if known
    pub company_name: Option<String>,
    /// Fiscal year being drafted
    pub fiscal_year: String,
    /// Item 1 narrative
    pub business_section: Option<String>,
    /// Item 7 narrative
    pub mda_section: Option<String>,
}

impl DraftDocument {
    /// Start an empty draft
    pub fn new(ticker: &str, fiscal_year: impl Into<String>) -> Self {
        Self {
            ticker: ticker.to_uppercase(),
            fiscal_year: fiscal_year.into(),
            ..Self::default()
        }
    }

    /// Set the company display name
    pub fn with_company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    /// File name for the rendered draft, e.g. `NVDA_2024_10k_draft.txt`
    pub fn file_name(&self) -> String {
        format!("{}_{}_10k_draft.txt", self.ticker, self.fiscal_year)
    }

    /// Render the draft as plain text
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DraftDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SEC Form 10-K Draft")?;
        match &self.company_name {
            Some(name) => writeln!(f, "Company: {} ({})", self.ticker, name)?,
            None => writeln!(f, "Company: {}", self.ticker)?,
        }
        writeln!(f, "Fiscal Year: {}", self.fiscal_year)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f)?;

        if let Some(business) = &self.business_section {
            writeln!(f, "Item 1. Business")?;
            writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
            writeln!(f, "{business}")?;
            writeln!(f)?;
        }

        if let Some(mda) = &self.mda_section {
            writeln!(f, "{MDA_TITLE}")?;
            writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
            writeln!(f, "{mda}")?;
        }

        Ok(())
    }
}
