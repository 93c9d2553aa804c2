//! Prompt engineering for 10-K section drafting

/// The section a prompt is being built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Item 1. Business
    Business,
    /// Questions asking the user for the figures the MD&A needs
    MissingData,
    /// Item 7. Management's Discussion and Analysis
    Mda,
}

impl SectionKind {
    /// Retrieval query for this section
    pub fn retrieval_query(&self, ticker: &str) -> String {
        match self {
            SectionKind::Business => {
                format!("Item 1 Business description operations products services {ticker}")
            }
            SectionKind::MissingData => {
                format!("Item 7 MD&A financial data revenue operating income cash flow {ticker}")
            }
            SectionKind::Mda => {
                format!("Item 7 MD&A management discussion analysis financial results {ticker}")
            }
        }
    }
}

/// Builds the system and user prompts for one generation call
pub struct PromptBuilder {
    kind: SectionKind,
    ticker: String,
    fiscal_year: String,
    context: String,
    financial_data: String,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(kind: SectionKind, ticker: impl Into<String>, fiscal_year: impl Into<String>) -> Self {
        Self {
            kind,
            ticker: ticker.into(),
            fiscal_year: fiscal_year.into(),
            context: String::new(),
            financial_data: String::new(),
        }
    }

    /// Attach retrieved prior-year context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Attach formatted user-supplied figures (MD&A only)
    pub fn with_financial_data(mut self, data: impl Into<String>) -> Self {
        self.financial_data = data.into();
        self
    }

    /// Build the system prompt
    pub fn system_prompt(&self) -> String {
        match self.kind {
            SectionKind::Business => BUSINESS_SYSTEM.replace("{fy}", &self.fiscal_year),
            SectionKind::MissingData => MISSING_DATA_SYSTEM.to_string(),
            SectionKind::Mda => MDA_SYSTEM.replace("{fy}", &self.fiscal_year),
        }
    }

    /// Build the user prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!("Company: {}\n", self.ticker));
        if self.kind != SectionKind::MissingData {
            prompt.push_str(&format!("Fiscal Year: {}\n", self.fiscal_year));
        }
        prompt.push('\n');

        prompt.push_str("Retrieved Context from Prior Year Filing:\n");
        prompt.push_str(&self.context);
        prompt.push_str("\n\n");

        match self.kind {
            SectionKind::Business => {
                prompt.push_str(&format!(
                    "Generate the Item 1. Business section for {}'s {} Form 10-K. \
                     Ensure the narrative is grounded in the retrieved context and does not \
                     include unsupported claims.",
                    self.ticker, self.fiscal_year
                ));
            }
            SectionKind::MissingData => {
                prompt.push_str(&format!(
                    "Based on the MD&A structure above, identify the top 3-5 critical financial \
                     data points needed for {}'s {} MD&A section (for example Total Revenue, \
                     Net Income, Cash Flow from Operations).\n\n",
                    self.ticker, self.fiscal_year
                ));
                prompt.push_str(MISSING_DATA_FORMAT);
            }
            SectionKind::Mda => {
                prompt.push_str(&format!(
                    "User-Provided Financial Data for {}:\n",
                    self.fiscal_year
                ));
                prompt.push_str(&self.financial_data);
                prompt.push_str("\n\n");
                prompt.push_str(&format!(
                    "Generate the Item 7. Management's Discussion and Analysis section for {}'s {} Form 10-K.\n\n",
                    self.ticker, self.fiscal_year
                ));
                prompt.push_str(MDA_REQUIREMENTS);
            }
        }

        prompt
    }
}

const BUSINESS_SYSTEM: &str = "You are an expert securities lawyer drafting the Item 1. Business \
section of an SEC Form 10-K.
Rules:
- Use ONLY information present in the retrieved context
- Do not invent facts, figures, products or markets
- Use a formal, professional tone suitable for a regulatory filing
- Be concise but comprehensive
- Focus on operations, products, services and markets
- Describe the company as of fiscal year {fy}";

const MISSING_DATA_SYSTEM: &str = "You are a financial analyst reviewing the MD&A section of a \
prior-year Form 10-K to determine which current-year figures are needed to draft the new one.
Phrase each item as a short business-friendly question the user can answer.";

const MISSING_DATA_FORMAT: &str = "Format your answer as a bulleted list, one question per line, \
each line starting with \"- \". Return nothing else.";

const MDA_SYSTEM: &str = "You are an expert securities lawyer drafting Item 7. Management's \
Discussion and Analysis of Financial Condition and Results of Operations for an SEC Form 10-K.
Rules:
- Incorporate the user-provided financial data for fiscal year {fy}
- Explain the drivers behind changes in results
- Compare results to the prior year where the context allows
- Use a formal, professional tone suitable for a regulatory filing
- Ground every statement in the retrieved context or the provided data
- Do not invent figures that were not provided";

const MDA_REQUIREMENTS: &str = "Requirements:
1. Incorporate all user-provided financial figures accurately
2. Explain the key drivers of revenue and profitability changes
3. Compare current results with the prior year disclosed in the context
4. Discuss liquidity and capital resources where data permits
5. Keep the narrative grounded and free of unsupported claims";
