//! Draft command implementation.

use crate::cli::DraftArgs;
use crate::collect::collect_financial_data;
use crate::commands::index::load_filing;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::PathBuf;
use std::sync::Arc;
use tenk_drafter::{DraftDocument, SessionContext};
use tenk_extractor::{format_questions, FinancialDataExtractor};
use tenk_llm::LlmClient;

/// Execute the draft command.
///
/// Indexes the prior-year filing, drafts the requested sections, collects
/// financial data interactively for the MD&A, and writes the draft file.
pub async fn execute_draft(args: DraftArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let ticker = args.company.trim().to_uppercase();
    let fiscal_year = args.fiscal_year.trim().to_string();
    let company_name = config.app.company_name(&ticker).unwrap_or("Unknown");

    println!(
        "{}",
        formatter.banner(&[
            "SEC 10-K Drafting Assistant",
            &format!("Company: {ticker} ({company_name})"),
            &format!("Fiscal Year: {fiscal_year}"),
        ])
    );

    let sections = load_filing(&config.app, &ticker, args.filing_url.as_deref(), formatter).await?;
    println!("{}", formatter.format_sections(&sections)?);

    let generator = Arc::new(LlmClient::from_config(&config.app.llm)?);
    let session = SessionContext::build(
        &ticker,
        &fiscal_year,
        &sections,
        generator,
        &config.app.index,
        &config.app.drafter,
    )?;
    println!("{}", formatter.success("Document indexed successfully"));

    let mut draft = DraftDocument::new(&ticker, fiscal_year.as_str()).with_company_name(company_name);

    if !args.skip_business {
        println!("{}", formatter.info("Generating Item 1. Business..."));
        let business = session
            .drafter
            .generate_business_section(&ticker, &fiscal_year)
            .await?;
        println!("{}", formatter.section("Item 1. Business", &business));
        draft.business_section = Some(business);
    }

    if !args.skip_mda {
        let questions = session
            .drafter
            .identify_missing_financial_data(&ticker, &fiscal_year)
            .await?;
        println!("{}", format_questions(&questions));

        let extractor = FinancialDataExtractor::new(config.app.extractor.clone())?;
        let data = collect_financial_data(&extractor, &fiscal_year, config, formatter)?;

        println!("{}", formatter.info("Generating Item 7. MD&A..."));
        let mda = session
            .drafter
            .generate_mda_section(&ticker, &fiscal_year, &data)
            .await?;
        println!("{}", formatter.section("Item 7. MD&A", &mda));
        draft.mda_section = Some(mda);
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(draft.file_name()));
    tokio::fs::write(&path, draft.render()).await?;
    println!(
        "{}",
        formatter.success(&format!("Output saved to: {}", path.display()))
    );

    Ok(())
}
