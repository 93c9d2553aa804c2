//! Index command implementation.

use crate::cli::IndexArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::DefaultEditor;
use tenk_domain::traits::DocumentLoader;
use tenk_domain::FilingSections;
use tenk_loader::{local_filing_path, FilingDownloader, HtmlFilingLoader};
use tenk_router::config::RouterConfig;
use tenk_store::PassageIndex;

/// Locate or download the filing for `ticker` and split it into sections.
///
/// Without a URL or a saved copy, the user is asked for a URL.
pub(crate) async fn load_filing(
    config: &RouterConfig,
    ticker: &str,
    filing_url: Option<&str>,
    formatter: &Formatter,
) -> Result<FilingSections> {
    let local_path = local_filing_path(&config.loader.documents_dir, ticker)?;

    let url = match filing_url.map(str::trim).filter(|u| !u.is_empty()) {
        Some(url) => Some(url.to_string()),
        None if local_path.exists() => None,
        None => {
            println!(
                "{}",
                formatter.warning("Document not found locally. Please provide a filing URL.")
            );
            Some(prompt_for_url()?.ok_or_else(|| {
                CliError::NotFound(format!("no filing for {ticker} and no URL given"))
            })?)
        }
    };

    let path = match url {
        Some(url) => {
            println!("{}", formatter.info(&format!("Downloading document from: {url}")));
            let path = FilingDownloader::new(&config.loader)?
                .download(ticker, &url)
                .await?;
            println!("{}", formatter.success(&format!("Document saved to: {}", path.display())));
            path
        }
        None => local_path,
    };

    println!("{}", formatter.info("Parsing document sections..."));
    let loader = HtmlFilingLoader::new(&config.loader);
    Ok(loader.load_sections(&path)?)
}

fn prompt_for_url() -> Result<Option<String>> {
    let mut editor = DefaultEditor::new()?;
    let line = editor.readline("Enter 10-K filing URL (or press Enter to skip): ")?;
    let line = line.trim();
    Ok((!line.is_empty()).then(|| line.to_string()))
}

/// Execute the index command.
pub async fn execute_index(args: IndexArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let ticker = args.company.trim().to_uppercase();
    let sections = load_filing(&config.app, &ticker, args.filing_url.as_deref(), formatter).await?;
    println!("{}", formatter.format_sections(&sections)?);

    let index = PassageIndex::new(&config.app.index)?;
    let chunks = index.add_documents(&sections.indexable_documents())?;
    println!(
        "{}",
        formatter.success(&format!("Indexed {chunks} passages for {ticker}"))
    );

    Ok(())
}
