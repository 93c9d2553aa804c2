//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tenk - Draft SEC Form 10-K Business and MD&A sections.
#[derive(Debug, Parser)]
#[command(name = "tenk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TENK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draft Business and MD&A sections end to end
    Draft(DraftArgs),

    /// Parse financial data from a file or stdin
    Parse(ParseArgs),

    /// Download (if needed), parse, and index a filing
    Index(IndexArgs),

    /// Start the HTTP API
    Serve(ServeArgs),
}

/// Arguments for the draft command.
#[derive(Debug, Parser)]
pub struct DraftArgs {
    /// Company ticker symbol
    #[arg(long)]
    pub company: String,

    /// Fiscal year for the filing (e.g., 2024)
    #[arg(long)]
    pub fiscal_year: String,

    /// URL to the prior-year 10-K filing HTML page
    #[arg(long)]
    pub filing_url: Option<String>,

    /// Skip Business section generation
    #[arg(long)]
    pub skip_business: bool,

    /// Skip MD&A section generation
    #[arg(long)]
    pub skip_mda: bool,

    /// Where to write the draft (default: {TICKER}_{YEAR}_10k_draft.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Preferred year column for multi-year tables
    #[arg(long)]
    pub fiscal_year: Option<String>,

    /// Read input from a file instead of stdin
    #[arg(short = 'i', long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the index command.
#[derive(Debug, Parser)]
pub struct IndexArgs {
    /// Company ticker symbol
    #[arg(long)]
    pub company: String,

    /// URL to the 10-K filing HTML page
    #[arg(long)]
    pub filing_url: Option<String>,
}

/// Arguments for the serve command.
#[derive(Debug, Parser)]
pub struct ServeArgs {
    /// Override the configured port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_command() {
        let cli = Cli::parse_from([
            "tenk",
            "draft",
            "--company",
            "nvda",
            "--fiscal-year",
            "2024",
            "--skip-business",
        ]);
        match cli.command {
            Command::Draft(args) => {
                assert_eq!(args.company, "nvda");
                assert_eq!(args.fiscal_year, "2024");
                assert!(args.skip_business);
                assert!(!args.skip_mda);
                assert!(args.filing_url.is_none());
            }
            _ => panic!("Expected Draft command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tenk", "parse", "--fiscal-year", "2023", "--format", "json", "--no-color"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        match cli.command {
            Command::Parse(args) => assert_eq!(args.fiscal_year.as_deref(), Some("2023")),
            _ => panic!("Expected Parse command"),
        }
    }

    #[test]
    fn test_draft_requires_company() {
        let result = Cli::try_parse_from(["tenk", "draft", "--fiscal-year", "2024"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_port() {
        let cli = Cli::parse_from(["tenk", "serve", "--port", "9000"]);
        match cli.command {
            Command::Serve(args) => assert_eq!(args.port, Some(9000)),
            _ => panic!("Expected Serve command"),
        }
    }
}
