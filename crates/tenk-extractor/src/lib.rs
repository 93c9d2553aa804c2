//! Tenk Extractor
//!
//! Turns free-form user text into a [`FinancialDataSet`].
//!
//! # Overview
//!
//! Users paste current-period figures in whatever shape they have them:
//! a sentence, a markdown table copied from a spreadsheet, an HTML table
//! lifted from an earnings release. The extractor runs a fixed list of
//! rules over the input and layers their results, later rules overwriting
//! earlier ones for the same metric name.
//!
//! ```text
//! markdown table → markup table → key-value phrases → contextual changes
//! ```
//!
//! Multi-year tables are narrowed to a single column by
//! [`resolve_year_column`], and every table cell goes through
//! [`normalize_value`] so `"$1.2B"` is stored as `1_200_000_000`.
//!
//! Extraction never fails. Bad markup or tokens that are not numbers
//! degrade to fewer records or text-valued records.
//!
//! # Example
//!
//! ```
//! use tenk_extractor::{extract, merge};
//! use tenk_domain::MetricValue;
//!
//! let table = "| Metric | FY2023 | FY2024 |\n|---|---|---|\n| Revenue | 100 | 120 |";
//! let first = extract(table, Some("2024"));
//! assert_eq!(first.get("Revenue"), Some(&MetricValue::Number(120.0)));
//!
//! let second = extract("Net income: $5M", None);
//! let session = merge(&first, &second);
//! assert_eq!(session.len(), 2);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod normalize;
mod phrases;
mod questions;
mod table;
mod year;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{extract, merge, ExtractionRule, FinancialDataExtractor};
pub use normalize::normalize_value;
pub use questions::format_questions;
pub use table::TableModel;
pub use year::resolve_year_column;
