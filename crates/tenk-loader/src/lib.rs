//! Tenk Document Loader
//!
//! Downloads prior-year 10-K filings and turns them into section texts.
//!
//! - [`FilingDownloader`] fetches a filing over HTTP and saves it locally
//! - [`HtmlFilingLoader`] reads a saved filing, converts the markup to text,
//!   and locates Item 1 and Item 7

pub mod config;
pub mod downloader;
pub mod error;
pub mod html;
pub mod loader;
pub mod sections;

pub use config::LoaderConfig;
pub use downloader::{local_filing_path, FilingDownloader};
pub use error::LoaderError;
pub use loader::HtmlFilingLoader;
