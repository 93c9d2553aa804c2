//! Document loader for saved HTML filings

use std::path::Path;

use tenk_domain::traits::DocumentLoader;
use tenk_domain::FilingSections;
use tracing::{info, warn};

use crate::config::LoaderConfig;
use crate::error::LoaderError;
use crate::html::html_to_text;
use crate::sections::extract_section;

/// Reads a saved 10-K and splits out Item 1, Item 7, and the full text
#[derive(Debug, Clone)]
pub struct HtmlFilingLoader {
    max_section_chars: usize,
}

impl HtmlFilingLoader {
    /// Create a loader from configuration
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            max_section_chars: config.max_section_chars,
        }
    }

    /// Split already-loaded markup into sections
    pub fn sections_from_html(&self, html: &str) -> FilingSections {
        let text = html_to_text(html);
        let mut sections = FilingSections::new();

        match extract_section(&text, 1, "Business", self.max_section_chars) {
            Some(business) => sections.insert(FilingSections::ITEM_1_BUSINESS, business),
            None => warn!("Item 1 (Business) not found"),
        }
        match extract_section(&text, 7, "Management", self.max_section_chars) {
            Some(mda) => sections.insert(FilingSections::ITEM_7_MDA, mda),
            None => warn!("Item 7 (MD&A) not found"),
        }
        sections.insert(FilingSections::FULL_DOCUMENT, text);
        sections
    }
}

impl Default for HtmlFilingLoader {
    fn default() -> Self {
        Self::new(&LoaderConfig::default())
    }
}

impl DocumentLoader for HtmlFilingLoader {
    type Error = LoaderError;

    fn load_sections(&self, path: &Path) -> Result<FilingSections, Self::Error> {
        let bytes = std::fs::read(path)?;
        let html = String::from_utf8_lossy(&bytes);
        let sections = self.sections_from_html(&html);
        info!(
            path = %path.display(),
            sections = sections.len(),
            "Filing parsed"
        );
        Ok(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FILING_HTML: &str = r#"<html><head><title>10-K</title></head><body>
        <div><p>Item 1. Business</p><p>Item 7. Management's Discussion</p></div>
        <div><h2>Item 1. Business</h2>
        <p>Coca-Cola is a total beverage company.</p>
        <h2>Item 1A. Risk Factors</h2><p>Competition is intense.</p></div>
        <div><h2>Item 2. Properties</h2><p>Atlanta headquarters.</p></div>
        <div><h2>Item 7. Management's Discussion and Analysis</h2>
        <p>Net operating revenues grew 3%.</p></div>
        <div><h2>Item 8. Financial Statements</h2><table><tr><td>Cash</td><td>9,366</td></tr></table></div>
        </body></html>"#;

    #[test]
    fn test_load_sections_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FILING_HTML.as_bytes()).unwrap();

        let loader = HtmlFilingLoader::default();
        let sections = loader.load_sections(file.path()).unwrap();

        let business = sections.get(FilingSections::ITEM_1_BUSINESS).unwrap();
        assert!(business.contains("total beverage company"));
        assert!(!business.contains("Atlanta"));

        let mda = sections.get(FilingSections::ITEM_7_MDA).unwrap();
        assert!(mda.contains("Net operating revenues grew 3%."));
        assert!(!mda.contains("9,366"));

        let full = sections.get(FilingSections::FULL_DOCUMENT).unwrap();
        assert!(full.contains("9,366"));
        assert!(!full.contains("10-K"), "head content is skipped");
    }

    #[test]
    fn test_missing_sections_are_absent() {
        let loader = HtmlFilingLoader::default();
        let sections = loader.sections_from_html("<p>Exhibit index only</p>");
        assert_eq!(sections.get(FilingSections::ITEM_1_BUSINESS), None);
        assert_eq!(sections.get(FilingSections::ITEM_7_MDA), None);
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = HtmlFilingLoader::default();
        let result = loader.load_sections(&dir.path().join("absent.html"));
        assert!(matches!(result, Err(LoaderError::Io(_))));
    }

    #[test]
    fn test_section_length_limit() {
        let config = LoaderConfig {
            max_section_chars: 20,
            ..LoaderConfig::default()
        };
        let loader = HtmlFilingLoader::new(&config);
        let sections = loader.sections_from_html(FILING_HTML);
        let business = sections.get(FilingSections::ITEM_1_BUSINESS).unwrap();
        assert!(business.chars().count() <= 20);
    }
}
