//! Filing sections produced by a document loader

use std::collections::BTreeMap;

/// Section texts pulled out of one filing, keyed by section name
///
/// Sections that could not be located are simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilingSections {
    sections: BTreeMap<String, String>,
}

impl FilingSections {
    /// Item 1 of a Form 10-K
    pub const ITEM_1_BUSINESS: &'static str = "Item 1. Business";

    /// Item 7 of a Form 10-K
    pub const ITEM_7_MDA: &'static str = "Item 7. MD&A";

    /// The whole filing as plain text
    pub const FULL_DOCUMENT: &'static str = "Full Document";

    /// Create an empty set of sections
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the text for a section, replacing any previous text
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.sections.insert(name.into(), text.into());
    }

    /// Get the text of a section
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sections.get(name).map(String::as_str)
    }

    /// Section names that were found
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of sections found
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if nothing was found
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Non-empty well-known sections in indexing order
    ///
    /// Business comes first, then MD&A, then the full document.
    pub fn indexable_documents(&self) -> Vec<&str> {
        [Self::ITEM_1_BUSINESS, Self::ITEM_7_MDA, Self::FULL_DOCUMENT]
            .iter()
            .filter_map(|name| self.get(name))
            .filter(|text| !text.trim().is_empty())
            .collect()
    }
}
