//! Retrieved passages

/// A chunk of prior-year filing text returned by a retriever
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedPassage {
    /// The passage text
    pub content: String,

    /// Similarity to the query; higher is more relevant
    pub relevance_score: f32,
}

impl RetrievedPassage {
    /// Create a new passage
    pub fn new(content: impl Into<String>, relevance_score: f32) -> Self {
        Self {
            content: content.into(),
            relevance_score,
        }
    }
}
