//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the drafting logic and
//! infrastructure. Implementations live in other crates.

use std::path::Path;

use async_trait::async_trait;

use crate::{FilingSections, RetrievedPassage};

/// Similarity search over prior-year filing text
///
/// Implemented by the infrastructure layer (tenk-store)
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Error type for retrieval operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return at most `k` passages ordered by descending relevance
    async fn search(&self, query: &str, k: usize) -> Result<Vec<RetrievedPassage>, Self::Error>;
}

/// Text generation from role instructions plus user content
///
/// Implemented by the infrastructure layer (tenk-llm)
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Error type for generation operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Generate prose for the given system instructions and user content
    async fn generate(&self, system: &str, user: &str) -> Result<String, Self::Error>;
}

/// Turns a filing document into named section texts
///
/// Implemented by the infrastructure layer (tenk-loader)
pub trait DocumentLoader: Send + Sync {
    /// Error type for loading operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the filing at `path`; sections that cannot be found are absent
    fn load_sections(&self, path: &Path) -> Result<FilingSections, Self::Error>;
}
