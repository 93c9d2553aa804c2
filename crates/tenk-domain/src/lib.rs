//! Tenk Domain Layer
//!
//! Core vocabulary for drafting the narrative sections of a Form 10-K.
//! Everything else in the workspace speaks in these types.
//!
//! ## Key Concepts
//!
//! - **MetricValue**: a normalized number, or the raw text when normalization failed
//! - **FinancialDataSet**: metric name → value, last write wins, placeholder names refused
//! - **FilingSections**: named section texts pulled out of a prior-year filing
//! - **RetrievedPassage**: a chunk of prior-year text with its relevance score
//!
//! ## Architecture
//!
//! This crate has no infrastructure in it. Retrieval, generation, and document
//! loading are expressed as traits in [`traits`] and implemented elsewhere
//! (`tenk-store`, `tenk-llm`, `tenk-loader`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dataset;
pub mod filing;
pub mod passage;
pub mod traits;
pub mod value;

// Re-exports for convenience
pub use dataset::{is_forbidden_metric_name, FinancialDataSet};
pub use filing::FilingSections;
pub use passage::RetrievedPassage;
pub use value::MetricValue;
pub use traits::{DocumentLoader, NarrativeGenerator, Retriever};
