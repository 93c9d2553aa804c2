//! Tenk Drafter
//!
//! Drafts Item 1 (Business) and Item 7 (MD&A) of a Form 10-K.
//!
//! # Architecture
//!
//! ```text
//! query → Retriever → prior-year passages ─┐
//!                                          ├→ PromptBuilder → NarrativeGenerator → section text
//! FinancialDataSet (MD&A only) ────────────┘
//! ```
//!
//! The [`Drafter`] is generic over the retrieval and generation traits from
//! `tenk-domain`, so tests run against in-memory implementations. Upstream
//! failures come back as [`DrafterError`] and are never retried here.

#![warn(missing_docs)]

mod config;
mod document;
mod drafter;
mod error;
mod format;
mod prompt;
mod session;

pub use config::DrafterConfig;
pub use document::DraftDocument;
pub use drafter::Drafter;
pub use error::DrafterError;
pub use format::{format_financial_data, parse_bullet_questions};
pub use prompt::{PromptBuilder, SectionKind};
pub use session::SessionContext;
