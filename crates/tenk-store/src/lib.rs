//! Tenk Retrieval Layer
//!
//! Session-scoped similarity search over prior-year filing text.
//!
//! # Architecture
//!
//! ```text
//! section text → TextSplitter → chunks → EmbeddingModel → VectorIndex (HNSW)
//!                                                              ↑
//!                                  query → EmbeddingModel ─────┘
//! ```
//!
//! A [`PassageIndex`] owns all of the above for one drafting session and
//! implements the `Retriever` trait from `tenk-domain`. Nothing in this
//! crate is process-global.
//!
//! # Examples
//!
//! ```
//! use tenk_store::{IndexConfig, PassageIndex};
//!
//! let index = PassageIndex::new(&IndexConfig::default()).unwrap();
//! index.add_documents(&["NVIDIA designs GPUs for data centers and gaming."]).unwrap();
//! assert_eq!(index.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod embedding;
pub mod error;
pub mod passage_index;
pub mod splitter;
pub mod vector_index;

pub use config::IndexConfig;
pub use embedding::{EmbeddingError, EmbeddingModel, HashingEmbeddingModel};
pub use error::StoreError;
pub use passage_index::PassageIndex;
pub use splitter::TextSplitter;
pub use vector_index::{VectorIndex, VectorIndexError};
