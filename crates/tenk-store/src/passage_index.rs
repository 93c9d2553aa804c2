//! Session-scoped passage index implementing `Retriever`

use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tenk_domain::traits::Retriever;
use tenk_domain::RetrievedPassage;
use tracing::{debug, info};

use crate::config::IndexConfig;
use crate::embedding::{EmbeddingError, EmbeddingModel, HashingEmbeddingModel};
use crate::error::StoreError;
use crate::splitter::TextSplitter;
use crate::vector_index::{VectorIndex, VectorIndexError};

/// Chunked, embedded prior-year text for one drafting session
///
/// Owned by whoever runs the session and dropped with it.
pub struct PassageIndex<E: EmbeddingModel = HashingEmbeddingModel> {
    splitter: TextSplitter,
    model: E,
    vectors: VectorIndex,
    passages: RwLock<Vec<String>>,
    ef_search: usize,
}

impl PassageIndex<HashingEmbeddingModel> {
    /// Create an index using the hashing embedder
    pub fn new(config: &IndexConfig) -> Result<Self, StoreError> {
        Self::with_model(config, HashingEmbeddingModel::new(config.dimension))
    }
}

impl<E: EmbeddingModel> PassageIndex<E> {
    /// Create an index using a custom embedding model
    pub fn with_model(config: &IndexConfig, model: E) -> Result<Self, StoreError> {
        config.validate()?;
        Ok(Self {
            splitter: TextSplitter::new(config.chunk_size, config.chunk_overlap),
            vectors: VectorIndex::new(model.dimension(), config.max_elements),
            model,
            passages: RwLock::new(Vec::new()),
            ef_search: config.ef_search,
        })
    }

    fn read_passages(&self) -> Result<RwLockReadGuard<'_, Vec<String>>, StoreError> {
        self.passages
            .read()
            .map_err(|_| StoreError::Index(VectorIndexError::Poisoned))
    }

    fn write_passages(&self) -> Result<RwLockWriteGuard<'_, Vec<String>>, StoreError> {
        self.passages
            .write()
            .map_err(|_| StoreError::Index(VectorIndexError::Poisoned))
    }

    /// Chunk, embed, and index documents; returns the number of chunks added
    ///
    /// Chunks without any words are skipped.
    pub fn add_documents<S: AsRef<str>>(&self, documents: &[S]) -> Result<usize, StoreError> {
        let mut passages = self.write_passages()?;
        let mut added = 0;

        for document in documents {
            for chunk in self.splitter.split(document.as_ref()) {
                let embedding = match self.model.embed(&chunk) {
                    Ok(embedding) => embedding,
                    Err(EmbeddingError::InvalidInput(reason)) => {
                        debug!(%reason, "Skipping chunk");
                        continue;
                    }
                };
                self.vectors.add(passages.len(), &embedding)?;
                passages.push(chunk);
                added += 1;
            }
        }

        info!(
            documents = documents.len(),
            chunks = added,
            total = passages.len(),
            "Indexed documents"
        );
        Ok(added)
    }

    /// Remove every passage
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut passages = self.write_passages()?;
        self.vectors.clear()?;
        passages.clear();
        Ok(())
    }

    /// Number of indexed passages
    pub fn len(&self) -> usize {
        self.read_passages().map(|p| p.len()).unwrap_or(0)
    }

    /// Check if nothing has been indexed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Synchronous search used by the `Retriever` impl
    pub fn search_passages(&self, query: &str, k: usize) -> Result<Vec<RetrievedPassage>, StoreError> {
        let passages = self.read_passages()?;
        if passages.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        let embedding = match self.model.embed(query) {
            Ok(embedding) => embedding,
            Err(EmbeddingError::InvalidInput(_)) => return Ok(Vec::new()),
        };

        let hits = self.vectors.search(&embedding, k, self.ef_search)?;
        debug!(query_chars = query.len(), hits = hits.len(), "Passage search");
        Ok(hits
            .into_iter()
            .filter_map(|(id, score)| {
                passages
                    .get(id)
                    .map(|content| RetrievedPassage::new(content.clone(), score))
            })
            .collect())
    }
}

#[async_trait]
impl<E: EmbeddingModel> Retriever for PassageIndex<E> {
    type Error = StoreError;

    async fn search(&self, query: &str, k: usize) -> Result<Vec<RetrievedPassage>, Self::Error> {
        self.search_passages(query, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> IndexConfig {
        IndexConfig {
            chunk_size: 200,
            chunk_overlap: 40,
            dimension: 256,
            ..IndexConfig::default()
        }
    }

    #[test]
    fn test_add_and_count() {
        let index = PassageIndex::new(&small_config()).unwrap();
        assert!(index.is_empty());

        let added = index
            .add_documents(&["First document about chips.", "Second document about drinks."])
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_wordless_chunks_skipped() {
        let index = PassageIndex::new(&small_config()).unwrap();
        let added = index.add_documents(&["---", "", "Real words here"]).unwrap();
        assert_eq!(added, 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = IndexConfig {
            chunk_overlap: 500,
            ..small_config()
        };
        assert!(PassageIndex::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_search_returns_most_relevant_first() {
        let index = PassageIndex::new(&small_config()).unwrap();
        index
            .add_documents(&[
                "Our restaurants serve Italian food across many franchise locations.",
                "Data center revenue grew because of demand for accelerated computing GPUs.",
                "Footwear and apparel sales rose in North America.",
            ])
            .unwrap();

        let results = index.search("data center GPUs revenue", 2).await.unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].content.contains("Data center"));
        assert!(results[0].relevance_score >= results[1].relevance_score);
    }

    #[tokio::test]
    async fn test_search_empty_index_and_query() {
        let index = PassageIndex::new(&small_config()).unwrap();
        assert!(index.search("anything", 5).await.unwrap().is_empty());

        index.add_documents(&["Some text"]).unwrap();
        assert!(index.search("???", 5).await.unwrap().is_empty());
        assert!(index.search("text", 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear() {
        let index = PassageIndex::new(&small_config()).unwrap();
        index.add_documents(&["Some text"]).unwrap();
        index.clear().unwrap();
        assert!(index.is_empty());
        assert!(index.search("text", 5).await.unwrap().is_empty());
    }
}
