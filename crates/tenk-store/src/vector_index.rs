//! HNSW Vector Index for Passage Search
//!
//! A wrapper around the HNSW algorithm for nearest-neighbor search over
//! passage embeddings.
//!
//! # HNSW Parameters
//!
//! - **M**: Number of bi-directional links per node (default: 16)
//! - **efConstruction**: Candidate list size during construction (default: 200)
//! - **efSearch**: Candidate list size during search, passed per query

use hnsw_rs::prelude::*;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

const DEFAULT_M: usize = 16;
const DEFAULT_EF_CONSTRUCTION: usize = 200;

/// Errors that can occur during vector index operations
#[derive(Error, Debug)]
pub enum VectorIndexError {
    /// Invalid embedding dimension
    #[error("Invalid embedding dimension: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension provided
        actual: usize,
    },

    /// Index is full
    #[error("Index capacity of {0} vectors reached")]
    Full(usize),

    /// A lock was poisoned by a panicking thread
    #[error("Index state poisoned")]
    Poisoned,
}

struct IndexState {
    hnsw: Hnsw<'static, f32, DistCosine>,
    id_map: HashMap<usize, usize>,
    next_id: usize,
}

/// Maps embeddings to caller-chosen passage ids
///
/// # Examples
///
/// ```
/// use tenk_store::VectorIndex;
///
/// let index = VectorIndex::new(3, 1_000);
/// index.add(7, &[1.0, 0.0, 0.0]).unwrap();
///
/// let results = index.search(&[1.0, 0.0, 0.0], 5, 64).unwrap();
/// assert_eq!(results[0].0, 7);
/// ```
pub struct VectorIndex {
    dimension: usize,
    max_elements: usize,
    state: Mutex<IndexState>,
}

impl VectorIndex {
    /// Create an index for `dimension`-length vectors holding at most `max_elements`
    pub fn new(dimension: usize, max_elements: usize) -> Self {
        Self {
            dimension,
            max_elements,
            state: Mutex::new(Self::empty_state(max_elements)),
        }
    }

    fn empty_state(max_elements: usize) -> IndexState {
        let nb_layer = 16.min((max_elements.max(2) as f32).ln().trunc() as usize).max(1);
        IndexState {
            hnsw: Hnsw::<'static, f32, DistCosine>::new(
                DEFAULT_M,
                max_elements,
                nb_layer,
                DEFAULT_EF_CONSTRUCTION,
                DistCosine {},
            ),
            id_map: HashMap::new(),
            next_id: 0,
        }
    }

    fn state(&self) -> Result<MutexGuard<'_, IndexState>, VectorIndexError> {
        self.state.lock().map_err(|_| VectorIndexError::Poisoned)
    }

    fn check_dimension(&self, vector: &[f32]) -> Result<(), VectorIndexError> {
        if vector.len() != self.dimension {
            return Err(VectorIndexError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        Ok(())
    }

    /// Add an embedding for `passage_id`
    pub fn add(&self, passage_id: usize, embedding: &[f32]) -> Result<(), VectorIndexError> {
        self.check_dimension(embedding)?;

        let mut state = self.state()?;
        if state.next_id >= self.max_elements {
            return Err(VectorIndexError::Full(self.max_elements));
        }
        let internal_id = state.next_id;
        state.next_id += 1;
        state.id_map.insert(internal_id, passage_id);

        let embedding_vec = embedding.to_vec();
        state.hnsw.insert((&embedding_vec, internal_id));
        Ok(())
    }

    /// Search for the `k` nearest neighbors of `query`
    ///
    /// Returns `(passage_id, similarity)` pairs, most similar first.
    pub fn search(
        &self,
        query: &[f32],
        k: usize,
        ef_search: usize,
    ) -> Result<Vec<(usize, f32)>, VectorIndexError> {
        self.check_dimension(query)?;

        let state = self.state()?;
        if state.id_map.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        let mut results: Vec<(usize, f32)> = state
            .hnsw
            .search(query, k, ef_search.max(k))
            .into_iter()
            .filter_map(|neighbour| {
                // Cosine distance back to similarity
                state
                    .id_map
                    .get(&neighbour.d_id)
                    .map(|&passage_id| (passage_id, 1.0 - neighbour.distance))
            })
            .filter(|(_, similarity)| similarity.is_finite())
            .collect();

        results.sort_by(|a, b| b.1.total_cmp(&a.1));
        results.truncate(k);
        Ok(results)
    }

    /// Get the number of vectors in the index
    pub fn len(&self) -> usize {
        self.state().map(|state| state.id_map.len()).unwrap_or(0)
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all vectors from the index
    pub fn clear(&self) -> Result<(), VectorIndexError> {
        let mut state = self.state()?;
        *state = Self::empty_state(self.max_elements);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_index_creation() {
        let index = VectorIndex::new(384, 1_000);
        assert_eq!(index.dimension, 384);
        assert!(index.is_empty());
    }

    #[test]
    fn test_add_and_search() {
        let index = VectorIndex::new(384, 1_000);

        let embedding1: Vec<f32> = (0..384).map(|i| (i as f32 + 1.0) / 384.0).collect();
        index.add(1, &embedding1).unwrap();

        let mut embedding2 = embedding1.clone();
        embedding2[0] = 0.5;
        index.add(2, &embedding2).unwrap();

        assert_eq!(index.len(), 2);

        let results = index.search(&embedding1, 2, 64).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, 1);
        assert!(results[0].1 > 0.99);
    }

    #[test]
    fn test_dimension_mismatch() {
        let index = VectorIndex::new(384, 1_000);
        let result = index.add(1, &[0.1; 128]);
        assert!(matches!(result, Err(VectorIndexError::DimensionMismatch { .. })));
        assert!(index.search(&[0.1; 3], 1, 64).is_err());
    }

    #[test]
    fn test_capacity() {
        let index = VectorIndex::new(2, 1);
        index.add(1, &[1.0, 0.0]).unwrap();
        assert!(matches!(index.add(2, &[0.0, 1.0]), Err(VectorIndexError::Full(1))));
    }

    #[test]
    fn test_clear() {
        let index = VectorIndex::new(3, 1_000);
        index.add(1, &[1.0, 0.0, 0.0]).unwrap();
        assert_eq!(index.len(), 1);

        index.clear().unwrap();
        assert!(index.is_empty());
        assert!(index.search(&[1.0, 0.0, 0.0], 3, 64).unwrap().is_empty());
    }

    #[test]
    fn test_results_ordered_by_similarity() {
        let index = VectorIndex::new(3, 1_000);
        index.add(10, &[1.0, 0.0, 0.0]).unwrap();
        index.add(20, &[0.0, 1.0, 0.0]).unwrap();
        index.add(30, &[0.7071, 0.7071, 0.0]).unwrap();

        let results = index.search(&[1.0, 0.0, 0.0], 3, 64).unwrap();
        let ids: Vec<usize> = results.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![10, 30, 20]);
        assert!(results[1].1 > 0.5);
        assert!(results[2].1 < 0.1);
    }
}
