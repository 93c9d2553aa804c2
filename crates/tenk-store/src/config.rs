//! Configuration for passage indexing

use serde::{Deserialize, Serialize};

use crate::StoreError;

/// Configuration for chunking, embedding, and search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Maximum chunk length (characters)
    pub chunk_size: usize,

    /// Characters shared by consecutive chunks
    pub chunk_overlap: usize,

    /// Embedding dimension
    pub dimension: usize,

    /// Passages returned by default
    pub top_k: usize,

    /// HNSW search candidate list size
    pub ef_search: usize,

    /// HNSW capacity
    pub max_elements: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
            dimension: 384,
            top_k: 5,
            ef_search: 64,
            max_elements: 100_000,
        }
    }
}

impl IndexConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.chunk_size == 0 {
            return Err(StoreError::Config("chunk_size must be greater than 0".to_string()));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(StoreError::Config(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        if self.dimension == 0 {
            return Err(StoreError::Config("dimension must be greater than 0".to_string()));
        }
        if self.top_k == 0 {
            return Err(StoreError::Config("top_k must be greater than 0".to_string()));
        }
        if self.ef_search == 0 || self.max_elements == 0 {
            return Err(StoreError::Config(
                "ef_search and max_elements must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = IndexConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.chunk_overlap, 200);
        assert_eq!(config.top_k, 5);
    }

    #[test]
    fn test_overlap_must_be_smaller_than_chunk() {
        let config = IndexConfig {
            chunk_overlap: 1000,
            ..IndexConfig::default()
        };
        assert!(matches!(config.validate(), Err(StoreError::Config(_))));
    }

    #[test]
    fn test_zero_values_rejected() {
        for config in [
            IndexConfig { chunk_size: 0, chunk_overlap: 0, ..IndexConfig::default() },
            IndexConfig { dimension: 0, ..IndexConfig::default() },
            IndexConfig { top_k: 0, ..IndexConfig::default() },
            IndexConfig { ef_search: 0, ..IndexConfig::default() },
        ] {
            assert!(config.validate().is_err());
        }
    }
}
