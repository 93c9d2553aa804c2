//! Drafting configuration

use serde::{Deserialize, Serialize};

/// How much prior-year context each prompt gets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrafterConfig {
    /// Passages retrieved for section drafting
    pub top_k: usize,

    /// Passages retrieved when asking which figures are needed
    pub questions_top_k: usize,
}

impl Default for DrafterConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            questions_top_k: 3,
        }
    }
}

impl DrafterConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.top_k == 0 || self.questions_top_k == 0 {
            return Err("top_k and questions_top_k must be greater than 0".to_string());
        }
        Ok(())
    }
}
