use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding capability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Per-call timeout; a slower call counts as unavailable.
    pub timeout_ms: u64,
    /// Dimensions for the built-in hashed-term provider.
    pub dimensions: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            timeout_ms: defaults::DEFAULT_EMBEDDING_TIMEOUT_MS,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}
