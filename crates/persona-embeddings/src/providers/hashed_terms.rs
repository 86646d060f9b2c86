//! Hashed bag-of-terms provider.
//!
//! Deterministic dense vectors from term frequencies hashed into a fixed
//! number of buckets. Each token also contributes its leading stem so that
//! "meditate" and "meditation" land close together. No model files, so it
//! works in air-gapped environments and in tests.

use std::collections::HashMap;

use persona_core::config::EmbeddingConfig;
use persona_core::errors::PersonaResult;
use persona_core::traits::IEmbeddingProvider;

/// Characters kept for the stem feature.
const STEM_LEN: usize = 5;
/// Relative weight of the stem feature against the full token.
const STEM_WEIGHT: f32 = 0.6;

pub struct HashedTermEmbedder {
    dimensions: usize,
}

impl HashedTermEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    pub fn from_config(config: &EmbeddingConfig) -> Self {
        Self::new(config.dimensions)
    }

    /// FNV-1a bucket for a feature string.
    fn bucket(feature: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in feature.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.chars().count() >= 2)
            .map(str::to_lowercase)
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut features: HashMap<String, f32> = HashMap::new();
        let mut total = 0.0f32;
        for token in Self::tokenize(text) {
            total += 1.0;
            if token.chars().count() > STEM_LEN {
                let stem: String = token.chars().take(STEM_LEN).collect();
                *features.entry(format!("~{stem}")).or_default() += STEM_WEIGHT;
            }
            *features.entry(token).or_default() += 1.0;
        }

        let mut vec = vec![0.0f32; self.dimensions];
        if total == 0.0 {
            return vec;
        }
        for (feature, count) in &features {
            // Longer features are rarer; weight them up a little.
            let rarity = 1.0 + (feature.len() as f32).ln();
            vec[Self::bucket(feature, self.dimensions)] += (count / total) * rarity;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            vec.iter_mut().for_each(|v| *v /= norm);
        }
        vec
    }
}

impl IEmbeddingProvider for HashedTermEmbedder {
    fn embed(&self, text: &str) -> PersonaResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> PersonaResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-terms"
    }

    fn is_available(&self) -> bool {
        true
    }
}
