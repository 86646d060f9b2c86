//! Semantic tier: cosine similarity against descriptor phrases.
//!
//! ```text
//! weight(trait) = baseline + (maxSim - threshold) * slope   if maxSim > threshold
//!               = baseline                                 otherwise
//! ```
//!
//! The neuroticism override and completion bonuses are then applied exactly
//! as in the keyword tier.

use persona_core::config::ClassifierConfig;
use persona_core::{Trait, TraitMap};
use persona_embeddings::{max_similarity, EmbeddingCapability};
use persona_observability::events;

use crate::classifier::{Classification, ClassificationStrategy, WeightInference};
use crate::descriptors::all_descriptors;
use crate::keyword::KeywordClassifier;
use crate::overrides::{apply_completion_bonus, apply_neuroticism_override};

/// Embedding-backed classifier with a silent keyword fallback.
#[derive(Debug, Clone)]
pub struct SemanticClassifier {
    capability: EmbeddingCapability,
    keyword: KeywordClassifier,
}

impl SemanticClassifier {
    pub fn new(config: ClassifierConfig, capability: EmbeddingCapability) -> Self {
        Self {
            capability,
            keyword: KeywordClassifier::new(config),
        }
    }

    pub fn capability(&self) -> &EmbeddingCapability {
        &self.capability
    }

    fn config(&self) -> &ClassifierConfig {
        self.keyword.config()
    }

    /// Per-trait maximum similarity, or `None` when the text or every
    /// descriptor failed to embed.
    fn trait_similarities(&self, text: &str) -> Option<TraitMap> {
        let query = self.capability.embed(text)?;

        let (traits, phrases): (Vec<Trait>, Vec<String>) = all_descriptors()
            .map(|(t, p)| (t, p.to_string()))
            .unzip();
        let vectors = self.capability.embed_batch(&phrases);
        if vectors.iter().all(Option::is_none) {
            return None;
        }

        let mut sims = TraitMap::default();
        for t in Trait::ALL {
            let candidates = traits
                .iter()
                .zip(&vectors)
                .filter(|(dt, _)| **dt == t)
                .filter_map(|(_, v)| v.as_deref());
            sims[t] = max_similarity(&query, candidates);
        }
        Some(sims)
    }

    fn similarity_to_weight(&self, similarity: f64) -> f64 {
        let cfg = self.config();
        if similarity > cfg.similarity_threshold {
            cfg.baseline_weight + (similarity - cfg.similarity_threshold) * cfg.similarity_slope
        } else {
            cfg.baseline_weight
        }
    }
}

impl WeightInference for SemanticClassifier {
    fn infer(&self, text: &str, completion_rates: &[f64]) -> Classification {
        let Some(sims) = self.trait_similarities(text) else {
            let reason = if self.capability.is_available() {
                "no vector for input"
            } else {
                "embedding unavailable"
            };
            events::classifier_fallback(text, reason);
            return self.keyword.infer(text, completion_rates);
        };

        let mut weights: TraitMap = sims
            .iter()
            .map(|(t, s)| (t, self.similarity_to_weight(s)))
            .collect();
        let lowercase = text.to_lowercase();
        apply_neuroticism_override(&mut weights, &lowercase, self.config());
        apply_completion_bonus(&mut weights, completion_rates, self.config());

        Classification {
            weights,
            strategy: ClassificationStrategy::Semantic,
        }
    }
}
