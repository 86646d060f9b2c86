//! Keyword tier: lexicon hits map straight onto fixed weights.

use persona_core::config::ClassifierConfig;
use persona_core::{Trait, TraitMap};

use crate::classifier::{Classification, ClassificationStrategy, WeightInference};
use crate::lexicon::{contains_any, terms_for};
use crate::overrides::{apply_completion_bonus, apply_neuroticism_override};

/// Always-available classifier over the curated lexicons.
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier {
    config: ClassifierConfig,
}

impl KeywordClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Baseline everywhere, keyword weight for every lexicon hit, then the
    /// neuroticism override and completion bonuses.
    pub fn infer_weights(&self, text: &str, completion_rates: &[f64]) -> TraitMap {
        let text = text.to_lowercase();
        let mut weights = TraitMap::filled(self.config.baseline_weight);

        for t in [
            Trait::Openness,
            Trait::Conscientiousness,
            Trait::Extraversion,
            Trait::Agreeableness,
        ] {
            if contains_any(&text, terms_for(t)) {
                weights[t] = self.config.keyword_weight;
            }
        }

        apply_neuroticism_override(&mut weights, &text, &self.config);
        apply_completion_bonus(&mut weights, completion_rates, &self.config);
        weights
    }
}

impl WeightInference for KeywordClassifier {
    fn infer(&self, text: &str, completion_rates: &[f64]) -> Classification {
        Classification {
            weights: self.infer_weights(text, completion_rates),
            strategy: ClassificationStrategy::Keyword,
        }
    }
}
