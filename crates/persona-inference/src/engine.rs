//! The trait inference engine.

use std::sync::Arc;

use persona_classify::{Classification, TraitClassifier};
use persona_core::traits::IEmbeddingProvider;
use persona_core::{Category, HabitAnalysisInput, PersonaConfig, PersonaResult, TraitMap};
use persona_embeddings::{EmbeddingCapability, TimeoutProvider};
use persona_observability::{analysis_span, events};
use rayon::prelude::*;
use tracing::debug;

use crate::breakdown;
use crate::confidence::confidence;
use crate::ledger::EvidenceLedger;
use crate::normalizer::{normalize, ScoreResult};
use crate::passes;
use crate::profile::PersonalityProfile;
use crate::resolver::resolve_dominant;

/// Stateless engine: holds configuration and a classifier, nothing else.
/// Every call to [`analyze`](Self::analyze) is independent.
#[derive(Debug, Clone, Default)]
pub struct TraitInferenceEngine {
    config: PersonaConfig,
    classifier: TraitClassifier,
}

impl TraitInferenceEngine {
    /// Build an engine, using the semantic classifier when `capability` is available.
    pub fn new(config: PersonaConfig, capability: EmbeddingCapability) -> Self {
        let classifier = TraitClassifier::new(config.classifier.clone(), capability);
        Self { config, classifier }
    }

    /// Keyword classification only.
    pub fn keyword_only(config: PersonaConfig) -> Self {
        let classifier = TraitClassifier::keyword_only(config.classifier.clone());
        Self { config, classifier }
    }

    /// Validate `config` and wrap `provider` in the configured embedding timeout.
    pub fn with_provider(
        config: PersonaConfig,
        provider: Arc<dyn IEmbeddingProvider>,
    ) -> PersonaResult<Self> {
        config.validate()?;
        let capability =
            EmbeddingCapability::available(TimeoutProvider::from_config(provider, &config.embedding));
        Ok(Self::new(config, capability))
    }

    pub fn with_classifier(config: PersonaConfig, classifier: TraitClassifier) -> Self {
        Self { config, classifier }
    }

    pub fn config(&self) -> &PersonaConfig {
        &self.config
    }

    pub fn classifier(&self) -> &TraitClassifier {
        &self.classifier
    }

    /// Score a habit snapshot. Total: any well-typed input yields a profile.
    pub fn analyze(&self, input: &HabitAnalysisInput) -> PersonalityProfile {
        let span = analysis_span!(
            input.active_habits.len(),
            input.predefined_categories.len() + input.custom_categories.len()
        );
        let _guard = span.enter();

        let ledger = self.collect_evidence(input);
        let (accumulators, total_weights) = ledger.fold();
        let inference = &self.config.inference;
        let scores = normalize(&accumulators, &total_weights, inference.evidence_epsilon);
        let resolution =
            resolve_dominant(&scores, &ledger, &inference.tie_break, inference.evidence_epsilon);
        let level = confidence(
            &input.metadata,
            input.completion_stats.as_ref(),
            &self.config.confidence,
        );

        events::analysis_completed(resolution.dominant.as_str(), level.as_str(), ledger.len());

        PersonalityProfile {
            scores: scores.scores,
            dominant_trait: resolution.dominant,
            confidence: level,
            accumulators,
            total_weights,
            tie_broken: resolution.was_tied(),
            breakdown: breakdown::build(&ledger, &scores),
        }
    }

    /// Raw accumulators and total weights, before normalization.
    pub fn accumulate(&self, input: &HabitAnalysisInput) -> (TraitMap, TraitMap) {
        self.collect_evidence(input).fold()
    }

    /// Normalized scores without dominant-trait resolution or confidence.
    pub fn score(&self, input: &HabitAnalysisInput) -> ScoreResult {
        let (acc, tw) = self.accumulate(input);
        normalize(&acc, &tw, self.config.inference.evidence_epsilon)
    }

    /// The full evidence ledger for `input`, in pass order.
    pub fn collect_evidence(&self, input: &HabitAnalysisInput) -> EvidenceLedger {
        let custom_weights = self.resolve_custom_weights(input);
        passes::run_all(input, &self.config.inference, &custom_weights)
    }

    /// Weights for a user-created category. Callers may cache the result
    /// and pass it back as the category's explicit weights.
    pub fn infer_custom_category_weights(
        &self,
        category_name: &str,
        habit_names: &[String],
        completion_rates: &[f64],
    ) -> TraitMap {
        self.classify_custom_category(category_name, habit_names, completion_rates)
            .weights
    }

    /// Like [`infer_custom_category_weights`](Self::infer_custom_category_weights),
    /// also reporting which classifier tier answered.
    pub fn classify_custom_category(
        &self,
        category_name: &str,
        habit_names: &[String],
        completion_rates: &[f64],
    ) -> Classification {
        self.classifier
            .classify_category(category_name, habit_names, completion_rates)
    }

    /// Explicit or classified weights per custom category, aligned with
    /// `input.custom_categories`. Categories with no active member habits
    /// resolve to `None` and are never classified.
    fn resolve_custom_weights(&self, input: &HabitAnalysisInput) -> Vec<Option<TraitMap>> {
        let missing_rate = self.config.inference.missing_completion_rate;
        let resolve = |category: &Category| -> Option<TraitMap> {
            if let Some(weights) = category.trait_weights {
                return Some(weights);
            }
            let (names, rates): (Vec<String>, Vec<f64>) = input
                .habits_in_category(&category.id)
                .map(|(i, h)| (h.name.clone(), input.completion_rate_at(i, missing_rate)))
                .unzip();
            if names.is_empty() {
                debug!(category = %category.id, "custom category has no active habits");
                return None;
            }
            Some(self.infer_custom_category_weights(&category.name, &names, &rates))
        };

        if self.config.inference.parallel_classification {
            input.custom_categories.par_iter().map(resolve).collect()
        } else {
            input.custom_categories.iter().map(resolve).collect()
        }
    }
}
