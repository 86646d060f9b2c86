//! Classifier facade used by the inference engine.

use std::fmt;

use persona_core::config::ClassifierConfig;
use persona_core::TraitMap;
use persona_embeddings::EmbeddingCapability;
use persona_observability::classification_span;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::keyword::KeywordClassifier;
use crate::lexicon::combined_text;
use crate::semantic::SemanticClassifier;

/// Which tier produced a weight map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationStrategy {
    Keyword,
    Semantic,
}

impl fmt::Display for ClassificationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword => f.write_str("keyword"),
            Self::Semantic => f.write_str("semantic"),
        }
    }
}

/// Inferred weights plus the tier that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub weights: TraitMap,
    pub strategy: ClassificationStrategy,
}

/// Text plus completion rates in, trait weights out. Never fails.
pub trait WeightInference: Send + Sync {
    fn infer(&self, text: &str, completion_rates: &[f64]) -> Classification;
}

/// Picks the semantic tier when an embedding capability was injected,
/// otherwise the keyword tier.
#[derive(Debug, Clone)]
pub enum TraitClassifier {
    Keyword(KeywordClassifier),
    Semantic(SemanticClassifier),
}

impl Default for TraitClassifier {
    fn default() -> Self {
        Self::Keyword(KeywordClassifier::default())
    }
}

impl TraitClassifier {
    pub fn new(config: ClassifierConfig, capability: EmbeddingCapability) -> Self {
        match capability {
            EmbeddingCapability::Unavailable => Self::Keyword(KeywordClassifier::new(config)),
            available => Self::Semantic(SemanticClassifier::new(config, available)),
        }
    }

    pub fn keyword_only(config: ClassifierConfig) -> Self {
        Self::Keyword(KeywordClassifier::new(config))
    }

    /// Weights for free text.
    pub fn infer_weights(&self, text: &str, completion_rates: &[f64]) -> TraitMap {
        self.infer(text, completion_rates).weights
    }

    /// Weights for a custom category from its name and its habits' names.
    pub fn classify_category(
        &self,
        category_name: &str,
        habit_names: &[String],
        completion_rates: &[f64],
    ) -> Classification {
        let text = combined_text(category_name, habit_names);
        let span = classification_span!(category_name, self.tier_name());
        let _guard = span.enter();
        let result = self.infer(&text, completion_rates);
        debug!(
            category = category_name,
            strategy = %result.strategy,
            weights = ?result.weights,
            "custom category classified"
        );
        result
    }

    fn tier_name(&self) -> &'static str {
        match self {
            Self::Keyword(_) => "keyword",
            Self::Semantic(_) => "semantic",
        }
    }
}

impl WeightInference for TraitClassifier {
    fn infer(&self, text: &str, completion_rates: &[f64]) -> Classification {
        match self {
            Self::Keyword(k) => k.infer(text, completion_rates),
            Self::Semantic(s) => s.infer(text, completion_rates),
        }
    }
}
