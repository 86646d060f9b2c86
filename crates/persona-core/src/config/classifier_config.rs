use serde::{Deserialize, Serialize};

use super::defaults;

/// Keyword and semantic classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Weight for every trait when no signal fires.
    pub baseline_weight: f64,
    /// Weight for a trait whose lexicon matched.
    pub keyword_weight: f64,
    /// Neuroticism weight when only coping language is present.
    pub coping_weight: f64,
    /// Neuroticism weight when both stress and coping language are present.
    pub mixed_neuroticism_weight: f64,
    /// Cosine similarity must exceed this to count.
    pub similarity_threshold: f64,
    /// Linear slope mapping similarity above threshold onto weight.
    pub similarity_slope: f64,
    pub high_completion_threshold: f64,
    pub high_completion_conscientiousness: f64,
    pub low_completion_threshold: f64,
    pub low_completion_neuroticism: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            baseline_weight: defaults::DEFAULT_BASELINE_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
            coping_weight: defaults::DEFAULT_COPING_WEIGHT,
            mixed_neuroticism_weight: defaults::DEFAULT_MIXED_NEUROTICISM_WEIGHT,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            similarity_slope: defaults::DEFAULT_SIMILARITY_SLOPE,
            high_completion_threshold: defaults::DEFAULT_HIGH_COMPLETION_THRESHOLD,
            high_completion_conscientiousness: defaults::DEFAULT_HIGH_COMPLETION_CONSCIENTIOUSNESS,
            low_completion_threshold: defaults::DEFAULT_LOW_COMPLETION_THRESHOLD,
            low_completion_neuroticism: defaults::DEFAULT_LOW_COMPLETION_NEUROTICISM,
        }
    }
}
