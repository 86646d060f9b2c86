use serde::{Deserialize, Serialize};

use super::defaults;
use crate::personality::Trait;

/// Signal accumulation and normalization tuning.
///
/// These values were chosen empirically; behavioral parity depends on
/// keeping them as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Lower clamp for per-habit completion weighting.
    pub completion_floor: f64,
    /// Upper clamp for per-habit completion weighting.
    pub completion_ceiling: f64,
    /// Completion rate assumed when the input carries no rates at all.
    pub missing_completion_rate: f64,
    /// Multiplier applied to every custom-category contribution.
    pub custom_category_discount: f64,
    /// Completion rate treated as neither evidence for nor against conscientiousness.
    pub completion_midpoint: f64,
    /// Conscientiousness coefficient when schedule-aware stats are available.
    pub schedule_aware_coefficient: f64,
    /// Conscientiousness coefficient when falling back to raw completion rates.
    pub fallback_coefficient: f64,
    /// Completion rates strictly below this count as struggling.
    pub struggle_threshold: f64,
    pub struggle_base: f64,
    pub struggle_evidence: f64,
    pub habit_multiplier_divisor: f64,
    pub habit_multiplier_cap: f64,
    pub diversity_divisor: f64,
    pub diversity_cap: f64,
    pub diversity_coefficient: f64,
    pub naming_coefficient: f64,
    /// Terms whose presence in a custom habit name suggests social affiliation.
    pub social_terms: Vec<String>,
    /// Total weights at or below this are treated as "no evidence".
    pub evidence_epsilon: f64,
    /// Classify custom categories lacking weights on the rayon pool.
    pub parallel_classification: bool,
    pub tie_break: TieBreakConfig,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            completion_floor: defaults::DEFAULT_COMPLETION_FLOOR,
            completion_ceiling: defaults::DEFAULT_COMPLETION_CEILING,
            missing_completion_rate: defaults::DEFAULT_MISSING_COMPLETION_RATE,
            custom_category_discount: defaults::DEFAULT_CUSTOM_CATEGORY_DISCOUNT,
            completion_midpoint: defaults::DEFAULT_COMPLETION_MIDPOINT,
            schedule_aware_coefficient: defaults::DEFAULT_SCHEDULE_AWARE_COEFFICIENT,
            fallback_coefficient: defaults::DEFAULT_FALLBACK_COEFFICIENT,
            struggle_threshold: defaults::DEFAULT_STRUGGLE_THRESHOLD,
            struggle_base: defaults::DEFAULT_STRUGGLE_BASE,
            struggle_evidence: defaults::DEFAULT_STRUGGLE_EVIDENCE,
            habit_multiplier_divisor: defaults::DEFAULT_HABIT_MULTIPLIER_DIVISOR,
            habit_multiplier_cap: defaults::DEFAULT_HABIT_MULTIPLIER_CAP,
            diversity_divisor: defaults::DEFAULT_DIVERSITY_DIVISOR,
            diversity_cap: defaults::DEFAULT_DIVERSITY_CAP,
            diversity_coefficient: defaults::DEFAULT_DIVERSITY_COEFFICIENT,
            naming_coefficient: defaults::DEFAULT_NAMING_COEFFICIENT,
            social_terms: defaults::DEFAULT_SOCIAL_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            evidence_epsilon: defaults::DEFAULT_EVIDENCE_EPSILON,
            parallel_classification: defaults::DEFAULT_PARALLEL_CLASSIFICATION,
            tie_break: TieBreakConfig::default(),
        }
    }
}

/// Weights for the dominant-trait composite used only on exact score ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TieBreakConfig {
    pub accumulator_weight: f64,
    pub diversity_weight: f64,
    pub diversity_divisor: f64,
    pub stability_weight: f64,
    pub recency_weight: f64,
    /// Awarded to conscientiousness only.
    pub recency_bonus: f64,
    pub stability: StabilityPreference,
}

impl Default for TieBreakConfig {
    fn default() -> Self {
        Self {
            accumulator_weight: defaults::DEFAULT_TIE_ACCUMULATOR_WEIGHT,
            diversity_weight: defaults::DEFAULT_TIE_DIVERSITY_WEIGHT,
            diversity_divisor: defaults::DEFAULT_TIE_DIVERSITY_DIVISOR,
            stability_weight: defaults::DEFAULT_TIE_STABILITY_WEIGHT,
            recency_weight: defaults::DEFAULT_TIE_RECENCY_WEIGHT,
            recency_bonus: defaults::DEFAULT_TIE_RECENCY_BONUS,
            stability: StabilityPreference::default(),
        }
    }
}

/// How behaviorally grounded each trait is considered when evidence is equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityPreference {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl StabilityPreference {
    pub fn get(&self, t: Trait) -> f64 {
        match t {
            Trait::Openness => self.openness,
            Trait::Conscientiousness => self.conscientiousness,
            Trait::Extraversion => self.extraversion,
            Trait::Agreeableness => self.agreeableness,
            Trait::Neuroticism => self.neuroticism,
        }
    }
}

impl Default for StabilityPreference {
    fn default() -> Self {
        Self {
            openness: defaults::DEFAULT_STABILITY_OPENNESS,
            conscientiousness: defaults::DEFAULT_STABILITY_CONSCIENTIOUSNESS,
            extraversion: defaults::DEFAULT_STABILITY_EXTRAVERSION,
            agreeableness: defaults::DEFAULT_STABILITY_AGREEABLENESS,
            neuroticism: defaults::DEFAULT_STABILITY_NEUROTICISM,
        }
    }
}
