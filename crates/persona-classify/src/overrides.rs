//! Adjustments layered on top of either classifier tier.

use persona_core::config::ClassifierConfig;
use persona_core::{Trait, TraitMap};

use crate::lexicon::{contains_any, COPING_TERMS, STRESS_TERMS};

/// Which neuroticism lexicons fired for a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeuroticismSignal {
    None,
    Stress,
    Coping,
    Mixed,
}

impl NeuroticismSignal {
    pub fn detect(lowercase_text: &str) -> Self {
        let stress = contains_any(lowercase_text, STRESS_TERMS);
        let coping = contains_any(lowercase_text, COPING_TERMS);
        match (stress, coping) {
            (true, true) => Self::Mixed,
            (true, false) => Self::Stress,
            (false, true) => Self::Coping,
            (false, false) => Self::None,
        }
    }

    /// The neuroticism weight this signal forces, if any.
    pub fn forced_weight(self, config: &ClassifierConfig) -> Option<f64> {
        match self {
            Self::Stress => Some(config.keyword_weight),
            Self::Coping => Some(config.coping_weight),
            Self::Mixed => Some(config.mixed_neuroticism_weight),
            Self::None => None,
        }
    }
}

/// Overwrite neuroticism when stress or coping language is present.
pub fn apply_neuroticism_override(
    weights: &mut TraitMap,
    lowercase_text: &str,
    config: &ClassifierConfig,
) -> NeuroticismSignal {
    let signal = NeuroticismSignal::detect(lowercase_text);
    if let Some(w) = signal.forced_weight(config) {
        weights[Trait::Neuroticism] = w;
    }
    signal
}

/// Raise conscientiousness on high average completion and neuroticism on
/// low average completion. Never lowers a weight. No rates, no bonus.
pub fn apply_completion_bonus(
    weights: &mut TraitMap,
    completion_rates: &[f64],
    config: &ClassifierConfig,
) {
    if completion_rates.is_empty() {
        return;
    }
    let avg = completion_rates.iter().sum::<f64>() / completion_rates.len() as f64;
    if avg > config.high_completion_threshold {
        let c = &mut weights[Trait::Conscientiousness];
        *c = c.max(config.high_completion_conscientiousness);
    }
    if avg < config.low_completion_threshold {
        let n = &mut weights[Trait::Neuroticism];
        *n = n.max(config.low_completion_neuroticism);
    }
}
