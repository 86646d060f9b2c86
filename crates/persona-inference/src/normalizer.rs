//! Accumulators and total weights to bounded scores.
//!
//! ```text
//! ratio    = clamp(acc / tw, -1, 1)
//! base     = (ratio + 1) / 2
//! strength = tw / max(tw)
//! score    = 0.5 + (base - 0.5) * strength      (0.5 when tw <= epsilon)
//! ```

use persona_core::constants::NEUTRAL_SCORE;
use persona_core::{Trait, TraitMap};
use serde::{Deserialize, Serialize};

/// Final scores plus the raw values they were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub scores: TraitMap,
    pub accumulators: TraitMap,
    pub total_weights: TraitMap,
}

impl ScoreResult {
    pub fn score(&self, t: Trait) -> f64 {
        self.scores[t]
    }

    /// Highest score across traits.
    pub fn max_score(&self) -> f64 {
        self.scores.max_value()
    }
}

pub fn normalize(accumulators: &TraitMap, total_weights: &TraitMap, epsilon: f64) -> ScoreResult {
    let max_weight = total_weights
        .iter()
        .map(|(_, w)| w)
        .filter(|w| w.is_finite())
        .fold(0.0, f64::max);
    let mut scores = TraitMap::filled(NEUTRAL_SCORE);

    for t in Trait::ALL {
        let tw = total_weights[t];
        if !(tw > epsilon && tw.is_finite() && accumulators[t].is_finite()) {
            continue;
        }
        let ratio = (accumulators[t] / tw).clamp(-1.0, 1.0);
        let base = (ratio + 1.0) / 2.0;
        let strength = tw / max_weight;
        scores[t] = NEUTRAL_SCORE + (base - NEUTRAL_SCORE) * strength;
    }

    ScoreResult {
        scores,
        accumulators: *accumulators,
        total_weights: *total_weights,
    }
}
