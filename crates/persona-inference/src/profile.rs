use persona_core::{ConfidenceLevel, PersonaResult, Trait, TraitMap};
use serde::{Deserialize, Serialize};

use crate::breakdown::TraitBreakdown;
use crate::normalizer::ScoreResult;

/// Complete result of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub scores: TraitMap,
    pub dominant_trait: Trait,
    pub confidence: ConfidenceLevel,
    pub accumulators: TraitMap,
    pub total_weights: TraitMap,
    /// Whether the dominant trait was chosen by the composite tie-break.
    pub tie_broken: bool,
    pub breakdown: Vec<TraitBreakdown>,
}

impl PersonalityProfile {
    pub fn score(&self, t: Trait) -> f64 {
        self.scores[t]
    }

    pub fn score_result(&self) -> ScoreResult {
        ScoreResult {
            scores: self.scores,
            accumulators: self.accumulators,
            total_weights: self.total_weights,
        }
    }

    pub fn to_json(&self) -> PersonaResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> PersonaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn breakdown_for(&self, t: Trait) -> Option<&TraitBreakdown> {
        self.breakdown.iter().find(|b| b.trait_kind == t)
    }
}
