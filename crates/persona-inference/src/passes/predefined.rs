//! Curated categories with authoritative weight maps.

use persona_core::config::InferenceConfig;
use persona_core::HabitAnalysisInput;

use super::spread_category;
use crate::ledger::{EvidenceLedger, EvidenceSource};

pub fn apply(input: &HabitAnalysisInput, config: &InferenceConfig, ledger: &mut EvidenceLedger) {
    for category in &input.predefined_categories {
        let Some(weights) = category.trait_weights.as_ref() else {
            continue;
        };
        spread_category(
            input,
            config,
            &category.id,
            weights,
            1.0,
            EvidenceSource::PredefinedCategory(category.id.clone()),
            ledger,
        );
    }
}
