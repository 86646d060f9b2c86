//! User-created categories, discounted against curated ones.

use persona_core::config::InferenceConfig;
use persona_core::{HabitAnalysisInput, TraitMap};

use super::spread_category;
use crate::ledger::{EvidenceLedger, EvidenceSource};

/// `weights` is aligned with `input.custom_categories`: explicit maps or
/// classifier output, resolved by the engine before this pass runs.
pub fn apply(
    input: &HabitAnalysisInput,
    config: &InferenceConfig,
    weights: &[Option<TraitMap>],
    ledger: &mut EvidenceLedger,
) {
    for (category, resolved) in input.custom_categories.iter().zip(weights) {
        let Some(weights) = resolved else {
            continue;
        };
        spread_category(
            input,
            config,
            &category.id,
            weights,
            config.custom_category_discount,
            EvidenceSource::CustomCategory(category.id.clone()),
            ledger,
        );
    }
}
