//! Breadth of engagement as a small openness signal.

use persona_core::config::InferenceConfig;
use persona_core::{HabitAnalysisInput, Trait};

use crate::ledger::{EvidenceLedger, EvidenceSource};

pub fn apply(input: &HabitAnalysisInput, config: &InferenceConfig, ledger: &mut EvidenceLedger) {
    let categories = input.engaged_category_count();
    if categories == 0 {
        return;
    }
    let score = (categories as f64 / config.diversity_divisor).min(config.diversity_cap);
    ledger.record(
        EvidenceSource::Diversity,
        Trait::Openness,
        score * config.diversity_coefficient,
        config.diversity_coefficient,
    );
}
