//! The five signal passes. Each only appends to the ledger; a pass with
//! nothing to say appends nothing.

pub mod completion;
pub mod custom;
pub mod diversity;
pub mod naming;
pub mod predefined;

use persona_core::config::InferenceConfig;
use persona_core::{HabitAnalysisInput, TraitMap};

use crate::ledger::{EvidenceLedger, EvidenceSource};

/// Run every pass in order. `custom_weights` is aligned with
/// `input.custom_categories`; `None` entries are skipped.
pub fn run_all(
    input: &HabitAnalysisInput,
    config: &InferenceConfig,
    custom_weights: &[Option<TraitMap>],
) -> EvidenceLedger {
    let mut ledger = EvidenceLedger::new();
    predefined::apply(input, config, &mut ledger);
    custom::apply(input, config, custom_weights, &mut ledger);
    completion::apply(input, config, &mut ledger);
    diversity::apply(input, config, &mut ledger);
    naming::apply(input, config, &mut ledger);
    ledger
}

/// Spread one category's weight map across its member habits.
///
/// Each member carries `1 / members` of the category's influence, scaled by
/// its completion rate clamped to `[floor, ceiling]` and by `discount`.
pub(crate) fn spread_category(
    input: &HabitAnalysisInput,
    config: &InferenceConfig,
    category_id: &str,
    weights: &TraitMap,
    discount: f64,
    source: EvidenceSource,
    ledger: &mut EvidenceLedger,
) {
    let members: Vec<usize> = input
        .habits_in_category(category_id)
        .map(|(i, _)| i)
        .collect();
    if members.is_empty() {
        return;
    }
    let habit_weight = 1.0 / members.len() as f64;

    for index in members {
        let rate = input.completion_rate_at(index, config.missing_completion_rate);
        let completion_weighting = rate.clamp(config.completion_floor, config.completion_ceiling);
        for (t, w) in weights.non_zero() {
            let contribution = w * completion_weighting * habit_weight * discount;
            ledger.record_signed(source.clone(), t, contribution);
        }
    }
}
