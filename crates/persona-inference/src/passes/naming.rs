//! Social language in custom habit names as an extraversion signal.

use persona_core::config::InferenceConfig;
use persona_core::{HabitAnalysisInput, Trait};

use crate::ledger::{EvidenceLedger, EvidenceSource};

pub fn apply(input: &HabitAnalysisInput, config: &InferenceConfig, ledger: &mut EvidenceLedger) {
    if input.custom_habits.is_empty() {
        return;
    }
    let social = input
        .custom_habits
        .iter()
        .filter(|h| is_social(&h.name, &config.social_terms))
        .count();
    let fraction = social as f64 / input.custom_habits.len() as f64;
    ledger.record(
        EvidenceSource::Naming,
        Trait::Extraversion,
        fraction * config.naming_coefficient,
        config.naming_coefficient,
    );
}

fn is_social(name: &str, terms: &[String]) -> bool {
    let name = name.to_lowercase();
    terms.iter().any(|t| name.contains(t.as_str()))
}
