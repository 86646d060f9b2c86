//! Secondary signal from overall completion.
//!
//! ```text
//! conscientiousness += (rate - 0.5) * coefficient          evidence coefficient
//! if rate < 0.3:
//!     severity    = (0.3 - rate) / 0.3
//!     multiplier  = min(habits / 5, 2.0)
//!     neuroticism += (0.5 + severity * 0.5) * multiplier   evidence 0.7 * multiplier
//! ```
//!
//! The coefficient is 0.5 with schedule-aware stats and 0.3 when falling
//! back to the mean of the raw completion rates.

use persona_core::config::InferenceConfig;
use persona_core::{HabitAnalysisInput, Trait};

use crate::ledger::{EvidenceLedger, EvidenceSource};

pub fn apply(input: &HabitAnalysisInput, config: &InferenceConfig, ledger: &mut EvidenceLedger) {
    if let Some(stats) = input.completion_stats {
        if stats.total_habits == 0 {
            return;
        }
        record(
            stats.completion_rate,
            stats.total_habits as f64,
            config.schedule_aware_coefficient,
            config,
            ledger,
        );
    } else if let Some(average) = input.average_completion_rate() {
        record(
            average,
            input.completion_rates.len() as f64,
            config.fallback_coefficient,
            config,
            ledger,
        );
    }
}

fn record(
    rate: f64,
    habit_count: f64,
    coefficient: f64,
    config: &InferenceConfig,
    ledger: &mut EvidenceLedger,
) {
    let rate = rate.clamp(0.0, 1.0);
    ledger.record(
        EvidenceSource::CompletionRate,
        Trait::Conscientiousness,
        (rate - config.completion_midpoint) * coefficient,
        coefficient,
    );

    if rate >= config.struggle_threshold {
        return;
    }
    let severity = (config.struggle_threshold - rate) / config.struggle_threshold;
    let multiplier =
        (habit_count / config.habit_multiplier_divisor).min(config.habit_multiplier_cap);
    if multiplier <= 0.0 {
        return;
    }
    ledger.record(
        EvidenceSource::CompletionRate,
        Trait::Neuroticism,
        (config.struggle_base + severity * config.struggle_base) * multiplier,
        config.struggle_evidence * multiplier,
    );
}
