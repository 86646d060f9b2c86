//! Confidence grading from data volume and completion quality.

use persona_core::config::ConfidenceConfig;
use persona_core::{AnalysisMetadata, CompletionStats, ConfidenceLevel};

/// Grade the analysis. Without completion stats the raw data-point count is
/// graded on the base ladder; with them, an inflated count is graded on the
/// stricter ladder.
pub fn confidence(
    metadata: &AnalysisMetadata,
    stats: Option<&CompletionStats>,
    config: &ConfidenceConfig,
) -> ConfidenceLevel {
    match stats {
        None => config.base.grade(metadata.data_points),
        Some(stats) => config
            .inflated
            .grade(inflated_count(metadata.data_points, stats, config)),
    }
}

/// Data-point count plus habit-diversity and completion-extremity bonuses.
pub fn inflated_count(data_points: u32, stats: &CompletionStats, config: &ConfidenceConfig) -> u32 {
    let habit_bonus = stats
        .total_habits
        .saturating_mul(config.habit_bonus_per_habit)
        .min(config.habit_bonus_cap);

    let rate = stats.completion_rate;
    let rate_bonus = if config.extreme_rate_band.is_outside(rate) {
        config.extreme_rate_bonus
    } else if config.moderate_rate_band.is_outside(rate) {
        config.moderate_rate_bonus
    } else {
        0
    };

    let ratio_bonus = match stats.fully_completed_ratio() {
        Some(r) if config.completed_ratio_band.is_outside(r) => config.completed_ratio_bonus,
        _ => 0,
    };

    data_points
        .saturating_add(habit_bonus)
        .saturating_add(rate_bonus)
        .saturating_add(ratio_bonus)
}
