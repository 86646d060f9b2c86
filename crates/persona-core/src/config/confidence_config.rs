use serde::{Deserialize, Serialize};

use super::defaults;
use crate::personality::ConfidenceLevel;

/// Data-point cutoffs. Counts below `low_below` grade as low, below
/// `medium_below` as medium, below `high_below` as high, else very high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceLadder {
    pub low_below: u32,
    pub medium_below: u32,
    pub high_below: u32,
}

impl ConfidenceLadder {
    pub const fn from_array(cutoffs: [u32; 3]) -> Self {
        Self {
            low_below: cutoffs[0],
            medium_below: cutoffs[1],
            high_below: cutoffs[2],
        }
    }

    pub fn grade(&self, count: u32) -> ConfidenceLevel {
        if count < self.low_below {
            ConfidenceLevel::Low
        } else if count < self.medium_below {
            ConfidenceLevel::Medium
        } else if count < self.high_below {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::VeryHigh
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.low_below <= self.medium_below && self.medium_below <= self.high_below
    }
}

/// Open interval `(low, high)`; a value outside it counts as extreme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBand {
    pub low: f64,
    pub high: f64,
}

impl RateBand {
    pub const fn from_array(bounds: [f64; 2]) -> Self {
        Self {
            low: bounds[0],
            high: bounds[1],
        }
    }

    pub fn is_outside(&self, value: f64) -> bool {
        value > self.high || value < self.low
    }

    pub fn is_ordered(&self) -> bool {
        (0.0..=1.0).contains(&self.low) && self.low <= self.high && self.high <= 1.0
    }

    /// Whether `inner` sits within this band.
    pub fn encloses(&self, inner: &RateBand) -> bool {
        self.low <= inner.low && inner.high <= self.high
    }
}

/// Confidence grading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Ladder used when no completion statistics are supplied.
    pub base: ConfidenceLadder,
    /// Ladder used against the count inflated by completion statistics.
    pub inflated: ConfidenceLadder,
    pub habit_bonus_per_habit: u32,
    pub habit_bonus_cap: u32,
    /// Awarded when the overall rate falls outside `extreme_rate_band`.
    pub extreme_rate_bonus: u32,
    /// Awarded when the overall rate falls outside `moderate_rate_band` only.
    pub moderate_rate_bonus: u32,
    /// Awarded when the fully-completed ratio falls outside `completed_ratio_band`.
    pub completed_ratio_bonus: u32,
    pub extreme_rate_band: RateBand,
    pub moderate_rate_band: RateBand,
    pub completed_ratio_band: RateBand,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            base: ConfidenceLadder::from_array(defaults::DEFAULT_BASE_LADDER),
            inflated: ConfidenceLadder::from_array(defaults::DEFAULT_INFLATED_LADDER),
            habit_bonus_per_habit: defaults::DEFAULT_HABIT_BONUS_PER_HABIT,
            habit_bonus_cap: defaults::DEFAULT_HABIT_BONUS_CAP,
            extreme_rate_bonus: defaults::DEFAULT_EXTREME_RATE_BONUS,
            moderate_rate_bonus: defaults::DEFAULT_MODERATE_RATE_BONUS,
            completed_ratio_bonus: defaults::DEFAULT_COMPLETED_RATIO_BONUS,
            extreme_rate_band: RateBand::from_array(defaults::DEFAULT_EXTREME_RATE_BAND),
            moderate_rate_band: RateBand::from_array(defaults::DEFAULT_MODERATE_RATE_BAND),
            completed_ratio_band: RateBand::from_array(defaults::DEFAULT_COMPLETED_RATIO_BAND),
        }
    }
}
