use serde::{Deserialize, Serialize};

/// Schedule-aware consistency snapshot produced by the completion service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionStats {
    pub total_habits: u32,
    /// Habits whose expected completions were all met.
    pub completed_habits: u32,
    /// Completed / expected, in [0, 1].
    pub completion_rate: f64,
}

impl CompletionStats {
    pub fn new(total_habits: u32, completed_habits: u32, completion_rate: f64) -> Self {
        Self {
            total_habits,
            completed_habits,
            completion_rate: completion_rate.clamp(0.0, 1.0),
        }
    }

    /// Fraction of habits fully completed. `None` when there are no habits.
    pub fn fully_completed_ratio(&self) -> Option<f64> {
        if self.total_habits == 0 {
            None
        } else {
            Some(self.completed_habits as f64 / self.total_habits as f64)
        }
    }
}
