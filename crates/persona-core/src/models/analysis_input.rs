use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{AnalysisMetadata, Category, CompletionStats, Habit};

/// Read-only snapshot handed to the engine for a single analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitAnalysisInput {
    pub active_habits: Vec<Habit>,
    pub predefined_categories: Vec<Category>,
    pub custom_categories: Vec<Category>,
    /// Habits that live under custom categories.
    pub custom_habits: Vec<Habit>,
    /// Per-habit completion fraction, aligned positionally with `active_habits`.
    pub completion_rates: Vec<f64>,
    /// Aggregate schedule-aware statistic, when the completion service produced one.
    pub completion_stats: Option<CompletionStats>,
    pub metadata: AnalysisMetadata,
}

impl HabitAnalysisInput {
    /// Mean of the supplied completion rates, or `None` when there are none.
    pub fn average_completion_rate(&self) -> Option<f64> {
        if self.completion_rates.is_empty() {
            return None;
        }
        let sum: f64 = self.completion_rates.iter().sum();
        Some(sum / self.completion_rates.len() as f64)
    }

    /// Completion rate for the active habit at `index`. Entries past the end
    /// of the sequence default to the average; with no rates at all, to `default`.
    pub fn completion_rate_at(&self, index: usize, default: f64) -> f64 {
        self.completion_rates
            .get(index)
            .copied()
            .or_else(|| self.average_completion_rate())
            .unwrap_or(default)
    }

    /// Active habits (with their positional index) that belong to `category_id`.
    pub fn habits_in_category<'a>(
        &'a self,
        category_id: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Habit)> + 'a {
        self.active_habits
            .iter()
            .enumerate()
            .filter(move |(_, h)| h.belongs_to(category_id))
    }

    /// Number of distinct known categories (predefined or custom) that at
    /// least one active habit belongs to.
    pub fn engaged_category_count(&self) -> usize {
        let known: HashSet<&str> = self
            .predefined_categories
            .iter()
            .chain(self.custom_categories.iter())
            .map(|c| c.id.as_str())
            .collect();
        self.active_habits
            .iter()
            .filter_map(|h| h.category_id.as_deref())
            .filter(|id| known.contains(id))
            .collect::<HashSet<_>>()
            .len()
    }
}
