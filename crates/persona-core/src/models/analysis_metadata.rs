use serde::{Deserialize, Serialize};

/// Volume of underlying data examined for an analysis. Drives confidence
/// grading only; never feeds the trait scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub data_points: u32,
}

impl AnalysisMetadata {
    pub fn new(data_points: u32) -> Self {
        Self { data_points }
    }
}
