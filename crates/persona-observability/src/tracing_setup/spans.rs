//! Span definitions per operation: analysis and classification.

/// Create an analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($habit_count:expr, $category_count:expr) => {
        tracing::info_span!(
            "persona.analysis",
            habit_count = $habit_count,
            category_count = $category_count
        )
    };
}

/// Create a classification span.
#[macro_export]
macro_rules! classification_span {
    ($category:expr, $strategy:expr) => {
        tracing::debug_span!(
            "persona.classification",
            category = %$category,
            strategy = %$strategy
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYSIS: &str = "persona.analysis";
    pub const CLASSIFICATION: &str = "persona.classification";
}
