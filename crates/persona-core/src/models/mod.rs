mod analysis_input;
mod analysis_metadata;
mod category;
mod completion_stats;
mod degradation_event;
mod habit;

pub use analysis_input::HabitAnalysisInput;
pub use analysis_metadata::AnalysisMetadata;
pub use category::Category;
pub use completion_stats::CompletionStats;
pub use degradation_event::DegradationEvent;
pub use habit::{Habit, Schedule};
