//! # persona-core
//!
//! Foundation crate for the persona trait inference engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod personality;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PersonaConfig;
pub use errors::{PersonaError, PersonaResult};
pub use models::{
    AnalysisMetadata, Category, CompletionStats, DegradationEvent, Habit, HabitAnalysisInput,
};
pub use personality::{ConfidenceLevel, Trait, TraitMap};
