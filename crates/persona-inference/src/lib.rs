//! # persona-inference
//!
//! Turns a habit snapshot into Big Five trait scores.
//!
//! ```text
//! HabitAnalysisInput
//!   └─ passes (predefined → custom → completion → diversity → naming)
//!        └─ EvidenceLedger ── fold ──> accumulators, total weights
//!             └─ normalize ──> ScoreResult
//!                  ├─ resolver   ──> dominant trait (composite tie-break)
//!                  └─ breakdown  ──> per-trait audit trail
//! AnalysisMetadata + CompletionStats ──> confidence
//! ```
//!
//! Everything is a pure function of the input. Degenerate inputs resolve to
//! neutral scores rather than errors.

pub mod breakdown;
pub mod confidence;
pub mod engine;
pub mod ledger;
pub mod normalizer;
pub mod passes;
pub mod profile;
pub mod resolver;

pub use breakdown::{SourceContribution, TraitBreakdown};
pub use confidence::confidence;
pub use engine::TraitInferenceEngine;
pub use ledger::{EvidenceEntry, EvidenceLedger, EvidenceSource};
pub use normalizer::{normalize, ScoreResult};
pub use profile::PersonalityProfile;
pub use resolver::{resolve_dominant, Resolution};
