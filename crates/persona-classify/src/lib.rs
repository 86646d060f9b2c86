//! # persona-classify
//!
//! Infers a trait weight map for a category the user created, from its name
//! and the names of the habits under it.
//!
//! Two tiers: a keyword classifier that is always available, and a semantic
//! classifier that compares embeddings against curated descriptor phrases
//! and silently degrades to keywords when no embedding can be produced.
//! Both share the stress/coping neuroticism override and the completion-rate
//! bonuses.

pub mod classifier;
pub mod descriptors;
pub mod keyword;
pub mod lexicon;
pub mod overrides;
pub mod semantic;

pub use classifier::{Classification, ClassificationStrategy, TraitClassifier, WeightInference};
pub use keyword::KeywordClassifier;
pub use semantic::SemanticClassifier;
