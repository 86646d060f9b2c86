/// Score assigned to a trait with no supporting evidence.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Number of descriptor phrases curated per trait for semantic classification.
pub const DESCRIPTORS_PER_TRAIT: usize = 5;
