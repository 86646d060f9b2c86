// Single source of truth for all default values.

// --- Signal accumulation ---
pub const DEFAULT_COMPLETION_FLOOR: f64 = 0.1;
pub const DEFAULT_COMPLETION_CEILING: f64 = 1.0;
pub const DEFAULT_MISSING_COMPLETION_RATE: f64 = 0.5;
pub const DEFAULT_CUSTOM_CATEGORY_DISCOUNT: f64 = 0.5;
pub const DEFAULT_COMPLETION_MIDPOINT: f64 = 0.5;
pub const DEFAULT_SCHEDULE_AWARE_COEFFICIENT: f64 = 0.5;
pub const DEFAULT_FALLBACK_COEFFICIENT: f64 = 0.3;
pub const DEFAULT_STRUGGLE_THRESHOLD: f64 = 0.3;
pub const DEFAULT_STRUGGLE_BASE: f64 = 0.5;
pub const DEFAULT_STRUGGLE_EVIDENCE: f64 = 0.7;
pub const DEFAULT_HABIT_MULTIPLIER_DIVISOR: f64 = 5.0;
pub const DEFAULT_HABIT_MULTIPLIER_CAP: f64 = 2.0;
pub const DEFAULT_DIVERSITY_DIVISOR: f64 = 10.0;
pub const DEFAULT_DIVERSITY_CAP: f64 = 0.5;
pub const DEFAULT_DIVERSITY_COEFFICIENT: f64 = 0.15;
pub const DEFAULT_NAMING_COEFFICIENT: f64 = 0.25;
pub const DEFAULT_SOCIAL_TERMS: [&str; 3] = ["social", "meet", "friend"];
pub const DEFAULT_PARALLEL_CLASSIFICATION: bool = false;

// --- Normalization ---
pub const DEFAULT_EVIDENCE_EPSILON: f64 = 0.001;

// --- Tie-break ---
pub const DEFAULT_TIE_ACCUMULATOR_WEIGHT: f64 = 0.4;
pub const DEFAULT_TIE_DIVERSITY_WEIGHT: f64 = 0.3;
pub const DEFAULT_TIE_DIVERSITY_DIVISOR: f64 = 10.0;
pub const DEFAULT_TIE_STABILITY_WEIGHT: f64 = 0.2;
pub const DEFAULT_TIE_RECENCY_WEIGHT: f64 = 0.1;
pub const DEFAULT_TIE_RECENCY_BONUS: f64 = 0.1;
pub const DEFAULT_STABILITY_CONSCIENTIOUSNESS: f64 = 0.9;
pub const DEFAULT_STABILITY_OPENNESS: f64 = 0.8;
pub const DEFAULT_STABILITY_NEUROTICISM: f64 = 0.7;
pub const DEFAULT_STABILITY_AGREEABLENESS: f64 = 0.6;
pub const DEFAULT_STABILITY_EXTRAVERSION: f64 = 0.5;

// --- Classifier ---
pub const DEFAULT_BASELINE_WEIGHT: f64 = 0.05;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.5;
pub const DEFAULT_COPING_WEIGHT: f64 = -0.3;
pub const DEFAULT_MIXED_NEUROTICISM_WEIGHT: f64 = 0.1;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.3;
pub const DEFAULT_SIMILARITY_SLOPE: f64 = 0.64;
pub const DEFAULT_HIGH_COMPLETION_THRESHOLD: f64 = 0.7;
pub const DEFAULT_HIGH_COMPLETION_CONSCIENTIOUSNESS: f64 = 0.4;
pub const DEFAULT_LOW_COMPLETION_THRESHOLD: f64 = 0.3;
pub const DEFAULT_LOW_COMPLETION_NEUROTICISM: f64 = 0.35;

// --- Confidence ---
pub const DEFAULT_BASE_LADDER: [u32; 3] = [30, 75, 150];
pub const DEFAULT_INFLATED_LADDER: [u32; 3] = [35, 85, 160];
pub const DEFAULT_HABIT_BONUS_PER_HABIT: u32 = 2;
pub const DEFAULT_HABIT_BONUS_CAP: u32 = 20;
pub const DEFAULT_EXTREME_RATE_BONUS: u32 = 15;
pub const DEFAULT_MODERATE_RATE_BONUS: u32 = 8;
pub const DEFAULT_COMPLETED_RATIO_BONUS: u32 = 10;
pub const DEFAULT_EXTREME_RATE_BAND: [f64; 2] = [0.2, 0.8];
pub const DEFAULT_MODERATE_RATE_BAND: [f64; 2] = [0.4, 0.6];
pub const DEFAULT_COMPLETED_RATIO_BAND: [f64; 2] = [0.3, 0.7];

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 2_000;
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 256;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
