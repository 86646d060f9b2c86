mod classifier_config;
mod confidence_config;
pub mod defaults;
mod embedding_config;
mod inference_config;
mod observability_config;

pub use classifier_config::ClassifierConfig;
pub use confidence_config::{ConfidenceConfig, ConfidenceLadder, RateBand};
pub use embedding_config::EmbeddingConfig;
pub use inference_config::{InferenceConfig, StabilityPreference, TieBreakConfig};
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level persona configuration. Every section falls back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    pub inference: InferenceConfig,
    pub classifier: ClassifierConfig,
    pub confidence: ConfidenceConfig,
    pub embedding: EmbeddingConfig,
    pub observability: ObservabilityConfig,
}

impl PersonaConfig {
    /// Parse from a TOML string, filling unset fields with defaults, then validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the engine's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let inf = &self.inference;
        if !(0.0..=inf.completion_ceiling).contains(&inf.completion_floor) {
            return Err(invalid(
                "inference.completion_floor",
                "must be within [0, completion_ceiling]",
            ));
        }
        if inf.completion_ceiling > 1.0 {
            return Err(invalid("inference.completion_ceiling", "must be at most 1.0"));
        }
        if !(0.0..=1.0).contains(&inf.missing_completion_rate) {
            return Err(invalid("inference.missing_completion_rate", "must be within [0, 1]"));
        }
        if inf.struggle_threshold <= 0.0 || inf.struggle_threshold > 1.0 {
            return Err(invalid("inference.struggle_threshold", "must be within (0, 1]"));
        }
        for (field, value) in [
            ("inference.habit_multiplier_divisor", inf.habit_multiplier_divisor),
            ("inference.diversity_divisor", inf.diversity_divisor),
            ("inference.tie_break.diversity_divisor", inf.tie_break.diversity_divisor),
        ] {
            if value <= 0.0 {
                return Err(invalid(field, "must be positive"));
            }
        }
        if inf.evidence_epsilon < 0.0 {
            return Err(invalid("inference.evidence_epsilon", "must not be negative"));
        }
        if self.classifier.similarity_threshold >= 1.0 {
            return Err(invalid("classifier.similarity_threshold", "must be below 1.0"));
        }
        if !self.confidence.base.is_ascending() {
            return Err(invalid("confidence.base", "cutoffs must be ascending"));
        }
        if !self.confidence.inflated.is_ascending() {
            return Err(invalid("confidence.inflated", "cutoffs must be ascending"));
        }
        let conf = &self.confidence;
        for (field, band) in [
            ("confidence.extreme_rate_band", &conf.extreme_rate_band),
            ("confidence.moderate_rate_band", &conf.moderate_rate_band),
            ("confidence.completed_ratio_band", &conf.completed_ratio_band),
        ] {
            if !band.is_ordered() {
                return Err(invalid(field, "bounds must satisfy 0 <= low <= high <= 1"));
            }
        }
        if !conf.extreme_rate_band.encloses(&conf.moderate_rate_band) {
            return Err(invalid(
                "confidence.moderate_rate_band",
                "must lie within extreme_rate_band",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
