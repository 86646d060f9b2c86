use persona_core::config::*;
use persona_core::errors::ConfigError;
use persona_core::ConfidenceLevel;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = PersonaConfig::from_toml("").unwrap();

    // Inference defaults
    assert_eq!(config.inference.completion_floor, 0.1);
    assert_eq!(config.inference.custom_category_discount, 0.5);
    assert_eq!(config.inference.struggle_threshold, 0.3);
    assert_eq!(config.inference.schedule_aware_coefficient, 0.5);
    assert_eq!(config.inference.fallback_coefficient, 0.3);
    assert_eq!(config.inference.evidence_epsilon, 0.001);
    assert_eq!(config.inference.social_terms, vec!["social", "meet", "friend"]);
    assert!(!config.inference.parallel_classification);

    // Tie-break defaults
    assert_eq!(config.inference.tie_break.accumulator_weight, 0.4);
    assert_eq!(config.inference.tie_break.stability.conscientiousness, 0.9);
    assert_eq!(config.inference.tie_break.stability.extraversion, 0.5);

    // Classifier defaults
    assert_eq!(config.classifier.baseline_weight, 0.05);
    assert_eq!(config.classifier.coping_weight, -0.3);
    assert_eq!(config.classifier.similarity_slope, 0.64);

    // Confidence defaults
    assert_eq!(config.confidence.base.low_below, 30);
    assert_eq!(config.confidence.inflated.high_below, 160);

    // Embedding and observability defaults
    assert_eq!(config.embedding.timeout_ms, 2_000);
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[inference]
custom_category_discount = 0.25
parallel_classification = true

[inference.tie_break.stability]
extraversion = 0.95

[embedding]
timeout_ms = 500
"#;
    let config = PersonaConfig::from_toml(toml).unwrap();
    assert_eq!(config.inference.custom_category_discount, 0.25);
    assert!(config.inference.parallel_classification);
    assert_eq!(config.inference.tie_break.stability.extraversion, 0.95);
    // Non-overridden fields keep defaults
    assert_eq!(config.inference.tie_break.stability.openness, 0.8);
    assert_eq!(config.inference.completion_floor, 0.1);
    assert_eq!(config.embedding.timeout_ms, 500);
    assert_eq!(config.embedding.dimensions, 256);
}

#[test]
fn config_serde_roundtrip() {
    let config = PersonaConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = PersonaConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.inference.struggle_threshold,
        config.inference.struggle_threshold
    );
    assert_eq!(roundtripped.confidence.base, config.confidence.base);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = PersonaConfig::from_toml("[inference\ncompletion_floor = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseFailed { .. }));
}

#[test]
fn floor_above_ceiling_is_rejected() {
    let err = PersonaConfig::from_toml("[inference]\ncompletion_floor = 1.5").unwrap_err();
    match err {
        ConfigError::InvalidValue { field, .. } => {
            assert_eq!(field, "inference.completion_floor")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn descending_ladder_is_rejected() {
    let toml = r#"
[confidence.base]
low_below = 80
medium_below = 40
high_below = 150
"#;
    assert!(PersonaConfig::from_toml(toml).is_err());
}

#[test]
fn ladder_grades_at_boundaries() {
    let ladder = ConfidenceLadder::from_array([30, 75, 150]);
    assert_eq!(ladder.grade(0), ConfidenceLevel::Low);
    assert_eq!(ladder.grade(29), ConfidenceLevel::Low);
    assert_eq!(ladder.grade(30), ConfidenceLevel::Medium);
    assert_eq!(ladder.grade(74), ConfidenceLevel::Medium);
    assert_eq!(ladder.grade(75), ConfidenceLevel::High);
    assert_eq!(ladder.grade(150), ConfidenceLevel::VeryHigh);
}

#[test]
fn rate_bands_load_from_toml() {
    let toml = r#"
[confidence.extreme_rate_band]
low = 0.1
high = 0.9
"#;
    let config = PersonaConfig::from_toml(toml).unwrap();
    assert_eq!(config.confidence.extreme_rate_band, RateBand::from_array([0.1, 0.9]));
    assert_eq!(config.confidence.moderate_rate_band.low, 0.4);
    assert!(config.confidence.extreme_rate_band.is_outside(0.95));
    assert!(!config.confidence.extreme_rate_band.is_outside(0.85));
}

#[test]
fn moderate_band_wider_than_extreme_is_rejected() {
    let toml = r#"
[confidence.moderate_rate_band]
low = 0.1
high = 0.9
"#;
    match PersonaConfig::from_toml(toml).unwrap_err() {
        ConfigError::InvalidValue { field, .. } => {
            assert_eq!(field, "confidence.moderate_rate_band")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn inverted_rate_band_is_rejected() {
    let toml = r#"
[confidence.completed_ratio_band]
low = 0.8
high = 0.2
"#;
    assert!(PersonaConfig::from_toml(toml).is_err());
}
