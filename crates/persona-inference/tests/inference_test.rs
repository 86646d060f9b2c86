use std::sync::Arc;
use std::thread;
use std::time::Duration;

use persona_classify::ClassificationStrategy;
use persona_core::errors::{EmbeddingError, PersonaResult};
use persona_core::traits::IEmbeddingProvider;
use persona_core::*;
use persona_embeddings::{
    DegradationChain, EmbeddingCapability, HashedTermEmbedder, MAX_RETAINED_EVENTS,
};
use persona_inference::*;

fn learning_input() -> HabitAnalysisInput {
    HabitAnalysisInput {
        active_habits: vec![
            Habit::new("h1", "Read a chapter").in_category("learning"),
            Habit::new("h2", "Spanish lesson").in_category("learning"),
        ],
        predefined_categories: vec![Category::new("learning", "Learning").with_weights(
            TraitMap::from_pairs([(Trait::Openness, 0.6), (Trait::Conscientiousness, 0.1)]),
        )],
        completion_rates: vec![1.0, 0.5],
        metadata: AnalysisMetadata::new(40),
        ..Default::default()
    }
}

struct FailingProvider;
impl IEmbeddingProvider for FailingProvider {
    fn embed(&self, _text: &str) -> PersonaResult<Vec<f32>> {
        Err(EmbeddingError::ProviderUnavailable {
            provider: "failing".into(),
        }
        .into())
    }
    fn dimensions(&self) -> usize {
        64
    }
    fn name(&self) -> &str {
        "failing"
    }
    fn is_available(&self) -> bool {
        false
    }
}

struct SlowProvider;
impl IEmbeddingProvider for SlowProvider {
    fn embed(&self, _text: &str) -> PersonaResult<Vec<f32>> {
        thread::sleep(Duration::from_millis(300));
        Ok(vec![1.0; 8])
    }
    fn dimensions(&self) -> usize {
        8
    }
    fn name(&self) -> &str {
        "slow"
    }
    fn is_available(&self) -> bool {
        true
    }
}

// ── Neutrality ──────────────────────────────────────────────────────────

#[test]
fn empty_input_is_neutral_and_low_confidence() {
    let profile = TraitInferenceEngine::default().analyze(&HabitAnalysisInput::default());
    for t in Trait::ALL {
        assert_eq!(profile.score(t), 0.5, "{t}");
    }
    assert_eq!(profile.confidence, ConfidenceLevel::Low);
    assert_eq!(profile.accumulators, TraitMap::default());
    assert_eq!(profile.total_weights, TraitMap::default());
}

// ── Evidence dampening ──────────────────────────────────────────────────

#[test]
fn weak_extreme_evidence_is_dampened() {
    let mut input = learning_input();
    input
        .active_habits
        .push(Habit::new("h3", "Stretch").in_category("calm"));
    input.completion_rates.push(1.0);
    input.predefined_categories.push(
        Category::new("calm", "Calm")
            .with_weights(TraitMap::from_pairs([(Trait::Neuroticism, -0.05)])),
    );

    let profile = TraitInferenceEngine::default().analyze(&input);
    let ratio = profile.accumulators[Trait::Neuroticism] / profile.total_weights[Trait::Neuroticism];
    assert_eq!(ratio, -1.0);
    let n = profile.score(Trait::Neuroticism);
    assert!(n > 0.0 && n < 0.5, "neuroticism = {n}");
}

// ── Sign preservation ───────────────────────────────────────────────────

#[test]
fn negative_weight_lowers_score() {
    let input = HabitAnalysisInput {
        active_habits: vec![Habit::new("h1", "Yoga").in_category("wellness")],
        predefined_categories: vec![Category::new("wellness", "Wellness")
            .with_weights(TraitMap::from_pairs([(Trait::Neuroticism, -0.3)]))],
        completion_rates: vec![1.0],
        ..Default::default()
    };
    let profile = TraitInferenceEngine::default().analyze(&input);
    assert!(profile.score(Trait::Neuroticism) < 0.5);
}

// ── Monotonicity ────────────────────────────────────────────────────────

#[test]
fn higher_completion_does_not_lower_score() {
    let engine = TraitInferenceEngine::default();
    let mut low = learning_input();
    low.completion_rates = vec![0.2, 0.5];
    let mut high = learning_input();
    high.completion_rates = vec![0.9, 0.5];
    assert!(
        engine.analyze(&high).score(Trait::Openness) >= engine.analyze(&low).score(Trait::Openness)
    );
}

// ── Confidence monotonicity ─────────────────────────────────────────────

#[test]
fn confidence_never_drops_with_more_data() {
    let config = persona_core::config::ConfidenceConfig::default();
    let stats = CompletionStats::new(3, 1, 0.55);
    for with_stats in [None, Some(&stats)] {
        let mut previous = ConfidenceLevel::Low;
        for points in 0..400 {
            let level = confidence(&AnalysisMetadata::new(points), with_stats, &config);
            assert!(level >= previous);
            previous = level;
        }
    }
}

// ── Classifier fallback determinism ─────────────────────────────────────

#[test]
fn meditation_lowers_neuroticism_on_every_path() {
    let names = vec!["Daily Meditation".to_string()];
    let engines = [
        TraitInferenceEngine::keyword_only(PersonaConfig::default()),
        TraitInferenceEngine::new(PersonaConfig::default(), EmbeddingCapability::Unavailable),
        TraitInferenceEngine::new(
            PersonaConfig::default(),
            EmbeddingCapability::available(FailingProvider),
        ),
    ];
    for engine in &engines {
        let weights = engine.infer_custom_category_weights("Meditation", &names, &[0.8]);
        assert!(weights[Trait::Neuroticism] <= 0.05);
        assert_eq!(
            engine.infer_custom_category_weights("Meditation", &names, &[0.8]),
            weights
        );
    }
}

#[test]
fn slow_provider_times_out_to_keywords() {
    let mut config = PersonaConfig::default();
    config.embedding.timeout_ms = 20;
    let engine = TraitInferenceEngine::with_provider(config, Arc::new(SlowProvider)).unwrap();
    let result = engine.classify_custom_category("Worry log", &["Anxiety check-in".into()], &[]);
    assert_eq!(result.strategy, ClassificationStrategy::Keyword);
    assert_eq!(result.weights[Trait::Neuroticism], 0.5);
}

#[test]
fn degradation_chain_reaches_offline_embedder() {
    let chain = DegradationChain::new()
        .with(FailingProvider)
        .with(HashedTermEmbedder::new(256));
    let engine = TraitInferenceEngine::new(
        PersonaConfig::default(),
        EmbeddingCapability::available(chain),
    );
    let result = engine.classify_custom_category(
        "Friends",
        &["spending time with friends and socializing".into()],
        &[],
    );
    assert_eq!(result.strategy, ClassificationStrategy::Semantic);
    assert!(result.weights[Trait::Extraversion] > 0.05);
}

/// Reports itself available but errors on every call, so the chain falls back.
struct ErroringProvider;
impl IEmbeddingProvider for ErroringProvider {
    fn embed(&self, _text: &str) -> PersonaResult<Vec<f32>> {
        Err(EmbeddingError::InferenceFailed {
            reason: "model crashed".into(),
        }
        .into())
    }
    fn dimensions(&self) -> usize {
        256
    }
    fn name(&self) -> &str {
        "erroring"
    }
    fn is_available(&self) -> bool {
        true
    }
}

#[test]
fn repeated_analyses_keep_degradation_log_bounded() {
    let chain = Arc::new(
        DegradationChain::new()
            .with(ErroringProvider)
            .with(HashedTermEmbedder::new(256)),
    );
    let engine = TraitInferenceEngine::new(
        PersonaConfig::default(),
        EmbeddingCapability::Available(chain.clone()),
    );
    let input = HabitAnalysisInput {
        active_habits: vec![Habit::new("h1", "Call a friend").in_category("social")],
        custom_categories: vec![Category::new("social", "Social time")],
        completion_rates: vec![0.8],
        ..Default::default()
    };

    // One query embed plus one descriptor batch.
    engine.analyze(&input);
    assert_eq!(chain.event_count(), 2);

    for _ in 0..100 {
        engine.analyze(&input);
    }
    assert_eq!(chain.event_count(), MAX_RETAINED_EVENTS);
    assert!(chain
        .drain_events()
        .iter()
        .all(|e| e.fallback_used == "hashed-terms"));
}

// ── Tie-break determinism ───────────────────────────────────────────────

fn tied_input() -> HabitAnalysisInput {
    HabitAnalysisInput {
        active_habits: vec![Habit::new("h1", "Team practice").in_category("team")],
        predefined_categories: vec![Category::new("team", "Team")
            .with_weights(TraitMap::from_pairs([(Trait::Extraversion, 1.4)]))],
        completion_rates: vec![1.0],
        completion_stats: Some(CompletionStats::new(10, 0, 0.0)),
        ..Default::default()
    }
}

#[test]
fn exact_tie_resolves_the_same_way_every_time() {
    let engine = TraitInferenceEngine::default();
    let first = engine.analyze(&tied_input());
    assert_eq!(first.score(Trait::Extraversion), 1.0);
    assert_eq!(first.score(Trait::Neuroticism), 1.0);
    assert!(first.tie_broken);
    // Neuroticism's clamped accumulator (2.0) outweighs extraversion's (1.4).
    assert_eq!(first.dominant_trait, Trait::Neuroticism);
    for _ in 0..20 {
        assert_eq!(engine.analyze(&tied_input()).dominant_trait, first.dominant_trait);
    }
}

// ── End-to-end scenario ─────────────────────────────────────────────────

#[test]
fn learning_scenario_end_to_end() {
    let profile = TraitInferenceEngine::default().analyze(&learning_input());
    assert!(profile.score(Trait::Conscientiousness) > 0.5);
    assert!(profile.score(Trait::Openness) > 0.5);
    assert_eq!(profile.confidence, ConfidenceLevel::Medium);
    assert_eq!(profile.dominant_trait, Trait::Openness);
    assert!(!profile.tie_broken);
    assert!((profile.score(Trait::Openness) - 0.8875).abs() < 1e-9);
    assert!((profile.score(Trait::Conscientiousness) - 0.625).abs() < 1e-9);
}

#[test]
fn breakdown_attributes_openness_to_learning() {
    let profile = TraitInferenceEngine::default().analyze(&learning_input());
    let openness = profile.breakdown_for(Trait::Openness).unwrap();
    assert_eq!(
        openness.strongest_source().map(|s| &s.source),
        Some(&EvidenceSource::PredefinedCategory("learning".into()))
    );
    assert_eq!(openness.sources.len(), 2);
}

#[test]
fn accumulate_matches_profile_raw_values() {
    let engine = TraitInferenceEngine::default();
    let input = learning_input();
    let (acc, tw) = engine.accumulate(&input);
    let profile = engine.analyze(&input);
    assert_eq!(acc, profile.accumulators);
    assert_eq!(tw, profile.total_weights);
    assert_eq!(engine.score(&input), profile.score_result());
}

#[test]
fn custom_category_contributes_at_half_strength() {
    let explicit = HabitAnalysisInput {
        active_habits: vec![Habit::new("h1", "Piano").in_category("music")],
        custom_categories: vec![Category::new("music", "Music")
            .with_weights(TraitMap::from_pairs([(Trait::Openness, 0.5)]))],
        completion_rates: vec![1.0],
        ..Default::default()
    };
    let (acc, _) = TraitInferenceEngine::default().accumulate(&explicit);
    // 0.25 from the category, 0.015 from diversity.
    assert!((acc[Trait::Openness] - 0.265).abs() < 1e-12);
}

#[test]
fn pre_resolved_weights_match_inline_classification() {
    let engine = TraitInferenceEngine::default();
    let inline = HabitAnalysisInput {
        active_habits: vec![Habit::new("h1", "Volunteer at shelter").in_category("giving")],
        custom_categories: vec![Category::new("giving", "Giving back")],
        completion_rates: vec![0.6],
        ..Default::default()
    };
    let weights = engine.infer_custom_category_weights(
        "Giving back",
        &["Volunteer at shelter".into()],
        &[0.6],
    );
    let mut cached = inline.clone();
    cached.custom_categories[0].trait_weights = Some(weights);
    assert_eq!(engine.analyze(&inline), engine.analyze(&cached));
}

#[test]
fn naming_pass_reads_custom_habits() {
    let input = HabitAnalysisInput {
        custom_habits: vec![
            Habit::new("c1", "Meet new people"),
            Habit::new("c2", "Water plants"),
        ],
        ..Default::default()
    };
    let profile = TraitInferenceEngine::default().analyze(&input);
    assert_eq!(profile.accumulators[Trait::Extraversion], 0.125);
    assert_eq!(profile.score(Trait::Extraversion), 0.75);
}

#[test]
fn profile_round_trips_through_json() {
    let profile = TraitInferenceEngine::default().analyze(&learning_input());
    let json = profile.to_json().unwrap();
    assert!(json.contains("\"dominant_trait\":\"openness\""));
    assert!(json.contains("\"confidence\":\"medium\""));
    let back = PersonalityProfile::from_json(&json).unwrap();
    assert_eq!(back.dominant_trait, profile.dominant_trait);
    assert_eq!(back.breakdown.len(), 5);
    for t in Trait::ALL {
        assert!((back.score(t) - profile.score(t)).abs() < 1e-12);
    }
}
