use persona_core::config::ConfidenceConfig;
use persona_core::*;
use persona_inference::{confidence, TraitInferenceEngine};
use proptest::prelude::*;

fn arb_trait() -> impl Strategy<Value = Trait> {
    prop_oneof![
        Just(Trait::Openness),
        Just(Trait::Conscientiousness),
        Just(Trait::Extraversion),
        Just(Trait::Agreeableness),
        Just(Trait::Neuroticism),
    ]
}

fn arb_weights() -> impl Strategy<Value = TraitMap> {
    prop::collection::vec((arb_trait(), -1.0f64..=1.0), 0..5).prop_map(TraitMap::from_pairs)
}

fn arb_stats() -> impl Strategy<Value = Option<CompletionStats>> {
    prop::option::of((0u32..30, 0.0f64..=1.0).prop_flat_map(|(total, rate)| {
        (Just(total), 0..=total, Just(rate))
            .prop_map(|(total, done, rate)| CompletionStats::new(total, done, rate))
    }))
}

/// Random snapshot: categories c0..c3 predefined, u0..u1 custom, habits
/// assigned to any of them or to none.
fn arb_input() -> impl Strategy<Value = HabitAnalysisInput> {
    let predefined = prop::collection::vec(prop::option::of(arb_weights()), 4);
    let custom = prop::collection::vec(prop::option::of(arb_weights()), 2);
    let habits = prop::collection::vec(
        (prop::option::of(0usize..7), "[a-z ]{1,16}"),
        0..10,
    );
    let custom_names = prop::collection::vec("(meet|friend|read|walk|calm) [a-z]{0,8}", 0..4);
    let rates = prop::collection::vec(0.0f64..=1.0, 0..12);
    (predefined, custom, habits, custom_names, rates, arb_stats(), 0u32..300).prop_map(
        |(predefined, custom, habits, custom_names, rates, stats, points)| HabitAnalysisInput {
            active_habits: habits
                .into_iter()
                .enumerate()
                .map(|(i, (slot, name))| {
                    let habit = Habit::new(format!("h{i}"), name);
                    match slot {
                        Some(s) if s < 4 => habit.in_category(format!("c{s}")),
                        Some(s) if s < 6 => habit.in_category(format!("u{}", s - 4)),
                        _ => habit,
                    }
                })
                .collect(),
            predefined_categories: predefined
                .into_iter()
                .enumerate()
                .map(|(i, w)| Category {
                    id: format!("c{i}"),
                    name: format!("Category {i}"),
                    trait_weights: w,
                })
                .collect(),
            custom_categories: custom
                .into_iter()
                .enumerate()
                .map(|(i, w)| Category {
                    id: format!("u{i}"),
                    name: format!("Custom {i}"),
                    trait_weights: w,
                })
                .collect(),
            custom_habits: custom_names
                .into_iter()
                .enumerate()
                .map(|(i, n)| Habit::new(format!("x{i}"), n))
                .collect(),
            completion_rates: rates,
            completion_stats: stats,
            metadata: AnalysisMetadata::new(points),
        },
    )
}

proptest! {
    #[test]
    fn scores_are_bounded(input in arb_input()) {
        let profile = TraitInferenceEngine::default().analyze(&input);
        for (t, s) in profile.scores.iter() {
            prop_assert!((0.0..=1.0).contains(&s), "{t} = {s}");
            if profile.total_weights[t] <= 0.001 {
                prop_assert_eq!(s, 0.5);
            }
        }
        prop_assert!(profile.scores[profile.dominant_trait] == profile.scores.max_value());
    }

    #[test]
    fn analysis_is_deterministic(input in arb_input()) {
        let engine = TraitInferenceEngine::default();
        prop_assert_eq!(engine.analyze(&input), engine.analyze(&input));
    }

    #[test]
    fn total_weights_are_non_negative(input in arb_input()) {
        let (_, tw) = TraitInferenceEngine::default().accumulate(&input);
        for (_, w) in tw.iter() {
            prop_assert!(w >= 0.0);
        }
    }

    #[test]
    fn completion_is_monotone_for_positive_weight(
        weight in 0.05f64..=1.0,
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let build = |rate: f64| HabitAnalysisInput {
            active_habits: vec![Habit::new("h1", "Sketch").in_category("art")],
            predefined_categories: vec![Category::new("art", "Art")
                .with_weights(TraitMap::from_pairs([(Trait::Openness, weight)]))],
            completion_rates: vec![rate],
            ..Default::default()
        };
        let engine = TraitInferenceEngine::default();
        let s_low = engine.analyze(&build(low)).score(Trait::Openness);
        let s_high = engine.analyze(&build(high)).score(Trait::Openness);
        prop_assert!(s_high >= s_low - 1e-12, "{s_low} -> {s_high}");
    }

    #[test]
    fn confidence_is_monotone_in_data_points(
        a in 0u32..500,
        b in 0u32..500,
        stats in arb_stats(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let config = ConfidenceConfig::default();
        let c_low = confidence(&AnalysisMetadata::new(low), stats.as_ref(), &config);
        let c_high = confidence(&AnalysisMetadata::new(high), stats.as_ref(), &config);
        prop_assert!(c_high >= c_low);
    }
}
