use persona_classify::{TraitClassifier, WeightInference};
use persona_core::config::ClassifierConfig;
use persona_core::Trait;
use persona_embeddings::EmbeddingCapability;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ]{0,24}",
        Just("Daily meditation".to_string()),
        Just("Worry journal".to_string()),
        Just("Meet friends".to_string()),
        Just("Volunteer at shelter".to_string()),
    ]
}

proptest! {
    #[test]
    fn keyword_weights_stay_in_known_range(
        text in name_strategy(),
        rates in prop::collection::vec(0.0f64..=1.0, 0..6),
    ) {
        let c = TraitClassifier::keyword_only(ClassifierConfig::default());
        let w = c.infer_weights(&text, &rates);
        for (t, v) in w.iter() {
            prop_assert!((-0.3..=0.5).contains(&v), "{t} = {v}");
        }
    }

    #[test]
    fn unavailable_semantic_equals_keyword(
        text in name_strategy(),
        rates in prop::collection::vec(0.0f64..=1.0, 0..6),
    ) {
        let keyword = TraitClassifier::keyword_only(ClassifierConfig::default());
        let degraded = TraitClassifier::new(ClassifierConfig::default(), EmbeddingCapability::Unavailable);
        prop_assert_eq!(keyword.infer(&text, &rates), degraded.infer(&text, &rates));
    }

    #[test]
    fn high_completion_always_lifts_conscientiousness(
        text in name_strategy(),
        rate in 0.71f64..=1.0,
    ) {
        let c = TraitClassifier::keyword_only(ClassifierConfig::default());
        prop_assert!(c.infer_weights(&text, &[rate])[Trait::Conscientiousness] >= 0.4);
    }
}
