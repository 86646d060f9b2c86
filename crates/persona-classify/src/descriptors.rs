//! Descriptor phrases the semantic tier compares against. Five per trait.

use persona_core::constants::DESCRIPTORS_PER_TRAIT;
use persona_core::Trait;

const OPENNESS: [&str; DESCRIPTORS_PER_TRAIT] = [
    "learning new skills and exploring ideas",
    "reading books and studying new subjects",
    "creative hobbies like art, music, and writing",
    "trying unfamiliar experiences and travel",
    "curiosity about culture, science, and languages",
];

const CONSCIENTIOUSNESS: [&str; DESCRIPTORS_PER_TRAIT] = [
    "keeping a consistent daily routine",
    "planning, organizing, and tracking goals",
    "managing finances and sticking to a budget",
    "disciplined exercise and healthy habits",
    "finishing tasks and meeting deadlines",
];

const EXTRAVERSION: [&str; DESCRIPTORS_PER_TRAIT] = [
    "spending time with friends and socializing",
    "meeting new people and networking",
    "going to parties, events, and gatherings",
    "team sports and group activities",
    "calling and messaging people to stay in touch",
];

const AGREEABLENESS: [&str; DESCRIPTORS_PER_TRAIT] = [
    "helping others and volunteering",
    "caring for family and loved ones",
    "expressing gratitude and kindness",
    "donating to charity and supporting causes",
    "listening and being patient with people",
];

const NEUROTICISM: [&str; DESCRIPTORS_PER_TRAIT] = [
    "managing anxiety and worry",
    "coping with stress and feeling overwhelmed",
    "tracking mood swings and emotional ups and downs",
    "dealing with nervousness and panic",
    "trouble sleeping because of racing thoughts",
];

/// Descriptor phrases for one trait.
pub fn descriptors_for(t: Trait) -> &'static [&'static str; DESCRIPTORS_PER_TRAIT] {
    match t {
        Trait::Openness => &OPENNESS,
        Trait::Conscientiousness => &CONSCIENTIOUSNESS,
        Trait::Extraversion => &EXTRAVERSION,
        Trait::Agreeableness => &AGREEABLENESS,
        Trait::Neuroticism => &NEUROTICISM,
    }
}

/// Every descriptor as `(trait, phrase)`, in trait order.
pub fn all_descriptors() -> impl Iterator<Item = (Trait, &'static str)> {
    Trait::ALL
        .into_iter()
        .flat_map(|t| descriptors_for(t).iter().map(move |p| (t, *p)))
}
