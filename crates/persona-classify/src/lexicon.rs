//! Curated keyword lexicons, matched as lowercase substrings.
//!
//! Terms are stems or short phrases; a few common words are avoided because
//! they occur inside unrelated words ("art" in "start", "plan" in "plant").
//! A term with a leading space only matches at the start of a word, so
//! `" host"` hits "hosting" but not "ghost".

use persona_core::Trait;

pub const OPENNESS_TERMS: &[&str] = &[
    "learn", "reading", "book", "artist", "paint", "draw", "sketch", "music", "instrument",
    "guitar", "piano", "creative", "writing", "poetry", "language", "explore", "travel",
    "photograph", "craft", "course", "podcast", "design", "museum", "curious", "experiment",
];

pub const CONSCIENTIOUSNESS_TERMS: &[&str] = &[
    "planner", "planning", "organiz", "clean", "tidy", "declutter", "budget", "finance", "saving",
    "schedule", "routine", "goal", "track", "deadline", "homework", "productiv", "meal prep",
    "workout", "gym", " early", "wake up", "inbox", "study", "discipline", "chores",
];

pub const EXTRAVERSION_TERMS: &[&str] = &[
    "social", "friend", "party", "meet", "call ", "network", "group", "club", "dance",
    "community", "chat", " event", "public speaking", "team sport", "teammate", "hangout",
    " host", "outing",
];

pub const AGREEABLENESS_TERMS: &[&str] = &[
    "help", "volunteer", "donat", "kindness", "family", "gratitude", "grateful", "caregiv",
    "care for", "support", "charity", "thank", "compliment", "mentor", "listen", "forgive",
    "neighbor", "neighbour", "share",
];

/// Language suggesting the category tracks a source of stress.
pub const STRESS_TERMS: &[&str] = &[
    "anxiety", "anxious", "worry", "worried", "stress", "overwhelm", "panic", "nervous",
    "insomnia", "burnout", "fear", "racing thoughts", "mood swing", "restless",
];

/// Language suggesting the category is a way of coping, which lowers neuroticism.
pub const COPING_TERMS: &[&str] = &[
    "mindful", "calm", "therapy", "therapist", "meditat", "breath", "relax", "yoga", "journal",
    "self-care", "self care", "unwind", "grounding", "sleep hygiene", "decompress",
];

/// The keyword list for a trait. Neuroticism uses the stress list; its
/// coping counterpart is handled by [`crate::overrides`].
pub fn terms_for(t: Trait) -> &'static [&'static str] {
    match t {
        Trait::Openness => OPENNESS_TERMS,
        Trait::Conscientiousness => CONSCIENTIOUSNESS_TERMS,
        Trait::Extraversion => EXTRAVERSION_TERMS,
        Trait::Agreeableness => AGREEABLENESS_TERMS,
        Trait::Neuroticism => STRESS_TERMS,
    }
}

/// Whether `haystack` (already lowercased) contains any of `terms`.
pub fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| match term.strip_prefix(' ') {
        Some(word) => haystack.starts_with(word) || haystack.contains(term),
        None => haystack.contains(term),
    })
}

/// Join a category name and its habit names into one lowercase text.
pub fn combined_text(category_name: &str, habit_names: &[String]) -> String {
    let mut text = category_name.to_lowercase();
    for name in habit_names {
        text.push(' ');
        text.push_str(&name.to_lowercase());
    }
    text
}
