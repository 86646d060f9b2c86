use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five personality dimensions scored by the engine.
///
/// Declaration order is the stable iteration order used everywhere a
/// deterministic traversal is required (tie-breaking included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl Trait {
    /// Total number of traits.
    pub const COUNT: usize = 5;

    /// All variants for iteration.
    pub const ALL: [Trait; 5] = [
        Self::Openness,
        Self::Conscientiousness,
        Self::Extraversion,
        Self::Agreeableness,
        Self::Neuroticism,
    ];

    /// Position of this trait in [`Trait::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Openness => 0,
            Self::Conscientiousness => 1,
            Self::Extraversion => 2,
            Self::Agreeableness => 3,
            Self::Neuroticism => 4,
        }
    }

    /// Snake-case identifier, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Openness => "openness",
            Self::Conscientiousness => "conscientiousness",
            Self::Extraversion => "extraversion",
            Self::Agreeableness => "agreeableness",
            Self::Neuroticism => "neuroticism",
        }
    }

    /// Short human-readable description of what a high score means.
    pub fn description(self) -> &'static str {
        match self {
            Self::Openness => "curiosity, creativity, and appetite for new experiences",
            Self::Conscientiousness => "organization, discipline, and follow-through",
            Self::Extraversion => "sociability and energy drawn from other people",
            Self::Agreeableness => "warmth, cooperation, and care for others",
            Self::Neuroticism => "sensitivity to stress and emotional volatility",
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Trait {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Trait::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown trait: {s}"))
    }
}
