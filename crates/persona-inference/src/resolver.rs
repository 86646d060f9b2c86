//! Dominant-trait selection with a composite tie-break.
//!
//! Exact score ties are resolved by
//!
//! ```text
//! 0.4 * accumulator
//! + 0.3 * distinct_sources / 10
//! + 0.2 * stability(trait)
//! + 0.1 * recency(trait)          (0.1 for conscientiousness, else 0)
//! ```
//!
//! Candidates are visited in declaration order and only a strictly greater
//! composite displaces the current winner.

use persona_core::config::TieBreakConfig;
use persona_core::Trait;
use persona_observability::events;
use serde::{Deserialize, Serialize};

use crate::ledger::EvidenceLedger;
use crate::normalizer::ScoreResult;

/// Outcome of dominant-trait resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub dominant: Trait,
    /// Traits sharing the maximum score. A single element when there was no tie.
    pub tied: Vec<Trait>,
    /// Winning composite, present only when a tie was broken.
    pub composite: Option<f64>,
}

impl Resolution {
    pub fn was_tied(&self) -> bool {
        self.tied.len() > 1
    }
}

pub fn resolve_dominant(
    scores: &ScoreResult,
    ledger: &EvidenceLedger,
    config: &TieBreakConfig,
    epsilon: f64,
) -> Resolution {
    let max = scores.max_score();
    let tied: Vec<Trait> = Trait::ALL
        .into_iter()
        .filter(|t| scores.score(*t) == max)
        .collect();

    let Some(&first) = tied.first() else {
        return Resolution {
            dominant: Trait::Conscientiousness,
            tied,
            composite: None,
        };
    };
    let mut winner = first;
    if tied.len() == 1 {
        return Resolution {
            dominant: winner,
            tied,
            composite: None,
        };
    }

    let mut best = composite_score(winner, scores, ledger, config, epsilon);
    for &t in &tied[1..] {
        let c = composite_score(t, scores, ledger, config, epsilon);
        if c > best {
            best = c;
            winner = t;
        }
    }

    let names: Vec<String> = tied.iter().map(|t| t.as_str().to_string()).collect();
    events::tie_break_resolved(&names, winner.as_str(), best);

    Resolution {
        dominant: winner,
        tied,
        composite: Some(best),
    }
}

/// Composite used to order tied traits.
pub fn composite_score(
    t: Trait,
    scores: &ScoreResult,
    ledger: &EvidenceLedger,
    config: &TieBreakConfig,
    epsilon: f64,
) -> f64 {
    let diversity = ledger.distinct_sources(t, epsilon) as f64 / config.diversity_divisor;
    let recency = if t == Trait::Conscientiousness {
        config.recency_bonus
    } else {
        0.0
    };
    config.accumulator_weight * scores.accumulators[t]
        + config.diversity_weight * diversity
        + config.stability_weight * config.stability.get(t)
        + config.recency_weight * recency
}
