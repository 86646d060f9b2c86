//! Per-trait audit trail: which sources moved each score, and by how much.

use std::collections::BTreeMap;

use persona_core::Trait;
use serde::{Deserialize, Serialize};

use crate::ledger::{EvidenceLedger, EvidenceSource};
use crate::normalizer::ScoreResult;

/// Net contribution of one source to one trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceContribution {
    pub source: EvidenceSource,
    pub contribution: f64,
    pub evidence: f64,
}

/// Score, raw values, and contributing sources for a single trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitBreakdown {
    #[serde(rename = "trait")]
    pub trait_kind: Trait,
    pub score: f64,
    pub accumulator: f64,
    pub total_weight: f64,
    /// Sorted by evidence, largest first.
    pub sources: Vec<SourceContribution>,
}

impl TraitBreakdown {
    /// The source carrying the most evidence, if any.
    pub fn strongest_source(&self) -> Option<&SourceContribution> {
        self.sources.first()
    }
}

/// One breakdown per trait, in declaration order.
pub fn build(ledger: &EvidenceLedger, scores: &ScoreResult) -> Vec<TraitBreakdown> {
    Trait::ALL
        .into_iter()
        .map(|t| {
            let mut per_source: BTreeMap<&EvidenceSource, (f64, f64)> = BTreeMap::new();
            for entry in ledger.for_trait(t) {
                let slot = per_source.entry(&entry.source).or_default();
                slot.0 += entry.contribution;
                slot.1 += entry.evidence;
            }
            let mut sources: Vec<SourceContribution> = per_source
                .into_iter()
                .map(|(source, (contribution, evidence))| SourceContribution {
                    source: source.clone(),
                    contribution,
                    evidence,
                })
                .collect();
            sources.sort_by(|a, b| b.evidence.total_cmp(&a.evidence));

            TraitBreakdown {
                trait_kind: t,
                score: scores.scores[t],
                accumulator: scores.accumulators[t],
                total_weight: scores.total_weights[t],
                sources,
            }
        })
        .collect()
}
