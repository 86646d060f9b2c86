//! Structured evidence accumulation.
//!
//! Every pass appends `(source, trait, contribution, evidence)` entries.
//! Accumulators and total weights are folded from the ledger, and the
//! tie-break's source diversity is counted from it directly.

use std::collections::HashSet;
use std::fmt;

use persona_core::{Trait, TraitMap};
use serde::{Deserialize, Serialize};

/// Which signal produced a piece of evidence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EvidenceSource {
    PredefinedCategory(String),
    CustomCategory(String),
    CompletionRate,
    Diversity,
    Naming,
}

impl fmt::Display for EvidenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PredefinedCategory(id) => write!(f, "predefined:{id}"),
            Self::CustomCategory(id) => write!(f, "custom:{id}"),
            Self::CompletionRate => f.write_str("completion_rate"),
            Self::Diversity => f.write_str("diversity"),
            Self::Naming => f.write_str("naming"),
        }
    }
}

/// One signed contribution and its (non-negative) evidence magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceEntry {
    pub source: EvidenceSource,
    #[serde(rename = "trait")]
    pub trait_kind: Trait,
    pub contribution: f64,
    pub evidence: f64,
}

/// Append-only list of evidence entries, in pass order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceLedger {
    entries: Vec<EvidenceEntry>,
}

impl EvidenceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a contribution whose evidence is its own magnitude.
    pub fn record_signed(&mut self, source: EvidenceSource, t: Trait, contribution: f64) {
        self.record(source, t, contribution, contribution.abs());
    }

    /// Record a contribution with an explicit evidence weight.
    pub fn record(&mut self, source: EvidenceSource, t: Trait, contribution: f64, evidence: f64) {
        self.entries.push(EvidenceEntry {
            source,
            trait_kind: t,
            contribution,
            evidence: evidence.abs(),
        });
    }

    pub fn entries(&self) -> &[EvidenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn for_trait(&self, t: Trait) -> impl Iterator<Item = &EvidenceEntry> + '_ {
        self.entries.iter().filter(move |e| e.trait_kind == t)
    }

    /// Signed sum of contributions per trait.
    pub fn accumulators(&self) -> TraitMap {
        let mut acc = TraitMap::default();
        for e in &self.entries {
            acc.add(e.trait_kind, e.contribution);
        }
        acc
    }

    /// Sum of evidence magnitudes per trait.
    pub fn total_weights(&self) -> TraitMap {
        let mut tw = TraitMap::default();
        for e in &self.entries {
            tw.add(e.trait_kind, e.evidence);
        }
        tw
    }

    pub fn fold(&self) -> (TraitMap, TraitMap) {
        (self.accumulators(), self.total_weights())
    }

    /// Number of distinct sources that contributed more than `epsilon`
    /// evidence to `t`. Each category counts as its own source.
    pub fn distinct_sources(&self, t: Trait, epsilon: f64) -> usize {
        self.for_trait(t)
            .filter(|e| e.evidence > epsilon)
            .map(|e| &e.source)
            .collect::<HashSet<_>>()
            .len()
    }
}

impl Extend<EvidenceEntry> for EvidenceLedger {
    fn extend<I: IntoIterator<Item = EvidenceEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
