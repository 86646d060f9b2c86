use serde::{Deserialize, Serialize};

use crate::personality::TraitMap;

/// A habit category, predefined or user-created.
///
/// Weights are advisory and caller-supplied: roughly in [-1, 1], never
/// normalized. A negative weight means evidence for this category lowers
/// that trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub trait_weights: Option<TraitMap>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            trait_weights: None,
        }
    }

    pub fn with_weights(mut self, weights: TraitMap) -> Self {
        self.trait_weights = Some(weights);
        self
    }
}
