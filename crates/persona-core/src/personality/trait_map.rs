use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Trait;

/// Fixed-key map from [`Trait`] to a real value, backed by an array indexed
/// by trait ordinal.
///
/// Serializes as a `{ "openness": 0.6, ... }` object. Traits missing from
/// the serialized form read back as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TraitMap([f64; Trait::COUNT]);

impl TraitMap {
    /// A map with every trait set to `value`.
    pub fn filled(value: f64) -> Self {
        Self([value; Trait::COUNT])
    }

    /// Build from `(trait, value)` pairs. Later pairs overwrite earlier ones.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Trait, f64)>) -> Self {
        let mut map = Self::default();
        for (t, v) in pairs {
            map[t] = v;
        }
        map
    }

    pub fn get(&self, t: Trait) -> f64 {
        self.0[t.index()]
    }

    pub fn set(&mut self, t: Trait, value: f64) {
        self.0[t.index()] = value;
    }

    /// Add `delta` to the value held for `t`.
    pub fn add(&mut self, t: Trait, delta: f64) {
        self.0[t.index()] += delta;
    }

    /// Iterate `(trait, value)` in [`Trait::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Trait, f64)> + '_ {
        Trait::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    /// Pairs whose value is not exactly zero.
    pub fn non_zero(&self) -> impl Iterator<Item = (Trait, f64)> + '_ {
        self.iter().filter(|(_, v)| *v != 0.0)
    }

    /// Largest value across all traits.
    pub fn max_value(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn as_array(&self) -> &[f64; Trait::COUNT] {
        &self.0
    }
}

impl Index<Trait> for TraitMap {
    type Output = f64;
    fn index(&self, t: Trait) -> &f64 {
        &self.0[t.index()]
    }
}

impl IndexMut<Trait> for TraitMap {
    fn index_mut(&mut self, t: Trait) -> &mut f64 {
        &mut self.0[t.index()]
    }
}

impl FromIterator<(Trait, f64)> for TraitMap {
    fn from_iter<I: IntoIterator<Item = (Trait, f64)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl Serialize for TraitMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map: BTreeMap<Trait, f64> = self.iter().collect();
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TraitMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<Trait, f64>::deserialize(deserializer)?;
        Ok(Self::from_pairs(map))
    }
}
