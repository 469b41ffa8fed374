//! Per-avatar personality state over the fixed axis registry.
//!
//! Each axis stores a single degree of freedom, the first pole's value in
//! [0.0, 1.0], and derives the second pole as its complement. Collapsing to
//! one stored number per axis is what keeps the sum-to-one invariant exact
//! under arbitrarily many updates; there is no second value to drift.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::personality::axis::{TraitAxis, AXIS_COUNT};
use crate::utilities::errors::TraitError;

/// Midpoint value every axis starts at when no explicit pair is supplied.
const BALANCED: f64 = 0.5;

/// The current value of every registered trait axis.
///
/// Created once per avatar at character-creation time and mutated only
/// through [`Personality::set`] (the update policy engine's single write
/// path). Lives as long as the owning avatar.
#[derive(Debug, Clone, PartialEq)]
pub struct Personality {
    /// First-pole value per axis, indexed by registry order.
    values: [f64; AXIS_COUNT],
}

impl Default for Personality {
    fn default() -> Self {
        Self::new()
    }
}

impl Personality {
    /// Create a personality with every axis balanced at (0.5, 0.5).
    pub fn new() -> Self {
        Self {
            values: [BALANCED; AXIS_COUNT],
        }
    }

    /// Create a personality from explicit `(pole1, pole2)` pairs.
    ///
    /// Each supplied pair is normalized by its sum; a zero-sum pair falls
    /// back to (0.5, 0.5). Axes without a supplied pair stay balanced.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (TraitAxis, (f64, f64))>,
    {
        let mut state = Self::new();
        for (axis, pair) in pairs {
            state.values[axis.index()] = normalize_pair(pair).0;
        }
        state
    }

    /// Current `(pole1, pole2)` values for an axis.
    pub fn get(&self, axis: TraitAxis) -> (f64, f64) {
        let v1 = self.values[axis.index()];
        (v1, 1.0 - v1)
    }

    /// Set an axis's first-pole value; the second pole becomes `1 - value`.
    ///
    /// This is the only mutation path and it guarantees the sum-to-one
    /// invariant unconditionally. Fails with [`TraitError::OutOfRange`] for
    /// values outside [0.0, 1.0] (NaN included).
    pub fn set(&mut self, axis: TraitAxis, value: f64) -> Result<(), TraitError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(TraitError::OutOfRange { value });
        }
        self.values[axis.index()] = value;
        Ok(())
    }

    /// Read-only snapshot of every axis as `(axis, pole1, pole2)`, in
    /// registry order.
    pub fn snapshot(&self) -> Vec<(TraitAxis, f64, f64)> {
        TraitAxis::ALL
            .iter()
            .map(|&axis| {
                let (v1, v2) = self.get(axis);
                (axis, v1, v2)
            })
            .collect()
    }
}

/// Normalize a `(pole1, pole2)` pair by its sum, defaulting to the balanced
/// midpoint when the sum is zero.
fn normalize_pair(pair: (f64, f64)) -> (f64, f64) {
    let total = pair.0 + pair.1;
    if total == 0.0 {
        return (BALANCED, BALANCED);
    }
    (pair.0 / total, pair.1 / total)
}

// ---------------------------------------------------------------------------
// Serde: ordered map of axis identifier to pair
// ---------------------------------------------------------------------------

impl Serialize for Personality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(AXIS_COUNT))?;
        for (axis, v1, v2) in self.snapshot() {
            map.serialize_entry(axis.name(), &(v1, v2))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Personality {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairMapVisitor;

        impl<'de> Visitor<'de> for PairMapVisitor {
            type Value = Personality;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of trait axis identifiers to value pairs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs: HashMap<TraitAxis, (f64, f64)> = HashMap::new();
                while let Some((name, pair)) = access.next_entry::<String, (f64, f64)>()? {
                    let axis = TraitAxis::parse(&name).map_err(serde::de::Error::custom)?;
                    pairs.insert(axis, pair);
                }
                Ok(Personality::from_pairs(pairs))
            }
        }

        deserializer.deserialize_map(PairMapVisitor)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
