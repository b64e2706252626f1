//! Scored recommendation results.

use crate::Dimension;

/// Per-dimension match strengths in `0.0..=1.0`.
///
/// # Examples
/// ```
/// use wayfarer_core::{Dimension, FactorBreakdown};
///
/// let factors = FactorBreakdown::from_fn(|dimension| match dimension {
///     Dimension::Culture => 1.0,
///     _ => 0.5,
/// });
/// assert_eq!(factors.get(Dimension::Culture), 1.0);
/// assert_eq!(factors.get(Dimension::Budget), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FactorBreakdown {
    values: [f64; Dimension::COUNT],
}

impl FactorBreakdown {
    /// Build a breakdown by evaluating `f` for every dimension.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(Dimension) -> f64) -> Self {
        let mut values = [0.0; Dimension::COUNT];
        for (slot, dimension) in values.iter_mut().zip(Dimension::ALL) {
            *slot = f(dimension);
        }
        Self { values }
    }

    /// Return the match strength for `dimension`.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> f64 {
        self.values.get(dimension.index()).copied().unwrap_or(0.0)
    }

    /// Iterate over every dimension and its strength in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().zip(self.values.iter().copied())
    }
}

/// One destination's full scoring result.
///
/// Instances are created fresh for every recommendation request. The ordering
/// of a batch of candidates is the engine's primary output.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoredCandidate {
    /// Identifier of the scored destination.
    pub destination_id: String,
    /// Display name of the destination.
    pub destination_name: String,
    /// Country of the destination.
    pub destination_country: String,
    /// Cosine similarity between normalised preference and destination
    /// vectors.
    pub similarity: f64,
    /// Per-dimension closeness of the two vectors.
    #[cfg_attr(feature = "serde", serde(rename = "factors"))]
    pub factor_breakdown: FactorBreakdown,
    /// Popularity derived from rating and review volume.
    pub popularity_score: f64,
    /// Divergence from the user's stated profile.
    pub novelty_score: f64,
    /// Score used for ranking.
    pub final_score: f64,
    /// Human-readable justification.
    pub explanation: String,
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::collections::BTreeMap;

    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::FactorBreakdown;
    use crate::Dimension;

    impl Serialize for FactorBreakdown {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(Dimension::COUNT))?;
            for (dimension, value) in self.iter() {
                map.serialize_entry(dimension.as_str(), &value)?;
            }
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for FactorBreakdown {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let entries = BTreeMap::<Dimension, f64>::deserialize(deserializer)?;
            Ok(Self::from_fn(|dimension| {
                entries.get(&dimension).copied().unwrap_or(0.0)
            }))
        }
    }
}
