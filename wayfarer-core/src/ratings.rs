//! Raw 1–5 ratings keyed by [`Dimension`].
//!
//! Ratings arrive from callers of varying data quality, so the container is
//! lenient: missing or non-numeric values are simply absent and read back as
//! `0.0` through [`RawRatings::value_or_zero`]. Nothing here ever fails.

use crate::Dimension;

/// Ratings for the six dimensions, each possibly absent.
///
/// # Examples
/// ```
/// use wayfarer_core::{Dimension, RawRatings};
///
/// let ratings = RawRatings::new()
///     .with_rating(Dimension::Climate, 5.0)
///     .with_rating(Dimension::Budget, 2.0);
/// assert_eq!(ratings.get(Dimension::Climate), Some(5.0));
/// assert_eq!(ratings.value_or_zero(Dimension::Nature), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawRatings {
    values: [Option<f64>; Dimension::COUNT],
}

impl RawRatings {
    /// Construct an empty set of ratings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [None; Dimension::COUNT],
        }
    }

    /// Construct ratings with every dimension present, in [`Dimension::ALL`]
    /// order.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::{Dimension, RawRatings};
    ///
    /// let ratings = RawRatings::from_values([5.0, 2.0, 4.0, 5.0, 5.0, 4.0]);
    /// assert_eq!(ratings.get(Dimension::Adventure), Some(4.0));
    /// ```
    #[must_use]
    pub fn from_values(values: [f64; Dimension::COUNT]) -> Self {
        let mut ratings = Self::new();
        for (dimension, value) in Dimension::ALL.into_iter().zip(values) {
            ratings.set(dimension, value);
        }
        ratings
    }

    /// Return the rating for `dimension`, if present.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.values.get(dimension.index()).copied().flatten()
    }

    /// Return the rating for `dimension`, defaulting to `0.0` when absent.
    #[must_use]
    pub fn value_or_zero(&self, dimension: Dimension) -> f64 {
        self.get(dimension).unwrap_or(0.0)
    }

    /// Insert or replace a rating.
    ///
    /// Non-finite values are treated as missing.
    pub fn set(&mut self, dimension: Dimension, value: f64) {
        if let Some(slot) = self.values.get_mut(dimension.index()) {
            *slot = value.is_finite().then_some(value);
        }
    }

    /// Remove a rating.
    pub fn clear(&mut self, dimension: Dimension) {
        if let Some(slot) = self.values.get_mut(dimension.index()) {
            *slot = None;
        }
    }

    /// Add a rating while returning `self` for chaining.
    #[must_use]
    pub fn with_rating(mut self, dimension: Dimension, value: f64) -> Self {
        self.set(dimension, value);
        self
    }

    /// Iterate over present ratings in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL
            .into_iter()
            .filter_map(|dimension| self.get(dimension).map(|value| (dimension, value)))
    }

    /// Report whether no rating is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

/// A user's stated preference strengths.
///
/// The engine only accepts this fixed six-dimension shape; categorical survey
/// answers go through a [`PreferenceTranslator`](crate::PreferenceTranslator)
/// first.
///
/// # Examples
/// ```
/// use wayfarer_core::{Dimension, PreferenceVector};
///
/// let preferences = PreferenceVector::new().with_rating(Dimension::Culture, 5.0);
/// assert_eq!(preferences.ratings().get(Dimension::Culture), Some(5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PreferenceVector(RawRatings);

impl PreferenceVector {
    /// Construct an empty preference vector.
    #[must_use]
    pub const fn new() -> Self {
        Self(RawRatings::new())
    }

    /// Borrow the underlying ratings.
    #[must_use]
    pub const fn ratings(&self) -> &RawRatings {
        &self.0
    }

    /// Insert or replace a preference strength.
    pub fn set_rating(&mut self, dimension: Dimension, value: f64) {
        self.0.set(dimension, value);
    }

    /// Add a preference strength while returning `self` for chaining.
    #[must_use]
    pub fn with_rating(mut self, dimension: Dimension, value: f64) -> Self {
        self.set_rating(dimension, value);
        self
    }
}

impl From<RawRatings> for PreferenceVector {
    fn from(ratings: RawRatings) -> Self {
        Self(ratings)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    //! Lenient (de)serialisation: ratings are a map from dimension name to a
    //! number. Unknown keys are ignored, numeric strings are accepted and any
    //! other value is treated as missing.

    use std::str::FromStr;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    use super::RawRatings;
    use crate::Dimension;

    impl Serialize for RawRatings {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let present = self.iter().count();
            let mut map = serializer.serialize_map(Some(present))?;
            for (dimension, value) in self.iter() {
                map.serialize_entry(dimension.as_str(), &value)?;
            }
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for RawRatings {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(RatingsVisitor)
        }
    }

    struct RatingsVisitor;

    impl<'de> Visitor<'de> for RatingsVisitor {
        type Value = RawRatings;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a map of dimension ratings")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut ratings = RawRatings::new();
            while let Some(key) = access.next_key::<String>()? {
                let value: Value = access.next_value()?;
                let Ok(dimension) = Dimension::from_str(&key) else {
                    continue;
                };
                if let Some(rating) = lenient_number(&value) {
                    ratings.set(dimension, rating);
                }
            }
            Ok(ratings)
        }
    }

    fn lenient_number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Decode an aggregate rating, reading anything unusable as `0.0`.
    pub(crate) fn lenient_rating<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<f64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(lenient_number(&value)
            .filter(|rating| rating.is_finite())
            .unwrap_or(0.0))
    }

    /// Decode a review count, reading anything unusable or negative as `0`.
    pub(crate) fn lenient_count<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<u64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if let Some(count) = value.as_u64() {
            return Ok(count);
        }
        Ok(lenient_number(&value).map_or(0, whole_count))
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "fractional review counts are truncated"
    )]
    #[expect(clippy::cast_sign_loss, reason = "negative counts return early")]
    fn whole_count(value: f64) -> u64 {
        if !value.is_finite() || value <= 0.0 {
            return 0;
        }
        value as u64
    }
}

#[cfg(feature = "serde")]
pub(crate) use serde_impl::{lenient_count, lenient_rating};
