use crate::RawRatings;

/// A destination under consideration for recommendation.
///
/// Ratings use the same six dimensions as
/// [`PreferenceVector`](crate::PreferenceVector). Quality fields are aggregate
/// traveller feedback: `average_rating` in `0.0..=5.0` and a review count.
///
/// # Examples
/// ```
/// use wayfarer_core::{DestinationAttributes, Dimension, RawRatings};
///
/// let bali = DestinationAttributes::new("bali", "Bali", "Indonesia")
///     .with_ratings(RawRatings::from_values([5.0, 2.0, 4.0, 5.0, 5.0, 4.0]))
///     .with_quality(4.5, 1250);
///
/// assert_eq!(bali.ratings.get(Dimension::Climate), Some(5.0));
/// assert_eq!(bali.total_reviews, 1250);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DestinationAttributes {
    /// Opaque identifier supplied by the storage layer.
    #[cfg_attr(feature = "serde", serde(default, alias = "_id"))]
    pub id: String,
    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Country the destination belongs to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub country: String,
    /// Raw 1–5 ratings for each dimension.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub ratings: RawRatings,
    /// Mean traveller rating in `0.0..=5.0`.
    ///
    /// Decoding reads null, non-numeric and non-finite values as `0.0`.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::ratings::lenient_rating")
    )]
    pub average_rating: f64,
    /// Number of traveller reviews.
    ///
    /// Decoding accepts numeric strings and truncates fractional counts;
    /// negative or unusable values read as `0`.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::ratings::lenient_count")
    )]
    pub total_reviews: u64,
}

impl DestinationAttributes {
    /// Construct a destination with identity fields and no ratings.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            ..Self::default()
        }
    }

    /// Replace the dimension ratings while returning `self` for chaining.
    #[must_use]
    pub const fn with_ratings(mut self, ratings: RawRatings) -> Self {
        self.ratings = ratings;
        self
    }

    /// Replace the quality fields while returning `self` for chaining.
    #[must_use]
    pub const fn with_quality(mut self, average_rating: f64, total_reviews: u64) -> Self {
        self.average_rating = average_rating;
        self.total_reviews = total_reviews;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimension;
    use rstest::rstest;

    #[rstest]
    fn new_destination_has_no_ratings() {
        let destination = DestinationAttributes::new("d1", "Reykjavik", "Iceland");
        assert!(destination.ratings.is_empty());
        assert_eq!(destination.average_rating, 0.0);
        assert_eq!(destination.total_reviews, 0);
    }

    #[rstest]
    fn builders_replace_fields() {
        let destination = DestinationAttributes::new("d1", "Reykjavik", "Iceland")
            .with_ratings(RawRatings::new().with_rating(Dimension::Nature, 5.0))
            .with_quality(4.6, 980);
        assert_eq!(destination.ratings.get(Dimension::Nature), Some(5.0));
        assert_eq!(destination.average_rating, 4.6);
        assert_eq!(destination.total_reviews, 980);
    }
}
