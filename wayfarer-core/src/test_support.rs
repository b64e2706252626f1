//! Fixture builders shared by unit, behaviour and property tests.

use crate::{DestinationAttributes, PreferenceVector, RawRatings};

/// Build a preference vector from six ratings in canonical dimension order.
#[must_use]
pub fn preferences(values: [f64; 6]) -> PreferenceVector {
    PreferenceVector::from(RawRatings::from_values(values))
}

/// Build a fully rated destination whose name and country derive from `id`.
#[must_use]
pub fn destination(
    id: &str,
    values: [f64; 6],
    average_rating: f64,
    total_reviews: u64,
) -> DestinationAttributes {
    DestinationAttributes::new(id, format!("Destination {id}"), "Testland")
        .with_ratings(RawRatings::from_values(values))
        .with_quality(average_rating, total_reviews)
}

/// A small catalogue drawn from real-world destinations.
#[must_use]
pub fn sample_catalogue() -> Vec<DestinationAttributes> {
    vec![
        DestinationAttributes::new("bali", "Bali", "Indonesia")
            .with_ratings(RawRatings::from_values([5.0, 2.0, 4.0, 5.0, 5.0, 4.0]))
            .with_quality(4.5, 1250),
        DestinationAttributes::new("tokyo", "Tokyo", "Japan")
            .with_ratings(RawRatings::from_values([4.0, 4.0, 3.0, 5.0, 2.0, 5.0]))
            .with_quality(4.7, 2100),
        DestinationAttributes::new("santorini", "Santorini", "Greece")
            .with_ratings(RawRatings::from_values([4.0, 3.0, 2.0, 4.0, 3.0, 3.0]))
            .with_quality(4.8, 1800),
        DestinationAttributes::new("reykjavik", "Reykjavik", "Iceland")
            .with_ratings(RawRatings::from_values([1.0, 4.0, 5.0, 3.0, 5.0, 3.0]))
            .with_quality(4.6, 640),
        DestinationAttributes::new("ibiza", "Ibiza", "Spain")
            .with_ratings(RawRatings::from_values([4.0, 4.0, 2.0, 2.0, 3.0, 5.0]))
            .with_quality(4.1, 300),
    ]
}
