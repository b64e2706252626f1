//! Destination quality signals: popularity and novelty.
#![forbid(unsafe_code)]

use wayfarer_core::{DestinationAttributes, Dimension, RawRatings, sanitise, settle};

use crate::PopularityWeights;
use crate::vector::RATING_SPAN;

/// Upper bound of the aggregate average rating.
pub const MAX_AVERAGE_RATING: f64 = 5.0;

/// Popularity from the destination's average rating and review volume.
///
/// The review term grows with `log10(reviews + 1)` and saturates at
/// [`PopularityWeights::review_saturation`]. Missing or non-finite ratings
/// contribute nothing.
///
/// # Examples
/// ```
/// use wayfarer_core::DestinationAttributes;
/// use wayfarer_scorer::{PopularityWeights, popularity};
///
/// let destination = DestinationAttributes::new("x", "X", "Y").with_quality(5.0, 1_000);
/// let score = popularity(&destination, PopularityWeights::default());
/// assert!((score - 1.0).abs() < 1e-9);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "popularity blends two weighted fractions"
)]
pub fn popularity(destination: &DestinationAttributes, weights: PopularityWeights) -> f64 {
    let rating = sanitise(destination.average_rating / MAX_AVERAGE_RATING);
    let volume = review_volume(destination.total_reviews, weights.review_saturation);
    settle(rating * weights.rating_weight + volume * weights.review_weight)
}

#[expect(
    clippy::float_arithmetic,
    reason = "review volume is a ratio of logarithms"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "review counts far beyond 2^52 only lose precision past saturation"
)]
fn review_volume(total_reviews: u64, saturation: u64) -> f64 {
    let ceiling = (saturation as f64 + 1.0).log10();
    if ceiling <= 0.0 {
        return 0.0;
    }
    sanitise((total_reviews as f64 + 1.0).log10() / ceiling)
}

/// Novelty as the mean absolute distance between raw ratings.
///
/// Distances are summed over all six dimensions, with absent ratings read as
/// `0`, and divided by the largest in-range distance (`6 × 4`). The result
/// is clamped to `0.0..=1.0`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "novelty sums absolute rating differences"
)]
pub fn novelty(user: &RawRatings, destination: &RawRatings) -> f64 {
    let distance: f64 = Dimension::ALL
        .iter()
        .map(|&dimension| (user.value_or_zero(dimension) - destination.value_or_zero(dimension)).abs())
        .sum();
    settle(distance / max_total_distance())
}

#[expect(
    clippy::float_arithmetic,
    reason = "scale width multiplied by dimension count"
)]
#[expect(clippy::cast_precision_loss, reason = "dimension count is six")]
const fn max_total_distance() -> f64 {
    Dimension::COUNT as f64 * RATING_SPAN
}
