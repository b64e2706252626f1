//! Cosine similarity and per-dimension match strength.
//!
//! Both measures operate on normalised vectors. The public entry points take
//! raw ratings and normalise internally so callers never handle the
//! intermediate representation.
#![forbid(unsafe_code)]

use wayfarer_core::{FactorBreakdown, RawRatings, settle};

use crate::vector::{NormalizedVector, normalize};

/// Cosine similarity between a user's and a destination's ratings.
///
/// Returns `0.0` when either normalised vector has zero magnitude. The result
/// is clamped to `0.0..=1.0` and settled onto the shared score grid, so
/// parallel vectors score exactly `1.0`.
///
/// # Examples
/// ```
/// use wayfarer_core::RawRatings;
/// use wayfarer_scorer::similarity;
///
/// let user = RawRatings::from_values([3.0; 6]);
/// let destination = RawRatings::from_values([1.0; 6]);
/// assert_eq!(similarity(&user, &destination), 0.0);
/// ```
#[must_use]
pub fn similarity(user: &RawRatings, destination: &RawRatings) -> f64 {
    cosine(&normalize(user), &normalize(destination))
}

/// Per-dimension closeness `max(0, 1 - |user - destination|)` on normalised
/// values.
///
/// # Examples
/// ```
/// use wayfarer_core::{Dimension, RawRatings};
/// use wayfarer_scorer::factor_breakdown;
///
/// let user = RawRatings::from_values([5.0, 3.0, 3.0, 3.0, 3.0, 3.0]);
/// let destination = RawRatings::from_values([1.0, 3.0, 3.0, 3.0, 3.0, 3.0]);
/// let factors = factor_breakdown(&user, &destination);
/// assert_eq!(factors.get(Dimension::Climate), 0.0);
/// assert_eq!(factors.get(Dimension::Budget), 1.0);
/// ```
#[must_use]
pub fn factor_breakdown(user: &RawRatings, destination: &RawRatings) -> FactorBreakdown {
    factor_strengths(&normalize(user), &normalize(destination))
}

#[expect(
    clippy::float_arithmetic,
    reason = "cosine similarity requires dot products and square roots"
)]
pub(crate) fn cosine(user: &NormalizedVector, destination: &NormalizedVector) -> f64 {
    let (dot, user_norm, destination_norm) = user.iter().zip(destination.iter()).fold(
        (0.0_f64, 0.0_f64, 0.0_f64),
        |(dot, user_norm, destination_norm), (u, d)| {
            (dot + u * d, user_norm + u * u, destination_norm + d * d)
        },
    );
    if user_norm == 0.0 || destination_norm == 0.0 {
        return 0.0;
    }
    settle(dot / (user_norm.sqrt() * destination_norm.sqrt()))
}

#[expect(
    clippy::float_arithmetic,
    reason = "match strength is a linear closeness measure"
)]
pub(crate) fn factor_strengths(
    user: &NormalizedVector,
    destination: &NormalizedVector,
) -> FactorBreakdown {
    FactorBreakdown::from_fn(|dimension| {
        let distance = (user.get(dimension) - destination.get(dimension)).abs();
        settle(1.0 - distance)
    })
}
