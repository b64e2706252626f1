//! Rank destinations for a user's preferences.
//!
//! The `Recommender` trait turns a [`PreferenceVector`](crate::PreferenceVector)
//! and a slice of [`DestinationAttributes`](crate::DestinationAttributes) into
//! an ordered list of [`ScoredCandidate`](crate::ScoredCandidate)s.

use crate::{DestinationAttributes, PreferenceVector, ScoredCandidate};

/// Produce a ranked, explained list of destinations.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a recommender can
/// be shared across request handlers. The method is infallible: absent
/// preferences, an empty catalogue or a zero `limit` yield an empty list, and
/// malformed records are scored defensively rather than rejected.
///
/// Implementations must:
/// - Return at most `limit` candidates, best first.
/// - Produce finite scores within `0.0..=1.0`.
/// - Be deterministic for identical inputs.
///
/// Use [`sanitise`] and [`settle`] to apply the score guards.
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::{DestinationAttributes, PreferenceVector, Recommender, ScoredCandidate};
///
/// struct CatalogueOrder;
///
/// impl Recommender for CatalogueOrder {
///     fn recommend(
///         &self,
///         preferences: Option<&PreferenceVector>,
///         destinations: &[DestinationAttributes],
///         limit: usize,
///     ) -> Vec<ScoredCandidate> {
///         if preferences.is_none() {
///             return Vec::new();
///         }
///         destinations
///             .iter()
///             .take(limit)
///             .map(|destination| ScoredCandidate {
///                 destination_id: destination.id.clone(),
///                 ..ScoredCandidate::default()
///             })
///             .collect()
///     }
/// }
///
/// let destinations = vec![DestinationAttributes::new("a", "A", "X")];
/// let ranked = CatalogueOrder.recommend(Some(&PreferenceVector::new()), &destinations, 5);
/// assert_eq!(ranked.len(), 1);
/// ```
pub trait Recommender: Send + Sync {
    /// Rank `destinations` against `preferences`, returning at most `limit`
    /// results.
    fn recommend(
        &self,
        preferences: Option<&PreferenceVector>,
        destinations: &[DestinationAttributes],
        limit: usize,
    ) -> Vec<ScoredCandidate>;
}

/// Clamp a raw score into `0.0..=1.0`, mapping non-finite values to `0.0`.
///
/// # Examples
/// ```
/// use wayfarer_core::sanitise;
///
/// assert_eq!(sanitise(f64::NAN), 0.0);
/// assert_eq!(sanitise(1.4), 1.0);
/// assert_eq!(sanitise(-0.2), 0.0);
/// ```
#[must_use]
pub const fn sanitise(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Number of grid steps per unit that [`settle`] snaps scores onto.
pub const SCORE_GRID: f64 = 1e12;

/// Sanitise a score and snap it onto a `1e-12` grid.
///
/// Rounding noise such as `0.9999999999999998` settles to `1.0`, so scores
/// that are mathematically equal compare equal bitwise.
///
/// # Examples
/// ```
/// use wayfarer_core::settle;
///
/// assert_eq!(settle(0.999_999_999_999_999_8), 1.0);
/// assert_eq!(settle(f64::NAN), 0.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "snapping scales onto a fixed grid")]
pub const fn settle(score: f64) -> f64 {
    sanitise((sanitise(score) * SCORE_GRID).round() / SCORE_GRID)
}
