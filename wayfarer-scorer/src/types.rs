//! Public tuning types for blending and popularity scoring.
#![forbid(unsafe_code)]

use crate::RankingError;

/// Default share of the final score taken by preference similarity.
pub const DEFAULT_SIMILARITY_WEIGHT: f64 = 0.6;
/// Default share of the final score taken by popularity.
pub const DEFAULT_POPULARITY_WEIGHT: f64 = 0.3;
/// Default share of the final score taken by novelty.
pub const DEFAULT_NOVELTY_WEIGHT: f64 = 0.1;

/// Relative weighting of the three hybrid signals.
///
/// The blend divides by the total weight, so only the proportions matter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RankingWeights {
    /// Multiplier applied to cosine similarity.
    pub similarity: f64,
    /// Multiplier applied to the popularity signal.
    pub popularity: f64,
    /// Multiplier applied to the novelty signal.
    pub novelty: f64,
}

impl RankingWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`RankingError::InvalidWeights`] when any value is not finite,
    /// any value is negative, or the total weight is zero.
    pub const fn validate(self) -> Result<Self, RankingError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(RankingError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_non_zero_total()
    }

    const fn has_finite_values(self) -> bool {
        self.similarity.is_finite() && self.popularity.is_finite() && self.novelty.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.similarity >= 0.0 && self.popularity >= 0.0 && self.novelty >= 0.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    const fn total(self) -> f64 {
        self.similarity + self.popularity + self.novelty
    }

    const fn has_non_zero_total(self) -> bool {
        self.total() != 0.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "score blending requires weighted averages"
    )]
    pub(crate) const fn blend(self, similarity: f64, popularity: f64, novelty: f64) -> f64 {
        let total = self.total();
        if total == 0.0 {
            return 0.0;
        }
        (similarity * self.similarity + popularity * self.popularity + novelty * self.novelty)
            / total
    }
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            similarity: DEFAULT_SIMILARITY_WEIGHT,
            popularity: DEFAULT_POPULARITY_WEIGHT,
            novelty: DEFAULT_NOVELTY_WEIGHT,
        }
    }
}

/// Tunable weights applied to the destination quality signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopularityWeights {
    /// Multiplier applied to the average rating fraction.
    pub rating_weight: f64,
    /// Multiplier applied to the logarithmic review volume.
    pub review_weight: f64,
    /// Review count at which the volume signal saturates at `1.0`.
    pub review_saturation: u64,
}

impl PopularityWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`RankingError::InvalidPopularityWeights`] when a weight is
    /// non-finite or negative, both weights are zero, or the saturation
    /// count is zero.
    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    pub const fn validate(self) -> Result<Self, RankingError> {
        let finite = self.rating_weight.is_finite() && self.review_weight.is_finite();
        let non_negative = self.rating_weight >= 0.0 && self.review_weight >= 0.0;
        let non_zero = self.rating_weight + self.review_weight != 0.0;
        if finite && non_negative && non_zero && self.review_saturation > 0 {
            Ok(self)
        } else {
            Err(RankingError::InvalidPopularityWeights)
        }
    }
}

impl Default for PopularityWeights {
    fn default() -> Self {
        Self {
            rating_weight: 0.7,
            review_weight: 0.3,
            review_saturation: 1_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RankingWeights { similarity: f64::NAN, popularity: 0.3, novelty: 0.1 })]
    #[case(RankingWeights { similarity: 0.6, popularity: -0.3, novelty: 0.1 })]
    #[case(RankingWeights { similarity: 0.0, popularity: 0.0, novelty: 0.0 })]
    #[case(RankingWeights { similarity: 0.6, popularity: f64::INFINITY, novelty: 0.1 })]
    fn rejects_unusable_ranking_weights(#[case] weights: RankingWeights) {
        assert_eq!(weights.validate(), Err(RankingError::InvalidWeights));
    }

    #[rstest]
    fn default_weights_are_valid() {
        let weights = RankingWeights::default();
        assert_eq!(weights.validate(), Ok(weights));
        assert_eq!(
            PopularityWeights::default().validate(),
            Ok(PopularityWeights::default())
        );
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "assertions compare blended values")]
    fn blend_is_normalised_by_total_weight() {
        let weights = RankingWeights {
            similarity: 2.0,
            popularity: 1.0,
            novelty: 1.0,
        };
        let blended = weights.blend(1.0, 0.5, 0.0);
        assert!((blended - 0.625).abs() < 1e-12, "got {blended}");
    }

    #[rstest]
    #[case(PopularityWeights { rating_weight: 0.0, review_weight: 0.0, review_saturation: 1_000 })]
    #[case(PopularityWeights { rating_weight: 0.7, review_weight: 0.3, review_saturation: 0 })]
    #[case(PopularityWeights { rating_weight: -1.0, review_weight: 0.3, review_saturation: 10 })]
    fn rejects_unusable_popularity_weights(#[case] weights: PopularityWeights) {
        assert_eq!(
            weights.validate(),
            Err(RankingError::InvalidPopularityWeights)
        );
    }
}
