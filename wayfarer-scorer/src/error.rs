//! Error types raised while configuring rankers.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when a ranker is configured with unusable tuning values.
///
/// Ranking itself never fails; these errors only surface at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankingError {
    /// Blend weights were non-finite, negative or summed to zero.
    #[error("ranking weights must be finite, non-negative and sum to a positive value")]
    InvalidWeights,
    /// Popularity weights were unusable.
    #[error(
        "popularity weights must be finite, non-negative, sum to a positive value \
         and use a positive review saturation"
    )]
    InvalidPopularityWeights,
}
