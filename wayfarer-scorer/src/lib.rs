//! Scoring and ranking for Wayfarer destination recommendations.
//!
//! The crate turns a traveller's [`PreferenceVector`] and a catalogue of
//! [`DestinationAttributes`] into an ordered, explained list of
//! [`ScoredCandidate`]s. Two rankers implement the
//! [`Recommender`](wayfarer_core::Recommender) trait:
//!
//! - [`HybridRanker`] blends cosine similarity with popularity and novelty
//!   using [`RankingWeights`] (`0.6 / 0.3 / 0.1` by default).
//! - [`CosineRanker`] orders purely by similarity.
//!
//! [`recommend`] dispatches on an [`Algorithm`] with default tuning, and
//! [`RecommendationInsights`] summarises a ranked list.
//!
//! Enable the `parallel` feature to score large catalogues with `rayon`;
//! results are identical to the sequential path.
//!
//! # Examples
//!
//! ```
//! use wayfarer_core::{Algorithm, DestinationAttributes, PreferenceVector, RawRatings};
//! use wayfarer_scorer::recommend;
//!
//! let preferences = PreferenceVector::from(RawRatings::from_values([5.0, 3.0, 4.0, 4.0, 5.0, 2.0]));
//! let destinations = vec![
//!     DestinationAttributes::new("bali", "Bali", "Indonesia")
//!         .with_ratings(RawRatings::from_values([5.0, 2.0, 4.0, 5.0, 5.0, 4.0]))
//!         .with_quality(4.5, 1_250),
//! ];
//!
//! let ranked = recommend(Algorithm::Hybrid, Some(&preferences), &destinations, 10);
//! assert_eq!(ranked.len(), 1);
//! assert!((0.0..=1.0).contains(&ranked[0].final_score));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod explain;
mod insights;
mod quality;
mod ranker;
mod similarity;
mod types;
mod vector;

pub use error::RankingError;
pub use explain::{EXCELLENT_MATCH, GOOD_MATCH, HIGHLY_POPULAR, MODERATE_MATCH, NOVEL, POPULAR};
pub use insights::RecommendationInsights;
pub use quality::{MAX_AVERAGE_RATING, novelty, popularity};
pub use ranker::{CosineRanker, HybridRanker};
pub use similarity::{factor_breakdown, similarity};
pub use types::{
    DEFAULT_NOVELTY_WEIGHT, DEFAULT_POPULARITY_WEIGHT, DEFAULT_SIMILARITY_WEIGHT,
    PopularityWeights, RankingWeights,
};

use wayfarer_core::{
    Algorithm, DestinationAttributes, PreferenceVector, Recommender, ScoredCandidate,
};

/// Rank `destinations` with the chosen algorithm and default tuning.
#[must_use]
pub fn recommend(
    algorithm: Algorithm,
    preferences: Option<&PreferenceVector>,
    destinations: &[DestinationAttributes],
    limit: usize,
) -> Vec<ScoredCandidate> {
    recommender_for(algorithm).recommend(preferences, destinations, limit)
}

/// Build a boxed recommender for `algorithm` with default tuning.
#[must_use]
pub fn recommender_for(algorithm: Algorithm) -> Box<dyn Recommender> {
    match algorithm {
        Algorithm::Cosine => Box::new(CosineRanker),
        Algorithm::Hybrid => Box::new(HybridRanker::default()),
    }
}

#[cfg(test)]
mod tests;
