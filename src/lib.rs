//! Facade crate for the Wayfarer destination recommendation engine.
//!
//! This crate re-exports the core domain types and the rankers so callers can
//! depend on a single crate.

#![forbid(unsafe_code)]

pub use wayfarer_core::{
    Algorithm, DestinationAttributes, Dimension, FactorBreakdown, PreferenceTranslator,
    PreferenceVector, RawRatings, Recommender, ScoredCandidate, SurveyAnswers, SurveyTranslator,
};

pub use wayfarer_scorer::{
    CosineRanker, HybridRanker, PopularityWeights, RankingError, RankingWeights,
    RecommendationInsights, recommend, recommender_for,
};
