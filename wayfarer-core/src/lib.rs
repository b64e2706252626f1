//! Core domain types for the Wayfarer recommendation engine.
//!
//! The engine scores a catalogue of destinations against a user's stated
//! preferences. This crate defines the shared vocabulary: the six preference
//! [`Dimension`]s, raw 1–5 [`RawRatings`], the user's [`PreferenceVector`],
//! [`DestinationAttributes`], the [`ScoredCandidate`] output, the
//! [`Recommender`] trait, and the survey [`translate`] policy that turns
//! categorical answers into ratings.
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod algorithm;
pub mod candidate;
mod destination;
pub mod dimension;
pub mod ratings;
pub mod recommender;
pub mod translate;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use candidate::{FactorBreakdown, ScoredCandidate};
pub use destination::DestinationAttributes;
pub use dimension::{Dimension, ParseDimensionError};
pub use ratings::{PreferenceVector, RawRatings};
pub use recommender::{Recommender, SCORE_GRID, sanitise, settle};
pub use translate::{
    ActivityRule, LabelSource, PreferenceTranslator, SurveyAnswers, SurveyTranslator,
    TranslationTable,
};
