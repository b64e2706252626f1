//! Selection between the available ranking strategies.

use thiserror::Error;

/// Ranking strategy requested by the caller.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use wayfarer_core::Algorithm;
///
/// assert_eq!(Algorithm::from_str("cosine"), Ok(Algorithm::Cosine));
/// assert_eq!(Algorithm::default(), Algorithm::Hybrid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Rank purely by cosine similarity; quality signals are skipped.
    #[cfg_attr(feature = "serde", serde(alias = "cosine_similarity"))]
    Cosine,
    /// Blend similarity with popularity and novelty.
    #[default]
    Hybrid,
}

/// Error returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid algorithm '{name}', use \"cosine\" or \"hybrid\"")]
pub struct ParseAlgorithmError {
    /// The rejected input.
    pub name: String,
}

impl Algorithm {
    /// Return the algorithm as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cosine => "cosine",
            Self::Hybrid => "hybrid",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cosine" | "cosine_similarity" => Ok(Self::Cosine),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(ParseAlgorithmError { name: s.to_owned() }),
        }
    }
}
