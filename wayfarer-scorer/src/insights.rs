//! Aggregate statistics over a ranked list.
#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
use serde::Serialize;
use wayfarer_core::{FactorBreakdown, ScoredCandidate};

/// Summary of a recommendation list.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RecommendationInsights {
    /// Mean similarity across the candidates.
    pub average_similarity: f64,
    /// Mean match strength for each dimension.
    #[cfg_attr(feature = "serde", serde(rename = "topFactors"))]
    pub factor_averages: FactorBreakdown,
    /// Mean absolute similarity difference across all candidate pairs.
    pub diversity_score: f64,
    /// Number of candidates summarised.
    pub total_recommendations: usize,
}

impl RecommendationInsights {
    /// Summarise `candidates`. An empty list yields all-zero insights.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::ScoredCandidate;
    /// use wayfarer_scorer::RecommendationInsights;
    ///
    /// let candidates = [
    ///     ScoredCandidate { similarity: 0.9, ..ScoredCandidate::default() },
    ///     ScoredCandidate { similarity: 0.5, ..ScoredCandidate::default() },
    /// ];
    /// let insights = RecommendationInsights::from_candidates(&candidates);
    /// assert!((insights.average_similarity - 0.7).abs() < 1e-9);
    /// assert!((insights.diversity_score - 0.4).abs() < 1e-9);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "insights are arithmetic means"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "recommendation lists are far shorter than 2^52"
    )]
    pub fn from_candidates(candidates: &[ScoredCandidate]) -> Self {
        if candidates.is_empty() {
            return Self::default();
        }
        let count = candidates.len() as f64;
        let average_similarity =
            candidates.iter().map(|candidate| candidate.similarity).sum::<f64>() / count;
        let factor_averages = FactorBreakdown::from_fn(|dimension| {
            candidates
                .iter()
                .map(|candidate| candidate.factor_breakdown.get(dimension))
                .sum::<f64>()
                / count
        });
        Self {
            average_similarity,
            factor_averages,
            diversity_score: diversity(candidates),
            total_recommendations: candidates.len(),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "diversity is a mean of pairwise differences"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "pair counts stay far below 2^52"
)]
fn diversity(candidates: &[ScoredCandidate]) -> f64 {
    let mut total = 0.0;
    let mut pairs: u64 = 0;
    for (position, left) in candidates.iter().enumerate() {
        for right in candidates.iter().skip(position + 1) {
            total += (left.similarity - right.similarity).abs();
            pairs += 1;
        }
    }
    if pairs == 0 {
        0.0
    } else {
        total / pairs as f64
    }
}
