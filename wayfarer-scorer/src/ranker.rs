//! Rankers that score a catalogue against a traveller's preferences.
//!
//! Both rankers score every destination, order the results by final score
//! and keep the best `limit`. Ordering uses a stable sort, so destinations
//! with equal scores keep their catalogue order.
#![forbid(unsafe_code)]

use std::cmp::Ordering;

use log::{debug, trace};
use wayfarer_core::{
    DestinationAttributes, PreferenceVector, RawRatings, Recommender, ScoredCandidate, settle,
};

use crate::explain::{cosine_explanation, hybrid_explanation};
use crate::quality::{novelty, popularity};
use crate::similarity::{cosine, factor_strengths};
use crate::vector::{NormalizedVector, normalize};
use crate::{PopularityWeights, RankingError, RankingWeights};

/// A user's ratings alongside their normalised form, computed once per call.
struct UserProfile<'a> {
    raw: &'a RawRatings,
    normalized: NormalizedVector,
}

impl<'a> UserProfile<'a> {
    fn new(preferences: &'a PreferenceVector) -> Self {
        let raw = preferences.ratings();
        Self {
            raw,
            normalized: normalize(raw),
        }
    }
}

/// Ranker blending similarity, popularity and novelty.
///
/// # Examples
/// ```
/// use wayfarer_core::{DestinationAttributes, PreferenceVector, RawRatings};
/// use wayfarer_scorer::HybridRanker;
///
/// let ratings = RawRatings::from_values([5.0, 2.0, 4.0, 5.0, 5.0, 4.0]);
/// let bali = DestinationAttributes::new("bali", "Bali", "Indonesia")
///     .with_ratings(ratings)
///     .with_quality(4.5, 1_250);
/// let preferences = PreferenceVector::from(ratings);
///
/// let ranked = HybridRanker::default().rank(Some(&preferences), &[bali], 10);
/// assert_eq!(ranked.len(), 1);
/// assert!(ranked[0].explanation.starts_with("Excellent match"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HybridRanker {
    weights: RankingWeights,
    popularity: PopularityWeights,
}

impl HybridRanker {
    /// Construct a ranker from validated tuning values.
    ///
    /// # Errors
    /// Returns [`RankingError`] when either set of weights is unusable.
    pub fn new(
        weights: RankingWeights,
        popularity: PopularityWeights,
    ) -> Result<Self, RankingError> {
        Ok(Self {
            weights: weights.validate()?,
            popularity: popularity.validate()?,
        })
    }

    /// Blend weights in use.
    #[must_use]
    pub const fn weights(&self) -> RankingWeights {
        self.weights
    }

    /// Popularity weights in use.
    #[must_use]
    pub const fn popularity_weights(&self) -> PopularityWeights {
        self.popularity
    }

    /// Rank `destinations`, returning at most `limit` candidates, best first.
    #[must_use]
    pub fn rank(
        &self,
        preferences: Option<&PreferenceVector>,
        destinations: &[DestinationAttributes],
        limit: usize,
    ) -> Vec<ScoredCandidate> {
        let Some(preferences) = preferences else {
            debug!("no preferences supplied; returning no recommendations");
            return Vec::new();
        };
        if destinations.is_empty() || limit == 0 {
            return Vec::new();
        }
        let user = UserProfile::new(preferences);
        let ranked = order_and_truncate(
            score_all(destinations, |destination| self.score(&user, destination)),
            limit,
        );
        debug!(
            "hybrid ranking kept {} of {} destinations",
            ranked.len(),
            destinations.len()
        );
        ranked
    }

    /// Score a single destination without ranking it.
    #[must_use]
    pub fn analyze(
        &self,
        preferences: &PreferenceVector,
        destination: &DestinationAttributes,
    ) -> ScoredCandidate {
        self.score(&UserProfile::new(preferences), destination)
    }

    fn score(&self, user: &UserProfile<'_>, destination: &DestinationAttributes) -> ScoredCandidate {
        let target = normalize(&destination.ratings);
        let similarity = cosine(&user.normalized, &target);
        let popularity = popularity(destination, self.popularity);
        let novelty = novelty(user.raw, &destination.ratings);
        let blended = self.weights.blend(similarity, popularity, novelty);
        if !blended.is_finite() {
            debug!("{}: non-finite blended score {blended} replaced with 0", destination.id);
        }
        let final_score = settle(blended);
        trace!(
            "{}: similarity={similarity:.4} popularity={popularity:.4} novelty={novelty:.4} \
             final={final_score:.4}",
            destination.id
        );
        ScoredCandidate {
            destination_id: destination.id.clone(),
            destination_name: destination.name.clone(),
            destination_country: destination.country.clone(),
            similarity,
            factor_breakdown: factor_strengths(&user.normalized, &target),
            popularity_score: popularity,
            novelty_score: novelty,
            final_score,
            explanation: hybrid_explanation(similarity, popularity, novelty),
        }
    }
}

impl Recommender for HybridRanker {
    fn recommend(
        &self,
        preferences: Option<&PreferenceVector>,
        destinations: &[DestinationAttributes],
        limit: usize,
    ) -> Vec<ScoredCandidate> {
        self.rank(preferences, destinations, limit)
    }
}

/// Ranker ordering destinations by preference similarity alone.
///
/// Candidates carry zero popularity and novelty scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CosineRanker;

impl CosineRanker {
    /// Rank `destinations`, returning at most `limit` candidates, best first.
    #[must_use]
    #[expect(clippy::unused_self, reason = "matches the HybridRanker call shape")]
    pub fn rank(
        &self,
        preferences: Option<&PreferenceVector>,
        destinations: &[DestinationAttributes],
        limit: usize,
    ) -> Vec<ScoredCandidate> {
        let Some(preferences) = preferences else {
            debug!("no preferences supplied; returning no recommendations");
            return Vec::new();
        };
        if destinations.is_empty() || limit == 0 {
            return Vec::new();
        }
        let user = UserProfile::new(preferences);
        let ranked = order_and_truncate(
            score_all(destinations, |destination| Self::score(&user, destination)),
            limit,
        );
        debug!(
            "cosine ranking kept {} of {} destinations",
            ranked.len(),
            destinations.len()
        );
        ranked
    }

    fn score(user: &UserProfile<'_>, destination: &DestinationAttributes) -> ScoredCandidate {
        let target = normalize(&destination.ratings);
        let similarity = cosine(&user.normalized, &target);
        let factor_breakdown = factor_strengths(&user.normalized, &target);
        let explanation = cosine_explanation(similarity, &factor_breakdown, destination);
        ScoredCandidate {
            destination_id: destination.id.clone(),
            destination_name: destination.name.clone(),
            destination_country: destination.country.clone(),
            similarity,
            factor_breakdown,
            popularity_score: 0.0,
            novelty_score: 0.0,
            final_score: similarity,
            explanation,
        }
    }
}

impl Recommender for CosineRanker {
    fn recommend(
        &self,
        preferences: Option<&PreferenceVector>,
        destinations: &[DestinationAttributes],
        limit: usize,
    ) -> Vec<ScoredCandidate> {
        self.rank(preferences, destinations, limit)
    }
}

#[cfg(feature = "parallel")]
fn score_all<F>(destinations: &[DestinationAttributes], score: F) -> Vec<ScoredCandidate>
where
    F: Fn(&DestinationAttributes) -> ScoredCandidate + Send + Sync,
{
    use rayon::prelude::*;

    destinations.par_iter().map(score).collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all<F>(destinations: &[DestinationAttributes], score: F) -> Vec<ScoredCandidate>
where
    F: Fn(&DestinationAttributes) -> ScoredCandidate,
{
    destinations.iter().map(score).collect()
}

/// Sort best first and keep `limit` candidates.
///
/// Scores are settled onto a fixed grid before this point, so scores that
/// are equal within rounding noise compare equal and keep catalogue order.
/// `partial_cmp` is total on finite values and treats `-0.0` and `0.0` as
/// equal.
fn order_and_truncate(mut candidates: Vec<ScoredCandidate>, limit: usize) -> Vec<ScoredCandidate> {
    candidates.sort_by(|left, right| {
        right
            .final_score
            .partial_cmp(&left.final_score)
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(limit);
    candidates
}
