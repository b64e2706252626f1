//! Property-based tests for the rankers.
//!
//! # Invariants tested
//!
//! - **Score range:** every reported score is finite and within `0.0..=1.0`.
//! - **Ordering:** final scores never increase down the list.
//! - **Limit:** the list length is `min(limit, catalogue size)`.
//! - **Stability:** identical destinations keep their catalogue order.
//! - **Determinism:** repeated calls return identical lists.
//! - **Membership:** every candidate refers to a catalogue entry.


use std::collections::HashSet;

use proptest::prelude::*;
use wayfarer_core::{Algorithm, DestinationAttributes, ScoredCandidate};
use wayfarer_scorer::{HybridRanker, recommend};

use proptest_support::{catalogue_strategy, preferences_strategy, ratings_strategy};

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop_oneof![Just(Algorithm::Cosine), Just(Algorithm::Hybrid)]
}

fn assert_in_range(label: &str, value: f64) -> Result<(), TestCaseError> {
    prop_assert!(
        value.is_finite() && (0.0..=1.0).contains(&value),
        "{label} {value} is outside 0..=1"
    );
    Ok(())
}

fn assert_candidate_scores(candidate: &ScoredCandidate) -> Result<(), TestCaseError> {
    assert_in_range("similarity", candidate.similarity)?;
    assert_in_range("popularity", candidate.popularity_score)?;
    assert_in_range("novelty", candidate.novelty_score)?;
    assert_in_range("final score", candidate.final_score)?;
    for (dimension, value) in candidate.factor_breakdown.iter() {
        assert_in_range(dimension.as_str(), value)?;
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: every score the rankers report is finite and in range.
    #[test]
    fn scores_stay_in_unit_range(
        algorithm in algorithm_strategy(),
        preferences in preferences_strategy(),
        catalogue in catalogue_strategy(1, 20),
    ) {
        let ranked = recommend(algorithm, Some(&preferences), &catalogue, catalogue.len());
        for candidate in &ranked {
            assert_candidate_scores(candidate)?;
        }
    }

    /// Property: final scores are non-increasing down the list.
    #[test]
    fn results_are_sorted_best_first(
        algorithm in algorithm_strategy(),
        preferences in preferences_strategy(),
        catalogue in catalogue_strategy(2, 25),
    ) {
        let ranked = recommend(algorithm, Some(&preferences), &catalogue, catalogue.len());
        for pair in ranked.windows(2) {
            if let [earlier, later] = pair {
                prop_assert!(
                    earlier.final_score >= later.final_score,
                    "{} ({}) ranked above {} ({})",
                    earlier.destination_id,
                    earlier.final_score,
                    later.destination_id,
                    later.final_score
                );
            }
        }
    }

    /// Property: the list holds `min(limit, catalogue size)` candidates.
    #[test]
    fn limit_bounds_result_length(
        algorithm in algorithm_strategy(),
        preferences in preferences_strategy(),
        catalogue in catalogue_strategy(0, 15),
        limit in 0_usize..20_usize,
    ) {
        let ranked = recommend(algorithm, Some(&preferences), &catalogue, limit);
        prop_assert_eq!(ranked.len(), limit.min(catalogue.len()));
    }

    /// Property: destinations with identical attributes keep catalogue order.
    #[test]
    fn ties_preserve_catalogue_order(
        algorithm in algorithm_strategy(),
        preferences in preferences_strategy(),
        ratings in ratings_strategy(),
        copies in 2_usize..8_usize,
    ) {
        let catalogue: Vec<DestinationAttributes> = (0..copies)
            .map(|position| {
                DestinationAttributes::new(format!("twin-{position}"), "Twin", "Mirrorland")
                    .with_ratings(ratings)
                    .with_quality(4.0, 500)
            })
            .collect();
        let ranked = recommend(algorithm, Some(&preferences), &catalogue, copies);
        let ids: Vec<_> = ranked.iter().map(|c| c.destination_id.clone()).collect();
        let expected: Vec<_> = catalogue.iter().map(|d| d.id.clone()).collect();
        prop_assert_eq!(ids, expected);
    }

    /// Property: ranking is a pure function of its inputs.
    #[test]
    fn ranking_is_deterministic(
        preferences in preferences_strategy(),
        catalogue in catalogue_strategy(1, 20),
        limit in 1_usize..10_usize,
    ) {
        let ranker = HybridRanker::default();
        let first = ranker.rank(Some(&preferences), &catalogue, limit);
        let second = ranker.rank(Some(&preferences), &catalogue, limit);
        prop_assert_eq!(first, second);
    }

    /// Property: candidates are drawn from the catalogue without duplicates.
    #[test]
    fn candidates_come_from_catalogue(
        algorithm in algorithm_strategy(),
        preferences in preferences_strategy(),
        catalogue in catalogue_strategy(1, 20),
    ) {
        let known: HashSet<&str> = catalogue.iter().map(|d| d.id.as_str()).collect();
        let ranked = recommend(algorithm, Some(&preferences), &catalogue, catalogue.len());
        let mut seen = HashSet::new();
        for candidate in &ranked {
            prop_assert!(known.contains(candidate.destination_id.as_str()));
            prop_assert!(seen.insert(candidate.destination_id.clone()));
        }
    }
}
