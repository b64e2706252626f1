//! Unit coverage for ranking through the public entry points.
#![forbid(unsafe_code)]

use rstest::rstest;
use wayfarer_core::test_support::{destination, preferences, sample_catalogue};
use wayfarer_core::{Algorithm, Dimension, PreferenceVector, Recommender};

use crate::{
    CosineRanker, HybridRanker, PopularityWeights, RankingError, RankingWeights, recommend,
    recommender_for,
};

const TOLERANCE: f64 = 1e-9;

#[rstest]
#[expect(clippy::float_arithmetic, reason = "test compares blended scores")]
fn exact_match_with_strong_reviews() {
    let values = [5.0, 2.0, 4.0, 5.0, 5.0, 4.0];
    let bali = destination("bali", values, 4.5, 1_250);
    let ranked = HybridRanker::default().rank(Some(&preferences(values)), &[bali], 10);

    let [candidate] = ranked.as_slice() else {
        panic!("expected exactly one candidate, got {}", ranked.len());
    };
    assert!((candidate.similarity - 1.0).abs() < TOLERANCE);
    assert!(candidate.factor_breakdown.iter().all(|(_, value)| value == 1.0));
    assert!((candidate.popularity_score - 0.93).abs() < TOLERANCE);
    assert_eq!(candidate.novelty_score, 0.0);
    assert!((candidate.final_score - 0.879).abs() < 1e-6);
    assert_eq!(
        candidate.explanation,
        "Excellent match with your preferences. Highly popular destination."
    );
}

#[rstest]
#[expect(clippy::float_arithmetic, reason = "test compares novelty")]
fn zero_similarity_with_neutral_user() {
    let low = destination("low", [1.0; 6], 0.0, 0);
    let ranked = HybridRanker::default().rank(Some(&preferences([3.0; 6])), &[low], 10);

    let [candidate] = ranked.as_slice() else {
        panic!("expected exactly one candidate, got {}", ranked.len());
    };
    assert_eq!(candidate.similarity, 0.0);
    assert!((candidate.novelty_score - 0.5).abs() < TOLERANCE);
    assert!((candidate.final_score - 0.05).abs() < TOLERANCE);
    assert_eq!(candidate.explanation, "Somewhat matches your preferences.");
}

#[rstest]
#[expect(clippy::float_arithmetic, reason = "test compares factors")]
fn missing_dimension_penalises_match_strength() {
    let user = PreferenceVector::new()
        .with_rating(Dimension::Climate, 5.0)
        .with_rating(Dimension::Budget, 3.0)
        .with_rating(Dimension::Adventure, 3.0)
        .with_rating(Dimension::Culture, 3.0)
        .with_rating(Dimension::Nature, 3.0);
    let target = destination("full", [5.0, 3.0, 3.0, 3.0, 3.0, 5.0], 4.0, 10);

    let candidate = HybridRanker::default().analyze(&user, &target);

    // Nightlife reads as -0.25 for the user against 1.0 for the destination.
    assert_eq!(candidate.factor_breakdown.get(Dimension::Nightlife), 0.0);
    // Raw distance 5 on nightlife out of 24.
    assert!((candidate.novelty_score - 5.0 / 24.0).abs() < TOLERANCE);
}

#[rstest]
fn absent_preferences_yield_nothing() {
    let catalogue = sample_catalogue();
    assert!(HybridRanker::default().rank(None, &catalogue, 10).is_empty());
    assert!(CosineRanker.rank(None, &catalogue, 10).is_empty());
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(50)]
fn limit_caps_results(#[case] limit: usize) {
    let catalogue = sample_catalogue();
    let ranked = recommend(
        Algorithm::Hybrid,
        Some(&preferences([4.0, 3.0, 3.0, 4.0, 4.0, 3.0])),
        &catalogue,
        limit,
    );
    assert_eq!(ranked.len(), limit.min(catalogue.len()));
}

#[rstest]
fn empty_catalogue_yields_nothing() {
    let ranked = recommend(Algorithm::Cosine, Some(&preferences([3.0; 6])), &[], 10);
    assert!(ranked.is_empty());
}

#[rstest]
fn cosine_ranker_reports_similarity_only() {
    let ranked = CosineRanker.rank(
        Some(&preferences([5.0, 2.0, 4.0, 5.0, 5.0, 4.0])),
        &sample_catalogue(),
        10,
    );
    let first = ranked.first().expect("catalogue is not empty");
    assert_eq!(first.destination_id, "bali");
    for candidate in &ranked {
        assert_eq!(candidate.final_score, candidate.similarity);
        assert_eq!(candidate.popularity_score, 0.0);
        assert_eq!(candidate.novelty_score, 0.0);
    }
    assert!(first.explanation.contains("Strong points: "));
    assert!(first.explanation.ends_with("Popular destination with many reviews."));
}

#[rstest]
fn hybrid_results_are_ordered_best_first() {
    let ranked = HybridRanker::default().rank(
        Some(&preferences([2.0, 2.0, 5.0, 3.0, 5.0, 1.0])),
        &sample_catalogue(),
        10,
    );
    assert!(
        ranked
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.final_score >= b.final_score))
    );
}

#[rstest]
fn equal_scores_keep_catalogue_order() {
    let values = [4.0, 3.0, 2.0, 5.0, 4.0, 3.0];
    let catalogue = vec![
        destination("first", values, 4.2, 300),
        destination("second", values, 4.2, 300),
        destination("third", values, 4.2, 300),
    ];
    let ranked = recommend(Algorithm::Hybrid, Some(&preferences(values)), &catalogue, 10);
    let ids: Vec<_> = ranked.iter().map(|c| c.destination_id.as_str()).collect();
    assert_eq!(ids, ["first", "second", "third"]);
}

#[rstest]
fn boxed_recommenders_match_direct_rankers() {
    let catalogue = sample_catalogue();
    let user = preferences([3.0, 4.0, 2.0, 5.0, 3.0, 4.0]);
    assert_eq!(
        recommender_for(Algorithm::Hybrid).recommend(Some(&user), &catalogue, 3),
        HybridRanker::default().recommend(Some(&user), &catalogue, 3)
    );
    assert_eq!(
        recommender_for(Algorithm::Cosine).recommend(Some(&user), &catalogue, 3),
        CosineRanker.recommend(Some(&user), &catalogue, 3)
    );
}

#[rstest]
fn custom_weights_reorder_candidates() {
    let user = preferences([5.0, 5.0, 5.0, 5.0, 5.0, 5.0]);
    let catalogue = vec![
        destination("famous", [3.0; 6], 5.0, 50_000),
        destination("obscure", [5.0; 6], 0.0, 0),
    ];
    let popularity_only = HybridRanker::new(
        RankingWeights {
            similarity: 0.0,
            popularity: 1.0,
            novelty: 0.0,
        },
        PopularityWeights::default(),
    )
    .expect("weights are valid");

    let ranked = popularity_only.rank(Some(&user), &catalogue, 1);

    assert_eq!(
        ranked.first().map(|c| c.destination_id.as_str()),
        Some("famous")
    );
}

#[rstest]
fn invalid_weights_are_rejected_at_construction() {
    let result = HybridRanker::new(
        RankingWeights {
            similarity: -1.0,
            popularity: 0.3,
            novelty: 0.1,
        },
        PopularityWeights::default(),
    );
    assert_eq!(result, Err(RankingError::InvalidWeights));
}

#[rstest]
fn limit_keeps_the_strongest_of_distinct_scores() {
    let user = preferences([5.0; 6]);
    let catalogue: Vec<_> = (1_u64..=10)
        .map(|step| destination(&format!("d{step}"), [5.0; 6], 4.0, step.saturating_mul(100)))
        .collect();

    let ranked = HybridRanker::default().rank(Some(&user), &catalogue, 3);

    let ids: Vec<_> = ranked.iter().map(|c| c.destination_id.as_str()).collect();
    assert_eq!(ids, ["d10", "d9", "d8"]);
    assert!(
        ranked
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.final_score > b.final_score))
    );
}

#[rstest]
fn parallel_matches_keep_catalogue_order_under_cosine() {
    let user = preferences([1.0, 1.0, 1.0, 1.0, 2.0, 2.0]);
    let catalogue = vec![
        destination("scaled", [1.0, 1.0, 1.0, 1.0, 3.0, 3.0], 4.0, 100),
        destination("later", [1.0, 1.0, 1.0, 1.0, 4.0, 4.0], 4.0, 100),
    ];

    let ranked = CosineRanker.rank(Some(&user), &catalogue, 10);

    let order: Vec<_> = ranked
        .iter()
        .map(|c| (c.destination_id.as_str(), c.final_score))
        .collect();
    assert_eq!(order, [("scaled", 1.0), ("later", 1.0)]);
}
