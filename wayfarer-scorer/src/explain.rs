//! Human-readable explanations for ranked destinations.
//!
//! Explanations are assembled from short fragments joined with `". "` and
//! closed with a trailing full stop.
#![forbid(unsafe_code)]

use wayfarer_core::{DestinationAttributes, FactorBreakdown};

/// Similarity above which a destination counts as an excellent match.
pub const EXCELLENT_MATCH: f64 = 0.8;
/// Similarity above which a destination counts as a good match.
pub const GOOD_MATCH: f64 = 0.6;
/// Similarity above which a destination counts as a moderate match.
pub const MODERATE_MATCH: f64 = 0.4;
/// Popularity above which a destination is called highly popular.
pub const HIGHLY_POPULAR: f64 = 0.8;
/// Popularity above which a destination is called popular.
pub const POPULAR: f64 = 0.6;
/// Novelty above which a destination is said to offer new experiences.
pub const NOVEL: f64 = 0.7;

const HIGHLY_RATED: f64 = 4.5;
const WELL_RATED: f64 = 4.0;
const MANY_REVIEWS: u64 = 1_000;
const STRONG_POINTS: usize = 3;

const fn match_phrase(similarity: f64) -> &'static str {
    if similarity > EXCELLENT_MATCH {
        "Excellent match with your preferences"
    } else if similarity > GOOD_MATCH {
        "Good match with your preferences"
    } else if similarity > MODERATE_MATCH {
        "Moderate match with your preferences"
    } else {
        "Somewhat matches your preferences"
    }
}

fn finish<S: AsRef<str>>(fragments: &[S]) -> String {
    let mut sentence = fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(". ");
    sentence.push('.');
    sentence
}

/// Explanation used by the hybrid ranker.
pub(crate) fn hybrid_explanation(similarity: f64, popularity: f64, novelty: f64) -> String {
    let mut fragments = vec![match_phrase(similarity)];
    if popularity > HIGHLY_POPULAR {
        fragments.push("Highly popular destination");
    } else if popularity > POPULAR {
        fragments.push("Popular destination");
    }
    if novelty > NOVEL {
        fragments.push("Offers new experiences");
    }
    finish(&fragments)
}

/// Explanation used by the similarity-only ranker.
///
/// Names up to three of the strongest dimensions, then mentions review
/// standing when the destination has one worth reporting.
pub(crate) fn cosine_explanation(
    similarity: f64,
    factors: &FactorBreakdown,
    destination: &DestinationAttributes,
) -> String {
    let mut fragments = vec![match_phrase(similarity).to_owned()];

    let mut ranked: Vec<_> = factors.iter().collect();
    ranked.sort_by(|left, right| right.1.total_cmp(&left.1));
    let strong_points: Vec<String> = ranked
        .into_iter()
        .take(STRONG_POINTS)
        .filter_map(|(dimension, strength)| {
            let quality = if strength > EXCELLENT_MATCH {
                "excellent"
            } else if strength > GOOD_MATCH {
                "good"
            } else if strength > MODERATE_MATCH {
                "moderate"
            } else {
                return None;
            };
            Some(format!("{quality} {} match", dimension.display_name()))
        })
        .collect();
    if !strong_points.is_empty() {
        fragments.push(format!("Strong points: {}", strong_points.join(", ")));
    }

    if destination.average_rating > HIGHLY_RATED {
        fragments.push("Highly rated by other travelers".to_owned());
    } else if destination.average_rating > WELL_RATED {
        fragments.push("Well-rated by other travelers".to_owned());
    }
    if destination.total_reviews > MANY_REVIEWS {
        fragments.push("Popular destination with many reviews".to_owned());
    }
    finish(&fragments)
}
