//! Translate categorical survey answers into a [`PreferenceVector`].
//!
//! Users describe themselves with labels ("Luxury", "Hiking", "Tropical")
//! rather than 1–5 ratings. Mapping those labels onto dimensions is policy,
//! not scoring, so it lives behind the [`PreferenceTranslator`] trait and the
//! default rules are plain data in a [`TranslationTable`].
//!
//! # Examples
//! ```
//! use wayfarer_core::{Dimension, PreferenceTranslator, SurveyAnswers, SurveyTranslator};
//!
//! let answers = SurveyAnswers {
//!     budget: Some("Luxury".into()),
//!     travel_style: vec!["Cultural".into()],
//!     interests: vec!["Museums".into()],
//!     preferred_climate: Some("Mediterranean".into()),
//! };
//! let preferences = SurveyTranslator::default().translate(&answers);
//! let ratings = preferences.ratings();
//! assert_eq!(ratings.get(Dimension::Budget), Some(4.0));
//! assert_eq!(ratings.get(Dimension::Culture), Some(5.0));
//! assert_eq!(ratings.get(Dimension::Climate), Some(4.0));
//! ```

use std::collections::BTreeSet;

use crate::{Dimension, PreferenceVector};

/// Lowest rating a translated dimension may take.
pub const MIN_RATING: f64 = 1.0;
/// Highest rating a translated dimension may take.
pub const MAX_RATING: f64 = 5.0;

/// Categorical preference answers collected from a user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SurveyAnswers {
    /// Budget label such as `Moderate` or `Ultra-Luxury`.
    pub budget: Option<String>,
    /// Selected travel styles such as `Adventure` or `Food & Wine`.
    pub travel_style: Vec<String>,
    /// Selected interests such as `Hiking` or `Museums`.
    pub interests: Vec<String>,
    /// Preferred climate label such as `Tropical`.
    pub preferred_climate: Option<String>,
}

/// Convert survey answers into the fixed six-dimension shape.
pub trait PreferenceTranslator {
    /// Produce a preference vector with every dimension populated.
    fn translate(&self, answers: &SurveyAnswers) -> PreferenceVector;
}

/// Answer list an [`ActivityRule`] label is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    /// [`SurveyAnswers::travel_style`].
    TravelStyle,
    /// [`SurveyAnswers::interests`].
    Interest,
}

/// A label contributing to one activity dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityRule {
    /// Answer list the label must appear in.
    pub source: LabelSource,
    /// Style or interest label, matched case-insensitively.
    pub label: &'static str,
    /// Dimension the label strengthens.
    pub dimension: Dimension,
    /// Amount added to the dimension's baseline.
    pub delta: f64,
}

/// Declarative mapping tables used by [`SurveyTranslator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslationTable {
    /// Budget label to rating.
    pub budget: &'static [(&'static str, f64)],
    /// Climate label to rating.
    pub climate: &'static [(&'static str, f64)],
    /// Style and interest contributions to activity dimensions.
    pub activities: &'static [ActivityRule],
    /// Starting rating for activity dimensions before contributions.
    pub activity_baseline: f64,
    /// Rating used when a budget or climate answer is missing or unknown.
    pub neutral: f64,
}

const DEFAULT_BUDGET: &[(&str, f64)] = &[
    ("Budget", 2.0),
    ("Moderate", 3.0),
    ("Luxury", 4.0),
    ("Ultra-Luxury", 5.0),
];

const DEFAULT_CLIMATE: &[(&str, f64)] = &[
    ("Tropical", 5.0),
    ("Desert", 5.0),
    ("Mediterranean", 4.0),
    ("Temperate", 3.0),
    ("Cold", 1.0),
];

const fn style(label: &'static str, dimension: Dimension, delta: f64) -> ActivityRule {
    ActivityRule {
        source: LabelSource::TravelStyle,
        label,
        dimension,
        delta,
    }
}

const fn interest(label: &'static str, dimension: Dimension, delta: f64) -> ActivityRule {
    ActivityRule {
        source: LabelSource::Interest,
        label,
        dimension,
        delta,
    }
}

const DEFAULT_ACTIVITIES: &[ActivityRule] = &[
    style("Adventure", Dimension::Adventure, 2.0),
    style("Relaxation", Dimension::Nature, 1.0),
    style("Cultural", Dimension::Culture, 2.0),
    style("Food & Wine", Dimension::Culture, 1.0),
    style("Food & Wine", Dimension::Nightlife, 1.0),
    style("Nature", Dimension::Nature, 2.0),
    style("Urban", Dimension::Nightlife, 1.0),
    style("Urban", Dimension::Culture, 1.0),
    style("Historical", Dimension::Culture, 2.0),
    style("Romantic", Dimension::Nightlife, 1.0),
    style("Family-Friendly", Dimension::Nature, 1.0),
    interest("Museums", Dimension::Culture, 1.0),
    interest("Beaches", Dimension::Nature, 1.0),
    interest("Mountains", Dimension::Nature, 1.0),
    interest("Mountains", Dimension::Adventure, 1.0),
    interest("Shopping", Dimension::Nightlife, 1.0),
    interest("Nightlife", Dimension::Nightlife, 2.0),
    interest("Hiking", Dimension::Adventure, 1.0),
    interest("Hiking", Dimension::Nature, 1.0),
    interest("Photography", Dimension::Nature, 1.0),
    interest("Local Markets", Dimension::Culture, 1.0),
    interest("Architecture", Dimension::Culture, 1.0),
    interest("Wildlife", Dimension::Nature, 1.0),
    interest("Wildlife", Dimension::Adventure, 1.0),
    interest("Sports", Dimension::Adventure, 1.0),
];

const ACTIVITY_DIMENSIONS: [Dimension; 4] = [
    Dimension::Adventure,
    Dimension::Culture,
    Dimension::Nature,
    Dimension::Nightlife,
];

impl Default for TranslationTable {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            climate: DEFAULT_CLIMATE,
            activities: DEFAULT_ACTIVITIES,
            activity_baseline: 2.0,
            neutral: 3.0,
        }
    }
}

/// Table-driven [`PreferenceTranslator`].
///
/// Unknown labels are ignored and repeated labels count once. A label only
/// fires rules declared for the answer list it came from. Every rating is
/// clamped into `1.0..=5.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurveyTranslator {
    table: TranslationTable,
}

impl SurveyTranslator {
    /// Construct a translator backed by a custom table.
    #[must_use]
    pub const fn with_table(table: TranslationTable) -> Self {
        Self { table }
    }

    fn lookup(entries: &[(&str, f64)], label: Option<&str>) -> Option<f64> {
        let wanted = label?.trim();
        entries
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(wanted))
            .map(|&(_, rating)| rating)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "activity ratings accumulate label contributions"
    )]
    fn activity_rating(&self, dimension: Dimension, labels: &SelectedLabels) -> f64 {
        let contribution: f64 = self
            .table
            .activities
            .iter()
            .filter(|rule| rule.dimension == dimension)
            .filter(|rule| labels.matches(rule))
            .map(|rule| rule.delta)
            .sum();
        self.table.activity_baseline + contribution
    }
}

impl PreferenceTranslator for SurveyTranslator {
    fn translate(&self, answers: &SurveyAnswers) -> PreferenceVector {
        let labels = SelectedLabels::from_answers(answers);

        let budget = Self::lookup(self.table.budget, answers.budget.as_deref())
            .unwrap_or(self.table.neutral);
        let climate = Self::lookup(self.table.climate, answers.preferred_climate.as_deref())
            .unwrap_or(self.table.neutral);

        let mut preferences = PreferenceVector::new()
            .with_rating(Dimension::Budget, clamp_rating(budget))
            .with_rating(Dimension::Climate, clamp_rating(climate));
        for dimension in ACTIVITY_DIMENSIONS {
            let rating = self.activity_rating(dimension, &labels);
            preferences.set_rating(dimension, clamp_rating(rating));
        }
        preferences
    }
}

/// Normalised style and interest labels, kept apart per answer list.
struct SelectedLabels {
    styles: BTreeSet<String>,
    interests: BTreeSet<String>,
}

impl SelectedLabels {
    fn from_answers(answers: &SurveyAnswers) -> Self {
        Self {
            styles: normalise_labels(&answers.travel_style),
            interests: normalise_labels(&answers.interests),
        }
    }

    fn matches(&self, rule: &ActivityRule) -> bool {
        let selected = match rule.source {
            LabelSource::TravelStyle => &self.styles,
            LabelSource::Interest => &self.interests,
        };
        selected.contains(&rule.label.to_lowercase())
    }
}

fn normalise_labels(labels: &[String]) -> BTreeSet<String> {
    labels
        .iter()
        .map(|label| label.trim().to_lowercase())
        .collect()
}

fn clamp_rating(value: f64) -> f64 {
    value.clamp(MIN_RATING, MAX_RATING)
}
