//! Rank command implementation for the Wayfarer CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfarer_core::{
    Algorithm, DestinationAttributes, PreferenceTranslator, PreferenceVector, Recommender,
    ScoredCandidate, SurveyAnswers, SurveyTranslator,
};
use wayfarer_scorer::{
    CosineRanker, HybridRanker, PopularityWeights, RankingWeights, RecommendationInsights,
};

use crate::input::{file_is_file, load_json};
use crate::{
    ARG_RANK_ALGORITHM, ARG_RANK_DESTINATIONS, ARG_RANK_LIMIT, ARG_RANK_NOVELTY_WEIGHT,
    ARG_RANK_POPULARITY_WEIGHT, ARG_RANK_PREFERENCES, ARG_RANK_SIMILARITY_WEIGHT, CliError,
    ENV_RANK_DESTINATIONS, ENV_RANK_PREFERENCES,
};

/// Number of recommendations returned when no limit is configured.
pub(crate) const DEFAULT_LIMIT: usize = 10;

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a destination catalogue against a traveller's \
                 preferences. Preferences are either explicit 1-5 ratings \
                 ({\"ratings\": {...}}) or survey answers ({\"survey\": {...}}). \
                 Destinations are a JSON array of destination records.",
    about = "Rank destinations for a traveller"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct RankArgs {
    /// Path to a JSON preferences document.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Path to a JSON array of destination records.
    #[arg(long = ARG_RANK_DESTINATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) destinations: Option<Utf8PathBuf>,
    /// Maximum number of recommendations to return (default 10).
    #[arg(long = ARG_RANK_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Ranking algorithm: "hybrid" (default) or "cosine".
    #[arg(long = ARG_RANK_ALGORITHM, value_name = "name")]
    #[serde(default)]
    pub(crate) algorithm: Option<String>,
    /// Hybrid weight for preference similarity (default 0.6).
    #[arg(long = ARG_RANK_SIMILARITY_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) similarity_weight: Option<f64>,
    /// Hybrid weight for popularity (default 0.3).
    #[arg(long = ARG_RANK_POPULARITY_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) popularity_weight: Option<f64>,
    /// Hybrid weight for novelty (default 0.1).
    #[arg(long = ARG_RANK_NOVELTY_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) novelty_weight: Option<f64>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the preferences document.
    pub(crate) preferences: Utf8PathBuf,
    /// Path to the destination catalogue.
    pub(crate) destinations: Utf8PathBuf,
    /// Maximum number of recommendations.
    pub(crate) limit: usize,
    /// Ranking algorithm to apply.
    pub(crate) algorithm: Algorithm,
    /// Blend weights for the hybrid algorithm.
    pub(crate) weights: RankingWeights,
}

impl RankConfig {
    fn build_recommender(&self) -> Result<Box<dyn Recommender>, CliError> {
        Ok(match self.algorithm {
            Algorithm::Cosine => Box::new(CosineRanker),
            Algorithm::Hybrid => Box::new(HybridRanker::new(
                self.weights,
                PopularityWeights::default(),
            )?),
        })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.preferences, ARG_RANK_PREFERENCES)?;
        Self::require_existing(&self.destinations, ARG_RANK_DESTINATIONS)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let preferences = args.preferences.ok_or(CliError::MissingArgument {
            field: ARG_RANK_PREFERENCES,
            env: ENV_RANK_PREFERENCES,
        })?;
        let destinations = args.destinations.ok_or(CliError::MissingArgument {
            field: ARG_RANK_DESTINATIONS,
            env: ENV_RANK_DESTINATIONS,
        })?;
        let algorithm = match args.algorithm {
            Some(name) => name.parse()?,
            None => Algorithm::default(),
        };
        let defaults = RankingWeights::default();
        let weights = RankingWeights {
            similarity: args.similarity_weight.unwrap_or(defaults.similarity),
            popularity: args.popularity_weight.unwrap_or(defaults.popularity),
            novelty: args.novelty_weight.unwrap_or(defaults.novelty),
        };
        Ok(Self {
            preferences,
            destinations,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            algorithm,
            weights,
        })
    }
}

/// A preferences file holds either explicit ratings or survey answers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum PreferenceDocument {
    /// Ratings keyed by dimension name.
    Ratings(PreferenceVector),
    /// Onboarding answers translated into ratings.
    Survey(SurveyAnswers),
}

impl PreferenceDocument {
    fn into_preferences(self) -> PreferenceVector {
        match self {
            Self::Ratings(preferences) => preferences,
            Self::Survey(answers) => SurveyTranslator::default().translate(&answers),
        }
    }
}

/// JSON report written to stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RankReport<'a> {
    algorithm: Algorithm,
    recommendations: &'a [ScoredCandidate],
    insights: RecommendationInsights,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let recommender = config.build_recommender()?;
    let preferences = load_preferences(&config.preferences)?;
    let destinations: Vec<DestinationAttributes> =
        load_json(&config.destinations, ARG_RANK_DESTINATIONS)?;
    debug!(
        "loaded {} destinations from {}",
        destinations.len(),
        config.destinations
    );

    let recommendations =
        recommender.recommend(Some(&preferences), &destinations, config.limit);
    info!(
        "{} ranking returned {} of {} destinations",
        config.algorithm,
        recommendations.len(),
        destinations.len()
    );

    let report = RankReport {
        algorithm: config.algorithm,
        insights: RecommendationInsights::from_candidates(&recommendations),
        recommendations: &recommendations,
    };
    write_report(writer, &report)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Load a preferences document and resolve it to a preference vector.
pub(crate) fn load_preferences(path: &Utf8Path) -> Result<PreferenceVector, CliError> {
    let document: PreferenceDocument = load_json(path, ARG_RANK_PREFERENCES)?;
    Ok(document.into_preferences())
}

fn write_report(writer: &mut dyn Write, report: &RankReport<'_>) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
