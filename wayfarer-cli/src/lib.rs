//! Command-line interface for ranking Wayfarer destinations.
//!
//! `wayfarer rank <preferences> --destinations <path>` loads a traveller's
//! preferences and a destination catalogue from JSON, ranks the catalogue and
//! prints the recommendations with summary insights as JSON on stdout.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod input;
mod rank;

pub use error::CliError;
use rank::{RankArgs, run_rank};
#[cfg(test)]
use rank::{RankConfig, config_from_layers_for_test, load_preferences, run_rank_with};

pub(crate) const ARG_RANK_PREFERENCES: &str = "preferences";
pub(crate) const ARG_RANK_DESTINATIONS: &str = "destinations";
pub(crate) const ARG_RANK_LIMIT: &str = "limit";
pub(crate) const ARG_RANK_ALGORITHM: &str = "algorithm";
pub(crate) const ARG_RANK_SIMILARITY_WEIGHT: &str = "similarity-weight";
pub(crate) const ARG_RANK_POPULARITY_WEIGHT: &str = "popularity-weight";
pub(crate) const ARG_RANK_NOVELTY_WEIGHT: &str = "novelty-weight";
pub(crate) const ENV_RANK_PREFERENCES: &str = "WAYFARER_CMDS_RANK_PREFERENCES";
pub(crate) const ENV_RANK_DESTINATIONS: &str = "WAYFARER_CMDS_RANK_DESTINATIONS";

/// Run the Wayfarer CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, inputs
/// cannot be loaded, or the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    about = "Rank travel destinations against a traveller's preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a destination catalogue and print explained recommendations.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
