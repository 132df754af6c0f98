//! Command-line interface for the Outlook activity recommender.
//!
//! Three subcommands share one configuration story: every option can come
//! from a CLI flag, an `OUTLOOK_CMDS_<COMMAND>_<FIELD>` environment variable
//! or a configuration file, merged by `ortho_config` with CLI flags taking
//! precedence.
//!
//! - `rank` fetches a forecast for a place name or coordinates and prints a
//!   recommendation with activity rankings.
//! - `score` ranks an observation series stored in a JSON file offline.
//! - `geocode` prints the places matching a name.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod geocode;
mod output;
mod rank;
mod score;
mod services;

pub use error::CliError;

use geocode::GeocodeArgs;
use rank::RankArgs;
use score::ScoreArgs;
use services::HttpServiceBuilder;

pub(crate) const ARG_PLACE: &str = "place";
pub(crate) const ARG_LATITUDE: &str = "latitude";
pub(crate) const ARG_LONGITUDE: &str = "longitude";
pub(crate) const ARG_FORECAST_DAYS: &str = "forecast-days";
pub(crate) const ARG_FORECAST_URL: &str = "forecast-url";
pub(crate) const ARG_GEOCODING_URL: &str = "geocoding-url";
pub(crate) const ARG_LEADERBOARD: &str = "leaderboard";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_SERIES: &str = "series";
pub(crate) const ARG_NAME: &str = "name";
pub(crate) const ARG_COUNT: &str = "count";
pub(crate) const ARG_LANGUAGE: &str = "language";
pub(crate) const ARG_COUNTRY_CODE: &str = "country-code";
pub(crate) const ENV_RANK_PLACE: &str = "OUTLOOK_CMDS_RANK_PLACE";
pub(crate) const ENV_RANK_LATITUDE: &str = "OUTLOOK_CMDS_RANK_LATITUDE";
pub(crate) const ENV_RANK_LONGITUDE: &str = "OUTLOOK_CMDS_RANK_LONGITUDE";
pub(crate) const ENV_SCORE_SERIES: &str = "OUTLOOK_CMDS_SCORE_SERIES_PATH";
pub(crate) const ENV_GEOCODE_NAME: &str = "OUTLOOK_CMDS_GEOCODE_NAME";

/// Run the Outlook CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] describing the first failure; nothing is written
/// to the output when a command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    let services = HttpServiceBuilder;
    match cli.command {
        Command::Rank(args) => rank::run_rank_with(args, &services, &mut stdout),
        Command::Score(args) => score::run_score_with(args, &mut stdout),
        Command::Geocode(args) => geocode::run_geocode_with(args, &services, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "outlook",
    about = "Rank outdoor and indoor activities against the upcoming weather",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend activities for a place or a pair of coordinates.
    Rank(RankArgs),
    /// Rank an observation series stored in a JSON file.
    Score(ScoreArgs),
    /// Look up places matching a name.
    Geocode(GeocodeArgs),
}

#[cfg(test)]
mod tests;
