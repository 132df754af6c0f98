//! Score command implementation for the Outlook CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use outlook_core::{ActivityRanking, ObservationSeries};
use outlook_data::forecast::DailyBlock;
use outlook_fs::open_utf8_file;
use outlook_scorer::{leaderboard, rank};
use serde::{Deserialize, Serialize};

use crate::output::emit_json;
use crate::{ARG_LEADERBOARD, ARG_OUTPUT, ARG_SERIES, CliError, ENV_SCORE_SERIES};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Rank every activity against an observation series stored \
                 as JSON. The file may hold the series itself or a saved \
                 Open-Meteo forecast response with a `daily` block.",
    about = "Rank activities for a stored observation series"
)]
#[ortho_config(prefix = "OUTLOOK")]
pub(crate) struct ScoreArgs {
    /// Path to the observation series JSON file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) series_path: Option<Utf8PathBuf>,
    /// Order rankings by average score, best first.
    #[arg(long = ARG_LEADERBOARD)]
    #[serde(default)]
    pub(crate) leaderboard: bool,
    /// Write the JSON to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) series_path: Utf8PathBuf,
    pub(crate) leaderboard: bool,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match outlook_fs::file_is_file(&self.series_path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_SERIES,
                path: self.series_path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_SERIES,
                    path: self.series_path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_SERIES,
                path: self.series_path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let series_path = args.series_path.ok_or(CliError::MissingArgument {
            field: ARG_SERIES,
            env: ENV_SCORE_SERIES,
        })?;
        Ok(Self {
            series_path,
            leaderboard: args.leaderboard,
            output: args.output,
        })
    }
}

/// Accepted layouts for a series file.
///
/// A saved forecast response goes through the same normalisation as a
/// live one, so a bare `time` string or a missing array is accepted here
/// and reported by the scorer instead.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeriesFile {
    Forecast { daily: DailyBlock },
    Series(ObservationSeries),
}

impl SeriesFile {
    fn into_series(self) -> ObservationSeries {
        match self {
            Self::Forecast { daily } => daily.into_series(),
            Self::Series(series) => series,
        }
    }
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let rankings = execute_score(&config)?;
    emit_json(&rankings, config.output.as_deref(), writer)
}

pub(crate) fn execute_score(config: &ScoreConfig) -> Result<Vec<ActivityRanking>, CliError> {
    let series = load_series(&config.series_path)?;
    let rankings = rank(&series).map_err(|source| CliError::InvalidSeries {
        path: config.series_path.clone(),
        source,
    })?;
    Ok(if config.leaderboard {
        leaderboard(rankings)
    } else {
        rankings
    })
}

/// Loads a JSON-encoded [`ObservationSeries`] from disk.
pub(crate) fn load_series(path: &Utf8Path) -> Result<ObservationSeries, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenSeries {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader::<_, SeriesFile>(reader)
        .map(SeriesFile::into_series)
        .map_err(|source| CliError::ParseSeries {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
