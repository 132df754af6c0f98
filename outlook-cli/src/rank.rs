//! Rank command implementation for the Outlook CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use outlook_core::{
    DEFAULT_FORECAST_DAYS, ForecastCache, ForecastProvider, ForecastRequest, GeocodeQuery,
    Geocoder, Place,
};
use outlook_data::forecast::DEFAULT_FORECAST_URL;
use outlook_data::geocoding::DEFAULT_GEOCODING_URL;
use outlook_scorer::{Recommendation, leaderboard, recommend, recommend_for_coordinates};
use serde::{Deserialize, Serialize};

use crate::output::emit_json;
use crate::services::ServiceBuilder;
use crate::{
    ARG_FORECAST_DAYS, ARG_FORECAST_URL, ARG_GEOCODING_URL, ARG_LATITUDE, ARG_LEADERBOARD,
    ARG_LONGITUDE, ARG_OUTPUT, ARG_PLACE, CliError, ENV_RANK_LATITUDE, ENV_RANK_LONGITUDE,
    ENV_RANK_PLACE,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Fetch the daily forecast for a place name or a pair of \
                 coordinates, score every activity against each day and \
                 print the recommendation as JSON. Place names are resolved \
                 with the geocoding service and the best match is used.",
    about = "Recommend activities for a location"
)]
#[ortho_config(prefix = "OUTLOOK")]
pub(crate) struct RankArgs {
    /// Place name to geocode, e.g. "Zermatt".
    #[arg(long = ARG_PLACE, value_name = "name")]
    #[serde(default)]
    pub(crate) place: Option<String>,
    /// Latitude in decimal degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude in decimal degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Number of forecast days to score (1-16, default 7).
    #[arg(long = ARG_FORECAST_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) forecast_days: Option<u8>,
    /// Forecast endpoint (default: Open-Meteo).
    #[arg(long = ARG_FORECAST_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) forecast_url: Option<String>,
    /// Geocoding endpoint (default: Open-Meteo).
    #[arg(long = ARG_GEOCODING_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) geocoding_url: Option<String>,
    /// Order rankings by average score, best first.
    #[arg(long = ARG_LEADERBOARD)]
    #[serde(default)]
    pub(crate) leaderboard: bool,
    /// Write the JSON to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Where the forecast should be fetched for.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RankTarget {
    /// A place name to resolve through the geocoder.
    Place(String),
    /// Explicit coordinates.
    Coordinates { latitude: f64, longitude: f64 },
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    pub(crate) target: RankTarget,
    pub(crate) forecast_days: u8,
    pub(crate) forecast_url: String,
    pub(crate) geocoding_url: String,
    pub(crate) leaderboard: bool,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let place = args.place.filter(|name| !name.trim().is_empty());
        let target = match (place, args.latitude, args.longitude) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(CliError::ConflictingLocation);
            }
            (Some(name), None, None) => RankTarget::Place(name),
            (None, Some(latitude), Some(longitude)) => RankTarget::Coordinates {
                latitude,
                longitude,
            },
            (None, Some(_), None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_LONGITUDE,
                    env: ENV_RANK_LONGITUDE,
                });
            }
            (None, None, Some(_)) => {
                return Err(CliError::MissingArgument {
                    field: ARG_LATITUDE,
                    env: ENV_RANK_LATITUDE,
                });
            }
            (None, None, None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_PLACE,
                    env: ENV_RANK_PLACE,
                });
            }
        };

        Ok(Self {
            target,
            forecast_days: args.forecast_days.unwrap_or(DEFAULT_FORECAST_DAYS),
            forecast_url: args
                .forecast_url
                .unwrap_or_else(|| DEFAULT_FORECAST_URL.to_owned()),
            geocoding_url: args
                .geocoding_url
                .unwrap_or_else(|| DEFAULT_GEOCODING_URL.to_owned()),
            leaderboard: args.leaderboard,
            output: args.output,
        })
    }
}

pub(crate) fn run_rank_with(
    args: RankArgs,
    services: &dyn ServiceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let recommendation = execute_rank(&config, services)?;
    emit_json(&recommendation, config.output.as_deref(), writer)
}

pub(crate) fn execute_rank(
    config: &RankConfig,
    services: &dyn ServiceBuilder,
) -> Result<Recommendation, CliError> {
    let provider = services.forecast_provider(&config.forecast_url)?;
    let mut cache = ForecastCache::new();
    let mut recommendation = match &config.target {
        RankTarget::Place(name) => {
            let geocoder = services.geocoder(&config.geocoding_url)?;
            let place = resolve_place(geocoder.as_ref(), name)?;
            rank_place(provider.as_ref(), &mut cache, &place, config.forecast_days)?
        }
        RankTarget::Coordinates {
            latitude,
            longitude,
        } => {
            let request = ForecastRequest::new(*latitude, *longitude)
                .with_forecast_days(config.forecast_days);
            let location = format!("{latitude}, {longitude}");
            recommend_for_coordinates(provider.as_ref(), &mut cache, &request, location.clone())
                .map_err(|source| CliError::Recommend { location, source })?
        }
    };
    if config.leaderboard {
        recommendation.activity_rankings = leaderboard(recommendation.activity_rankings);
    }
    Ok(recommendation)
}

fn rank_place(
    provider: &dyn ForecastProvider,
    cache: &mut ForecastCache,
    place: &Place,
    forecast_days: u8,
) -> Result<Recommendation, CliError> {
    recommend(provider, cache, place, forecast_days).map_err(|source| CliError::Recommend {
        location: place.label(),
        source,
    })
}

/// Resolve `name` to the geocoder's best match.
pub(crate) fn resolve_place(geocoder: &dyn Geocoder, name: &str) -> Result<Place, CliError> {
    let places = geocoder
        .search(&GeocodeQuery::new(name).with_count(1))
        .map_err(|source| CliError::Geocode {
            name: name.to_owned(),
            source,
        })?;
    let place = places
        .into_iter()
        .next()
        .ok_or_else(|| CliError::PlaceNotFound {
            name: name.to_owned(),
        })?;
    debug!(
        "resolved {name:?} to {} ({}, {})",
        place.label(),
        place.latitude,
        place.longitude
    );
    Ok(place)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
