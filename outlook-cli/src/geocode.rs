//! Geocode command implementation for the Outlook CLI.

use std::io::Write;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use outlook_core::{DEFAULT_GEOCODE_COUNT, GeocodeQuery, Place};
use outlook_data::geocoding::DEFAULT_GEOCODING_URL;
use serde::{Deserialize, Serialize};

use crate::output::emit_json;
use crate::services::ServiceBuilder;
use crate::{
    ARG_COUNT, ARG_COUNTRY_CODE, ARG_GEOCODING_URL, ARG_LANGUAGE, ARG_NAME, CliError,
    ENV_GEOCODE_NAME,
};

/// CLI arguments for the `geocode` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "geocode", about = "Look up places matching a name")]
#[ortho_config(prefix = "OUTLOOK")]
pub(crate) struct GeocodeArgs {
    /// Place name to search for.
    #[arg(value_name = ARG_NAME)]
    #[serde(default)]
    pub(crate) name: Option<String>,
    /// Maximum number of matches (1-100, default 10).
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<u8>,
    /// Language for place names, e.g. "de".
    #[arg(long = ARG_LANGUAGE, value_name = "code")]
    #[serde(default)]
    pub(crate) language: Option<String>,
    /// ISO country code filter, e.g. "CH".
    #[arg(long = ARG_COUNTRY_CODE, value_name = "code")]
    #[serde(default)]
    pub(crate) country_code: Option<String>,
    /// Geocoding endpoint (default: Open-Meteo).
    #[arg(long = ARG_GEOCODING_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) geocoding_url: Option<String>,
}

impl GeocodeArgs {
    pub(crate) fn into_config(self) -> Result<GeocodeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GeocodeConfig::try_from(merged)
    }
}

/// Resolved `geocode` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GeocodeConfig {
    pub(crate) query: GeocodeQuery,
    pub(crate) geocoding_url: String,
}

impl TryFrom<GeocodeArgs> for GeocodeConfig {
    type Error = CliError;

    fn try_from(args: GeocodeArgs) -> Result<Self, Self::Error> {
        let name = args.name.ok_or(CliError::MissingArgument {
            field: ARG_NAME,
            env: ENV_GEOCODE_NAME,
        })?;
        let mut query =
            GeocodeQuery::new(name).with_count(args.count.unwrap_or(DEFAULT_GEOCODE_COUNT));
        if let Some(language) = args.language {
            query = query.with_language(language);
        }
        if let Some(country_code) = args.country_code {
            query = query.with_country_code(country_code);
        }
        Ok(Self {
            query,
            geocoding_url: args
                .geocoding_url
                .unwrap_or_else(|| DEFAULT_GEOCODING_URL.to_owned()),
        })
    }
}

pub(crate) fn run_geocode_with(
    args: GeocodeArgs,
    services: &dyn ServiceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let places = execute_geocode(&config, services)?;
    emit_json(&places, None, writer)
}

pub(crate) fn execute_geocode(
    config: &GeocodeConfig,
    services: &dyn ServiceBuilder,
) -> Result<Vec<Place>, CliError> {
    let geocoder = services.geocoder(&config.geocoding_url)?;
    geocoder
        .search(&config.query)
        .map_err(|source| CliError::Geocode {
            name: config.query.name.clone(),
            source,
        })
}
