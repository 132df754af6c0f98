//! Construction of the upstream weather services used by CLI commands.

use outlook_core::{ForecastProvider, Geocoder};
use outlook_data::forecast::HttpForecastProvider;
use outlook_data::geocoding::HttpGeocoder;

use crate::CliError;

/// Builds the forecast provider and geocoder for one command invocation.
pub(crate) trait ServiceBuilder {
    /// Build a forecast provider for `base_url`.
    fn forecast_provider(&self, base_url: &str) -> Result<Box<dyn ForecastProvider>, CliError>;

    /// Build a geocoder for `base_url`.
    fn geocoder(&self, base_url: &str) -> Result<Box<dyn Geocoder>, CliError>;
}

/// Open-Meteo adapters over HTTP.
pub(crate) struct HttpServiceBuilder;

impl ServiceBuilder for HttpServiceBuilder {
    fn forecast_provider(&self, base_url: &str) -> Result<Box<dyn ForecastProvider>, CliError> {
        let provider =
            HttpForecastProvider::new(base_url).map_err(|source| CliError::BuildProvider {
                base_url: base_url.to_owned(),
                source,
            })?;
        Ok(Box::new(provider))
    }

    fn geocoder(&self, base_url: &str) -> Result<Box<dyn Geocoder>, CliError> {
        let geocoder = HttpGeocoder::new(base_url).map_err(|source| CliError::BuildProvider {
            base_url: base_url.to_owned(),
            source,
        })?;
        Ok(Box::new(geocoder))
    }
}
