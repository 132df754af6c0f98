//! HTTP-based `Geocoder` using the Open-Meteo geocoding API.

use std::time::Duration;

use log::debug;
use outlook_core::{GeocodeError, GeocodeQuery, Geocoder, Place};
use url::Url;

use super::wire::SearchResponse;
use crate::transport::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ErrorBody, HttpResponse, ProviderBuildError,
    Transport, TransportError, parse_base_url,
};

/// Public Open-Meteo geocoding endpoint.
pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Configuration for [`HttpGeocoder`].
#[derive(Debug, Clone)]
pub struct HttpGeocoderConfig {
    /// Search endpoint, e.g. `"https://geocoding-api.open-meteo.com/v1/search"`.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpGeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEOCODING_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpGeocoderConfig {
    /// Create a new configuration with the given endpoint.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Geocoder backed by the Open-Meteo HTTP API.
#[derive(Debug)]
pub struct HttpGeocoder {
    endpoint: Url,
    transport: Transport,
}

impl HttpGeocoder {
    /// Create a geocoder for `base_url` with default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpGeocoderConfig::new(base_url))
    }

    /// Create a geocoder with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn with_config(config: HttpGeocoderConfig) -> Result<Self, ProviderBuildError> {
        let endpoint = parse_base_url(&config.base_url)?;
        let transport = Transport::new(&config.user_agent, config.timeout)?;
        Ok(Self {
            endpoint,
            transport,
        })
    }

    /// Build the request URL for `query`.
    fn build_url(&self, query: &GeocodeQuery) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("name", query.name.trim())
                .append_pair("count", &query.count.to_string())
                .append_pair("format", "json");
            if let Some(language) = &query.language {
                pairs.append_pair("language", language);
            }
            if let Some(country_code) = &query.country_code {
                pairs.append_pair("countryCode", country_code);
            }
        }
        url
    }
}

fn convert_transport_error(error: TransportError, url: &Url) -> GeocodeError {
    match error {
        TransportError::Timeout { timeout_secs } => GeocodeError::Timeout {
            url: url.to_string(),
            timeout_secs,
        },
        TransportError::Network { message } => GeocodeError::NetworkError {
            url: url.to_string(),
            message,
        },
    }
}

fn convert_response(response: &HttpResponse, url: &Url) -> Result<Vec<Place>, GeocodeError> {
    if !response.is_success() {
        return Err(ErrorBody::reason(&response.body).map_or_else(
            || GeocodeError::HttpError {
                url: url.to_string(),
                status: response.status,
                message: response.body.clone(),
            },
            |reason| GeocodeError::ServiceError { reason },
        ));
    }
    let payload: SearchResponse =
        serde_json::from_str(&response.body).map_err(|err| GeocodeError::ParseError {
            message: err.to_string(),
        })?;
    Ok(payload.results.into_iter().map(Place::from).collect())
}

impl Geocoder for HttpGeocoder {
    fn search(&self, query: &GeocodeQuery) -> Result<Vec<Place>, GeocodeError> {
        query.validate()?;
        let url = self.build_url(query);
        let response = self
            .transport
            .get(&url)
            .map_err(|err| convert_transport_error(err, &url))?;
        let places = convert_response(&response, &url)?;
        debug!("geocoding {:?} matched {} places", query.name, places.len());
        Ok(places)
    }
}
