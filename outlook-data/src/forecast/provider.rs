//! HTTP-based `ForecastProvider` using the Open-Meteo forecast API.
//!
//! # Example
//!
//! ```no_run
//! use outlook_core::{ForecastProvider, ForecastRequest};
//! use outlook_data::forecast::HttpForecastProvider;
//!
//! let provider = HttpForecastProvider::new("https://api.open-meteo.com/v1/forecast")?;
//! let forecast = provider.fetch_forecast(&ForecastRequest::new(39.19, -106.82))?;
//! println!("{} days", forecast.daily.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use log::{debug, warn};
use outlook_core::{Forecast, ForecastError, ForecastProvider, ForecastRequest};
use url::Url;

use super::open_meteo::{DAILY_VARIABLES, ForecastResponse};
use crate::transport::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ErrorBody, HttpResponse, ProviderBuildError,
    Transport, TransportError, parse_base_url,
};

/// Public Open-Meteo forecast endpoint.
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Configuration for [`HttpForecastProvider`].
#[derive(Debug, Clone)]
pub struct HttpForecastProviderConfig {
    /// Forecast endpoint, e.g. `"https://api.open-meteo.com/v1/forecast"`.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpForecastProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FORECAST_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpForecastProviderConfig {
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

/// Forecast provider backed by the Open-Meteo HTTP API.
///
/// Implements the synchronous [`ForecastProvider`] trait by blocking on an
/// internal Tokio runtime, or on the caller's multi-threaded runtime when
/// one is active.
#[derive(Debug)]
pub struct HttpForecastProvider {
    endpoint: Url,
    transport: Transport,
}

impl HttpForecastProvider {
    /// Create a provider for `base_url` with default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpForecastProviderConfig::new(base_url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn with_config(config: HttpForecastProviderConfig) -> Result<Self, ProviderBuildError> {
        let endpoint = parse_base_url(&config.base_url)?;
        let transport = Transport::new(&config.user_agent, config.timeout)?;
        Ok(Self {
            endpoint,
            transport,
        })
    }

    /// Build the request URL for `request`.
    fn build_url(&self, request: &ForecastRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &request.latitude.to_string())
            .append_pair("longitude", &request.longitude.to_string())
            .append_pair("daily", &DAILY_VARIABLES.join(","))
            .append_pair("timezone", &request.timezone)
            .append_pair("forecast_days", &request.forecast_days.to_string());
        url
    }
}

/// Map a transport failure onto the forecast error taxonomy.
fn convert_transport_error(error: TransportError, url: &Url) -> ForecastError {
    match error {
        TransportError::Timeout { timeout_secs } => ForecastError::Timeout {
            url: url.to_string(),
            timeout_secs,
        },
        TransportError::Network { message } => ForecastError::NetworkError {
            url: url.to_string(),
            message,
        },
    }
}

/// Interpret a completed exchange.
///
/// Non-success statuses carrying an Open-Meteo error body become
/// [`ForecastError::ServiceError`]; other non-success statuses become
/// [`ForecastError::HttpError`].
fn convert_response(
    response: &HttpResponse,
    url: &Url,
    request: &ForecastRequest,
) -> Result<Forecast, ForecastError> {
    if !response.is_success() {
        return Err(ErrorBody::reason(&response.body).map_or_else(
            || ForecastError::HttpError {
                url: url.to_string(),
                status: response.status,
                message: response.body.clone(),
            },
            |reason| ForecastError::ServiceError { reason },
        ));
    }
    parse_forecast(&response.body, request)
}

/// Decode a successful forecast body and normalise its `daily` block.
///
/// Coordinates missing from the body fall back to the requested ones.
///
/// # Errors
///
/// Returns [`ForecastError::ParseError`] when the body is not a forecast
/// payload and [`ForecastError::MissingDaily`] when it has no `daily` block.
pub fn parse_forecast(body: &str, request: &ForecastRequest) -> Result<Forecast, ForecastError> {
    let payload: ForecastResponse =
        serde_json::from_str(body).map_err(|err| ForecastError::ParseError {
            message: err.to_string(),
        })?;
    let daily = payload.daily.ok_or(ForecastError::MissingDaily)?;
    Ok(Forecast {
        latitude: payload.latitude.unwrap_or(request.latitude),
        longitude: payload.longitude.unwrap_or(request.longitude),
        timezone: payload.timezone,
        daily: daily.into_series(),
    })
}

impl ForecastProvider for HttpForecastProvider {
    /// Fetch the daily forecast for `request`.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must be
    /// multi-threaded (`flavor = "multi_thread"`). From a `current_thread`
    /// runtime the provider falls back to its own runtime, which may block
    /// the caller's runtime.
    fn fetch_forecast(&self, request: &ForecastRequest) -> Result<Forecast, ForecastError> {
        request.validate()?;
        let url = self.build_url(request);
        let response = self
            .transport
            .get(&url)
            .map_err(|err| convert_transport_error(err, &url))?;
        let forecast = convert_response(&response, &url, request).inspect_err(|err| {
            warn!("forecast request {url} failed: {err}");
        })?;
        debug!(
            "forecast for ({}, {}) covers {} days",
            request.latitude,
            request.longitude,
            forecast.daily.len()
        );
        Ok(forecast)
    }
}
