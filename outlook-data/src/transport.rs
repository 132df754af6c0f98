//! Blocking HTTP transport shared by the Open-Meteo adapters.
//!
//! The provider traits are synchronous. [`Transport`] bridges them to
//! `reqwest` by blocking on a Tokio runtime it owns. Inside an existing
//! multi-threaded runtime it borrows that runtime's handle through
//! [`tokio::task::block_in_place`] instead, which avoids nested runtime
//! panics. Inside a `current_thread` runtime it falls back to its own
//! runtime; this can deadlock if the caller's runtime drives IO the request
//! depends on.

use std::fmt;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Deserialize;
use tokio::runtime::{Builder, Handle, Runtime, RuntimeFlavor};
use url::Url;

/// Default user agent for upstream requests.
pub const DEFAULT_USER_AGENT: &str = "outlook-engine/0.1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error type for HTTP adapter construction failures.
#[derive(Debug)]
pub enum ProviderBuildError {
    /// The configured base URL could not be parsed.
    InvalidUrl {
        /// URL as configured.
        url: String,
        /// Parser error.
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
}

impl fmt::Display for ProviderBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl { url, source } => write!(f, "invalid base URL {url:?}: {source}"),
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
        }
    }
}

impl std::error::Error for ProviderBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUrl { source, .. } => Some(source),
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}

/// Parse a configured base URL.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ProviderBuildError> {
    Url::parse(raw).map_err(|source| ProviderBuildError::InvalidUrl {
        url: raw.to_owned(),
        source,
    })
}

/// Status and body of a completed exchange.
#[derive(Debug)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub(crate) const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Error body both Open-Meteo APIs return with 4xx statuses, e.g.
/// `{"error": true, "reason": "Latitude must be in range of -90 to 90°."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: bool,
    pub reason: Option<String>,
}

impl ErrorBody {
    /// Extract the service's reason from a failed response body.
    pub(crate) fn reason(body: &str) -> Option<String> {
        match serde_json::from_str::<Self>(body) {
            Ok(Self {
                error: true,
                reason: Some(reason),
            }) => Some(reason),
            _ => None,
        }
    }
}

/// Failure before a complete response was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TransportError {
    /// The exchange exceeded the configured timeout.
    Timeout { timeout_secs: u64 },
    /// Connection, TLS or body read failure.
    Network { message: String },
}

impl TransportError {
    fn from_reqwest(error: &reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                timeout_secs: timeout.as_secs(),
            }
        } else {
            Self::Network {
                message: error.to_string(),
            }
        }
    }
}

/// Blocking GET client with an owned runtime.
pub(crate) struct Transport {
    client: Client,
    runtime: Runtime,
    timeout: Duration,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("client", &self.client)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Transport {
    pub(crate) fn new(user_agent: &str, timeout: Duration) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            runtime,
            timeout,
        })
    }

    /// Issue a GET request and wait for the full body.
    pub(crate) fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        debug!("GET {url}");
        let future = self.get_async(url);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }

    async fn get_async(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| TransportError::from_reqwest(&err, self.timeout))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::from_reqwest(&err, self.timeout))?;
        debug!("GET {url} answered {status} with {} bytes", body.len());
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(301, false)]
    #[case(400, false)]
    #[case(503, false)]
    fn success_covers_2xx_only(#[case] status: u16, #[case] expected: bool) {
        let response = HttpResponse {
            status,
            body: String::new(),
        };
        assert_eq!(response.is_success(), expected);
    }

    #[rstest]
    fn error_body_reason_is_extracted() {
        let body = r#"{"error": true, "reason": "Cannot initialize WeatherVariable from invalid String value"}"#;
        assert_eq!(
            ErrorBody::reason(body).as_deref(),
            Some("Cannot initialize WeatherVariable from invalid String value")
        );
    }

    #[rstest]
    #[case(r#"{"error": false, "reason": "ignored"}"#)]
    #[case(r#"{"error": true}"#)]
    #[case("Bad Gateway")]
    fn bodies_without_a_reason_yield_none(#[case] body: &str) {
        assert_eq!(ErrorBody::reason(body), None);
    }

    #[rstest]
    fn invalid_base_url_is_reported() {
        let err = parse_base_url("not a url").expect_err("relative URL");
        assert!(matches!(err, ProviderBuildError::InvalidUrl { .. }));
        assert!(err.to_string().contains("not a url"));
    }
}
