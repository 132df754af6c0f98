use thiserror::Error;

/// Errors from [`crate::forecast::ForecastProvider::fetch_forecast`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    /// Latitude or longitude is not a finite value on the globe.
    #[error("coordinates ({latitude}, {longitude}) are outside the valid range")]
    InvalidCoordinates {
        /// Requested latitude.
        latitude: f64,
        /// Requested longitude.
        longitude: f64,
    },
    /// The forecast window is empty or longer than the upstream allows.
    #[error("forecast window of {days} days is outside 1..={max}")]
    InvalidForecastDays {
        /// Requested window length.
        days: u8,
        /// Longest supported window.
        max: u8,
    },
    /// The request could not reach the upstream service.
    #[error("network error requesting {url}: {message}")]
    NetworkError {
        /// Request URL.
        url: String,
        /// Underlying error message.
        message: String,
    },
    /// The upstream service did not answer in time.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The upstream service answered with a non-success status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpError {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Underlying error message.
        message: String,
    },
    /// The upstream service reported an error in its payload.
    #[error("forecast service error: {reason}")]
    ServiceError {
        /// Reason supplied by the service.
        reason: String,
    },
    /// The payload could not be decoded.
    #[error("failed to parse forecast response: {message}")]
    ParseError {
        /// Decoder message.
        message: String,
    },
    /// The payload carried no daily block.
    #[error("forecast response has no daily data")]
    MissingDaily,
}
