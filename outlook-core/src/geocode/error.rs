use thiserror::Error;

/// Errors from [`crate::geocode::Geocoder::search`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The query carried no usable name.
    #[error("place name must not be empty")]
    EmptyName,
    /// The requested result count is outside the supported range.
    #[error("result count {count} is outside 1..={max}")]
    InvalidCount {
        /// Requested count.
        count: u8,
        /// Largest supported count.
        max: u8,
    },
    /// The request could not reach the geocoding service.
    #[error("network error requesting {url}: {message}")]
    NetworkError {
        /// Request URL.
        url: String,
        /// Underlying error message.
        message: String,
    },
    /// The geocoding service did not answer in time.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The geocoding service answered with a non-success status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpError {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Underlying error message.
        message: String,
    },
    /// The geocoding service reported an error in its payload.
    #[error("geocoding service error: {reason}")]
    ServiceError {
        /// Reason supplied by the service.
        reason: String,
    },
    /// The payload could not be decoded.
    #[error("failed to parse geocoding response: {message}")]
    ParseError {
        /// Decoder message.
        message: String,
    },
}
