//! Errors raised while producing a recommendation.

use outlook_core::{ForecastError, ObservationSeriesError};
use thiserror::Error;

/// Errors from [`recommend`](crate::recommend) and
/// [`recommend_for_coordinates`](crate::recommend_for_coordinates).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// Fetching the forecast failed.
    #[error("failed to fetch forecast: {0}")]
    Forecast(#[from] ForecastError),
    /// The forecast's daily block was malformed.
    #[error("forecast daily block is malformed: {0}")]
    InvalidSeries(#[from] ObservationSeriesError),
}
