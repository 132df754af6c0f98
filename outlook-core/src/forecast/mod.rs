//! Fetch daily forecasts for a pair of coordinates.
//!
//! The `ForecastProvider` trait abstracts the retrieval of a multi-day
//! [`ObservationSeries`](crate::ObservationSeries) from an upstream weather
//! service. Callers supply a [`ForecastRequest`] and receive a [`Forecast`].
//!
//! Errors are returned when inputs are invalid, e.g. coordinates outside the
//! globe, or when the upstream service fails.

mod error;
mod provider;

pub use error::ForecastError;
pub use provider::{
    DEFAULT_FORECAST_DAYS, DEFAULT_TIMEZONE, Forecast, ForecastProvider, ForecastRequest,
    MAX_FORECAST_DAYS,
};
