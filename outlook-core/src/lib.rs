//! Core domain types for the Outlook engine.
//!
//! These models describe the daily weather observations consumed by the
//! activity scorer, the rankings it produces, and the collaborator traits
//! used to fetch forecasts and resolve place names. Constructors and
//! validators return `Result` to surface malformed input early.

#![forbid(unsafe_code)]

pub mod activity;
pub mod cache;
pub mod forecast;
pub mod geocode;
pub mod observation;
pub mod scorer;
pub mod weather_code;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use activity::{Activity, ActivityRanking, ParseActivityError};
pub use cache::ForecastCache;
pub use forecast::{
    DEFAULT_FORECAST_DAYS, DEFAULT_TIMEZONE, Forecast, ForecastError, ForecastProvider,
    ForecastRequest, MAX_FORECAST_DAYS,
};
pub use geocode::{
    DEFAULT_GEOCODE_COUNT, GeocodeError, GeocodeQuery, Geocoder, MAX_GEOCODE_COUNT, Place,
};
pub use observation::{
    DailyObservation, DayConditions, Days, ObservationSeries, ObservationSeriesError,
};
pub use scorer::{MAX_SCORE, MIN_SCORE, SuitabilityScorer};
pub use weather_code::{WeatherClass, WeatherCode};
