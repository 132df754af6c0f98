//! Facade crate for the Outlook activity recommendation engine.
//!
//! This crate re-exports the core domain types and the scoring engine, and
//! exposes the HTTP forecast and geocoding providers behind the `http`
//! feature.

#![forbid(unsafe_code)]

pub use outlook_core::{
    Activity, ActivityRanking, DailyObservation, Forecast, ForecastCache, ForecastError,
    ForecastProvider, ForecastRequest, GeocodeError, GeocodeQuery, Geocoder, ObservationSeries,
    ObservationSeriesError, Place, SuitabilityScorer, WeatherClass, WeatherCode,
};
pub use outlook_scorer::{
    Recommendation, RecommendError, RuleTableScorer, ScoreTier, average, leaderboard, rank,
    reasoning, recommend, recommend_for_coordinates, score, score_activity,
};

#[cfg(feature = "http")]
pub use outlook_data::{
    forecast::{HttpForecastProvider, HttpForecastProviderConfig},
    geocoding::{HttpGeocoder, HttpGeocoderConfig},
};
