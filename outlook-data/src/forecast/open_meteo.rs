//! Open-Meteo forecast API response types.
//!
//! The `daily` block is loosely typed upstream: `time` sometimes arrives as
//! a bare string for single-day windows, and any array may be missing. The
//! types here accept both shapes and [`DailyBlock::into_series`] normalises
//! them.
//!
//! See: <https://open-meteo.com/en/docs>

use outlook_core::{ObservationSeries, WeatherCode};
use serde::Deserialize;

/// Daily variables requested from the forecast API, in request order.
pub const DAILY_VARIABLES: [&str; 5] = [
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_sum",
    "wind_speed_10m_max",
    "weather_code",
];

/// Successful forecast response.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    /// Latitude of the resolved grid cell.
    pub latitude: Option<f64>,
    /// Longitude of the resolved grid cell.
    pub longitude: Option<f64>,
    /// Timezone the daily buckets use.
    pub timezone: Option<String>,
    /// Daily aggregates; absent when no daily variables were resolved.
    pub daily: Option<DailyBlock>,
}

/// A field that may be a single value or a list of values.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A bare value, treated as a one-element list.
    One(T),
    /// A list of values.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// The `daily` block of a forecast response.
///
/// Numeric arrays reject `null` entries, so gaps surface as decode errors
/// rather than silently shifting later days.
#[derive(Debug, Default, Deserialize)]
pub struct DailyBlock {
    /// ISO dates.
    #[serde(default)]
    pub time: Option<OneOrMany<String>>,
    /// Maximum temperature in °C.
    #[serde(default)]
    pub temperature_2m_max: Vec<f64>,
    /// Minimum temperature in °C.
    #[serde(default)]
    pub temperature_2m_min: Vec<f64>,
    /// Precipitation total in mm.
    #[serde(default)]
    pub precipitation_sum: Vec<f64>,
    /// Maximum wind speed in km/h.
    #[serde(default)]
    pub wind_speed_10m_max: Vec<f64>,
    /// WMO weather codes.
    #[serde(default)]
    pub weather_code: Vec<i32>,
}

impl DailyBlock {
    /// Normalise into an [`ObservationSeries`].
    ///
    /// The result is not validated; length mismatches are left for the
    /// scorer to report.
    #[must_use]
    pub fn into_series(self) -> ObservationSeries {
        ObservationSeries {
            time: self.time.map(OneOrMany::into_vec).unwrap_or_default(),
            temperature_2m_max: self.temperature_2m_max,
            temperature_2m_min: self.temperature_2m_min,
            precipitation_sum: self.precipitation_sum,
            wind_speed_10m_max: self.wind_speed_10m_max,
            weather_code: self.weather_code.into_iter().map(WeatherCode::new).collect(),
        }
    }
}
