//! Daily forecasts from the Open-Meteo forecast API.
//!
//! [`HttpForecastProvider`] implements [`outlook_core::ForecastProvider`].
//! Each request asks for the five daily variables the scorer consumes and
//! normalises the loosely-typed `daily` block into an
//! [`outlook_core::ObservationSeries`]:
//! - a bare `time` string becomes a one-element list;
//! - missing arrays become empty lists;
//! - a missing `daily` block is reported as
//!   [`ForecastError::MissingDaily`](outlook_core::ForecastError::MissingDaily).
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use outlook_core::{ForecastProvider, ForecastRequest};
//! use outlook_data::forecast::{HttpForecastProvider, HttpForecastProviderConfig};
//!
//! let config = HttpForecastProviderConfig::new("https://api.open-meteo.com/v1/forecast")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let provider = HttpForecastProvider::with_config(config)?;
//!
//! let request = ForecastRequest::new(46.02, 7.75).with_forecast_days(3);
//! let forecast = provider.fetch_forecast(&request)?;
//! println!("{:?}", forecast.daily.time);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod open_meteo;
mod provider;

pub use open_meteo::{DAILY_VARIABLES, DailyBlock, OneOrMany};
pub use provider::{
    DEFAULT_FORECAST_URL, HttpForecastProvider, HttpForecastProviderConfig, parse_forecast,
};
