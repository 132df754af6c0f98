//! HTTP adapters for the Outlook engine's upstream weather services.
//!
//! - [`forecast::HttpForecastProvider`] implements
//!   [`outlook_core::ForecastProvider`] against the Open-Meteo forecast API
//!   and normalises its loosely-typed `daily` block into an
//!   [`outlook_core::ObservationSeries`].
//! - [`geocoding::HttpGeocoder`] implements [`outlook_core::Geocoder`]
//!   against the Open-Meteo geocoding API.
//!
//! Both adapters expose synchronous traits and block on an internal Tokio
//! runtime, so the core crates stay embeddable in synchronous code.

#![forbid(unsafe_code)]

pub mod forecast;
pub mod geocoding;
mod transport;

pub use transport::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ProviderBuildError};
