//! Resolve place names to coordinates.
//!
//! The `Geocoder` trait turns a free-text place name into candidate
//! [`Place`] values whose coordinates can then be handed to a
//! [`ForecastProvider`](crate::ForecastProvider).

mod error;
mod place;

pub use error::GeocodeError;
pub use place::{DEFAULT_GEOCODE_COUNT, GeocodeQuery, Geocoder, MAX_GEOCODE_COUNT, Place};
