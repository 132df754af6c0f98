//! Place search via the Open-Meteo geocoding API.
//!
//! [`HttpGeocoder`] implements [`outlook_core::Geocoder`]. A search that
//! matches nothing returns an empty list rather than an error.
//!
//! # Example
//!
//! ```no_run
//! use outlook_core::{GeocodeQuery, Geocoder};
//! use outlook_data::geocoding::{DEFAULT_GEOCODING_URL, HttpGeocoder};
//!
//! let geocoder = HttpGeocoder::new(DEFAULT_GEOCODING_URL)?;
//! for place in geocoder.search(&GeocodeQuery::new("Aspen").with_count(3))? {
//!     println!("{} ({}, {})", place.label(), place.latitude, place.longitude);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod provider;
mod wire;

pub use provider::{DEFAULT_GEOCODING_URL, HttpGeocoder, HttpGeocoderConfig};
