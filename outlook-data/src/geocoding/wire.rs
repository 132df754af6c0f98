//! Open-Meteo geocoding API response types.
//!
//! See: <https://open-meteo.com/en/docs/geocoding-api>

use outlook_core::Place;
use serde::Deserialize;

/// Search response. `results` is omitted entirely when nothing matches.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Matching places in relevance order.
    #[serde(default)]
    pub results: Vec<PlaceRecord>,
}

/// One search result.
#[derive(Debug, Deserialize)]
pub struct PlaceRecord {
    /// Upstream identifier.
    pub id: Option<u64>,
    /// Place name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Country name.
    pub country: Option<String>,
    /// ISO country code.
    pub country_code: Option<String>,
    /// First-level administrative area.
    pub admin1: Option<String>,
    /// Timezone name.
    pub timezone: Option<String>,
}

impl From<PlaceRecord> for Place {
    fn from(record: PlaceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            latitude: record.latitude,
            longitude: record.longitude,
            country: record.country,
            country_code: record.country_code,
            admin1: record.admin1,
            timezone: record.timezone,
        }
    }
}
