//! Geocoding query, result and provider trait.

use super::error::GeocodeError;

/// Default number of candidates requested from the geocoder.
pub const DEFAULT_GEOCODE_COUNT: u8 = 10;
/// Largest number of candidates the geocoder returns.
pub const MAX_GEOCODE_COUNT: u8 = 100;

/// A named location returned by a [`Geocoder`].
///
/// # Examples
///
/// ```
/// use outlook_core::Place;
///
/// let place = Place::new("Aspen", 39.19, -106.82)
///     .with_admin1("Colorado")
///     .with_country("United States");
/// assert_eq!(place.label(), "Aspen, Colorado, United States");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Upstream identifier, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<u64>,
    /// Place name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Country name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub country: Option<String>,
    /// ISO country code.
    #[cfg_attr(feature = "serde", serde(default))]
    pub country_code: Option<String>,
    /// First-level administrative area, e.g. a state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub admin1: Option<String>,
    /// Timezone name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub timezone: Option<String>,
}

impl Place {
    /// Construct a place with only a name and coordinates.
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            latitude,
            longitude,
            country: None,
            country_code: None,
            admin1: None,
            timezone: None,
        }
    }

    /// Set the first-level administrative area.
    #[must_use]
    pub fn with_admin1(mut self, admin1: impl Into<String>) -> Self {
        self.admin1 = Some(admin1.into());
        self
    }

    /// Set the country name.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Render a display label: name, then admin area and country when known.
    #[must_use]
    pub fn label(&self) -> String {
        std::iter::once(self.name.as_str())
            .chain(self.admin1.as_deref())
            .chain(self.country.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parameters for a place-name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeQuery {
    /// Free-text place name.
    pub name: String,
    /// Maximum number of candidates.
    pub count: u8,
    /// Preferred language for result names.
    pub language: Option<String>,
    /// ISO country code restricting the search.
    pub country_code: Option<String>,
}

impl GeocodeQuery {
    /// Build a query with the default result count.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: DEFAULT_GEOCODE_COUNT,
            language: None,
            country_code: None,
        }
    }

    /// Set the result count.
    #[must_use]
    pub fn with_count(mut self, count: u8) -> Self {
        self.count = count;
        self
    }

    /// Set the result language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Restrict results to a country.
    #[must_use]
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// Check the name and count.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::EmptyName`] for blank names and
    /// [`GeocodeError::InvalidCount`] when `count` is outside
    /// `1..=MAX_GEOCODE_COUNT`.
    pub fn validate(&self) -> Result<(), GeocodeError> {
        if self.name.trim().is_empty() {
            return Err(GeocodeError::EmptyName);
        }
        if !(1..=MAX_GEOCODE_COUNT).contains(&self.count) {
            return Err(GeocodeError::InvalidCount {
                count: self.count,
                max: MAX_GEOCODE_COUNT,
            });
        }
        Ok(())
    }
}

/// Search for places matching a name.
///
/// Implementations return candidates in the service's relevance order and an
/// empty vector when nothing matches.
pub trait Geocoder {
    /// Return places matching `query`.
    ///
    /// Implementations must return the error from [`GeocodeQuery::validate`]
    /// for invalid queries.
    fn search(&self, query: &GeocodeQuery) -> Result<Vec<Place>, GeocodeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn label_skips_missing_admin_area() {
        let place = Place::new("Lisbon", 38.72, -9.14).with_country("Portugal");
        assert_eq!(place.label(), "Lisbon, Portugal");
    }

    #[rstest]
    fn label_falls_back_to_name() {
        assert_eq!(Place::new("Nowhere", 0.0, 0.0).label(), "Nowhere");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn query_rejects_blank_names(#[case] name: &str) {
        assert_eq!(
            GeocodeQuery::new(name).validate(),
            Err(GeocodeError::EmptyName)
        );
    }

    #[rstest]
    #[case(0)]
    #[case(101)]
    fn query_rejects_invalid_count(#[case] count: u8) {
        let err = GeocodeQuery::new("Berlin")
            .with_count(count)
            .validate()
            .expect_err("invalid count");
        assert!(matches!(err, GeocodeError::InvalidCount { .. }));
    }

    #[rstest]
    fn place_decodes_with_optional_fields_missing() {
        let json = r#"{"name":"Aspen","latitude":39.19,"longitude":-106.82}"#;
        let place: Place = serde_json::from_str(json).expect("decode place");
        assert_eq!(place, Place::new("Aspen", 39.19, -106.82));
    }
}
