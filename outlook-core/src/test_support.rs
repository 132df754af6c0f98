//! Test-only providers and fixtures used by unit and behaviour tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    Forecast, ForecastError, ForecastProvider, ForecastRequest, GeocodeError, GeocodeQuery,
    Geocoder, ObservationSeries, Place,
};

/// Seven days of early-summer mountain weather.
///
/// Mixes clear, rainy and shower days so every scoring branch sees use.
#[must_use]
pub fn sample_week() -> ObservationSeries {
    ObservationSeries {
        time: [
            "2025-06-05",
            "2025-06-06",
            "2025-06-07",
            "2025-06-08",
            "2025-06-09",
            "2025-06-10",
            "2025-06-11",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect(),
        temperature_2m_max: vec![22.0, 24.0, 25.0, 21.0, 19.0, 20.0, 23.0],
        temperature_2m_min: vec![12.0, 14.0, 15.0, 13.0, 11.0, 12.0, 13.0],
        precipitation_sum: vec![0.0, 0.2, 0.0, 5.0, 10.0, 2.0, 0.0],
        wind_speed_10m_max: vec![10.0, 12.0, 8.0, 15.0, 20.0, 18.0, 10.0],
        weather_code: [0, 1, 0, 61, 63, 80, 1].into_iter().map(Into::into).collect(),
    }
}

#[derive(Debug, Clone)]
enum StubResponse {
    Series(ObservationSeries),
    Error(ForecastError),
}

/// Deterministic `ForecastProvider` that counts its calls.
///
/// Successful responses echo the requested coordinates.
#[derive(Debug)]
pub struct StubForecastProvider {
    response: StubResponse,
    calls: AtomicUsize,
}

impl StubForecastProvider {
    /// Create a provider answering every valid request with `series`.
    #[must_use]
    pub const fn with_series(series: ObservationSeries) -> Self {
        Self {
            response: StubResponse::Series(series),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a provider answering with an empty series.
    #[must_use]
    pub fn with_empty_forecast() -> Self {
        Self::with_series(ObservationSeries::default())
    }

    /// Create a provider failing every valid request with `error`.
    ///
    /// Invalid requests still return the validation error.
    #[must_use]
    pub const fn with_error(error: ForecastError) -> Self {
        Self {
            response: StubResponse::Error(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `fetch_forecast` calls received so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ForecastProvider for StubForecastProvider {
    fn fetch_forecast(&self, request: &ForecastRequest) -> Result<Forecast, ForecastError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        request.validate()?;
        match &self.response {
            StubResponse::Series(series) => Ok(Forecast {
                latitude: request.latitude,
                longitude: request.longitude,
                timezone: Some(request.timezone.clone()),
                daily: series.clone(),
            }),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}

/// Deterministic `Geocoder` returning pre-configured places.
#[derive(Debug, Clone)]
pub struct StubGeocoder {
    response: Result<Vec<Place>, GeocodeError>,
}

impl StubGeocoder {
    /// Create a geocoder returning `places`, truncated to the query count.
    #[must_use]
    pub const fn with_places(places: Vec<Place>) -> Self {
        Self {
            response: Ok(places),
        }
    }

    /// Create a geocoder failing every valid query with `error`.
    #[must_use]
    pub const fn with_error(error: GeocodeError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl Geocoder for StubGeocoder {
    fn search(&self, query: &GeocodeQuery) -> Result<Vec<Place>, GeocodeError> {
        query.validate()?;
        self.response.clone().map(|places| {
            places
                .into_iter()
                .take(usize::from(query.count))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sample_week_is_valid() {
        let series = sample_week();
        assert_eq!(series.len(), 7);
        assert!(series.validate().is_ok());
    }

    #[rstest]
    fn stub_provider_validates_before_answering() {
        let provider = StubForecastProvider::with_empty_forecast();
        let err = provider
            .fetch_forecast(&ForecastRequest::new(120.0, 0.0))
            .expect_err("latitude out of range");
        assert!(matches!(err, ForecastError::InvalidCoordinates { .. }));
        assert_eq!(provider.calls(), 1);
    }

    #[rstest]
    fn stub_geocoder_truncates_to_count() {
        let geocoder = StubGeocoder::with_places(vec![
            Place::new("Paris", 48.85, 2.35),
            Place::new("Paris", 33.66, -95.55),
        ]);
        let places = geocoder
            .search(&GeocodeQuery::new("Paris").with_count(1))
            .expect("search");
        assert_eq!(places.len(), 1);
    }
}
