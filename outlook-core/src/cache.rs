//! Request-scoped forecast cache.
//!
//! A single inbound request may need the same forecast twice, e.g. to show
//! the raw daily block and the rankings derived from it. [`ForecastCache`]
//! remembers forecasts by exact coordinates so the upstream provider is hit
//! once per location. The cache is an ordinary owned value: create one per
//! request and drop it afterwards. It never expires entries.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::debug;

use crate::{Forecast, ForecastError, ForecastProvider, ForecastRequest};

/// Cache key built from the bit patterns of latitude and longitude.
///
/// Signed zeros share one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CoordinateKey {
    latitude: u64,
    longitude: u64,
}

impl From<&ForecastRequest> for CoordinateKey {
    fn from(request: &ForecastRequest) -> Self {
        Self {
            latitude: coordinate_bits(request.latitude),
            longitude: coordinate_bits(request.longitude),
        }
    }
}

fn coordinate_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Forecasts fetched during one request, keyed by coordinates.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use outlook_core::{
///     Forecast, ForecastCache, ForecastError, ForecastProvider, ForecastRequest,
///     ObservationSeries,
/// };
///
/// struct Counting(Cell<usize>);
///
/// impl ForecastProvider for Counting {
///     fn fetch_forecast(&self, request: &ForecastRequest) -> Result<Forecast, ForecastError> {
///         self.0.set(self.0.get() + 1);
///         Ok(Forecast {
///             latitude: request.latitude,
///             longitude: request.longitude,
///             timezone: None,
///             daily: ObservationSeries::default(),
///         })
///     }
/// }
///
/// let provider = Counting(Cell::new(0));
/// let mut cache = ForecastCache::new();
/// let request = ForecastRequest::new(46.0, 7.0);
/// cache.get_or_fetch(&provider, &request)?;
/// cache.get_or_fetch(&provider, &request)?;
/// assert_eq!(provider.0.get(), 1);
/// # Ok::<(), ForecastError>(())
/// ```
#[derive(Debug, Default)]
pub struct ForecastCache {
    entries: HashMap<CoordinateKey, Forecast>,
}

impl ForecastCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached forecast for `request`'s coordinates, fetching it
    /// from `provider` on a miss.
    ///
    /// Only the coordinates form the key; a later request for the same
    /// location with a different window reuses the first forecast.
    ///
    /// # Errors
    ///
    /// Propagates the provider's error on a miss. Failed fetches are not
    /// cached.
    pub fn get_or_fetch<P>(
        &mut self,
        provider: &P,
        request: &ForecastRequest,
    ) -> Result<&Forecast, ForecastError>
    where
        P: ForecastProvider + ?Sized,
    {
        match self.entries.entry(CoordinateKey::from(request)) {
            Entry::Occupied(entry) => {
                debug!(
                    "forecast cache hit for ({}, {})",
                    request.latitude, request.longitude
                );
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let forecast = provider.fetch_forecast(request)?;
                Ok(entry.insert(forecast))
            }
        }
    }

    /// Number of cached locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubForecastProvider;
    use rstest::{fixture, rstest};

    #[fixture]
    fn provider() -> StubForecastProvider {
        StubForecastProvider::with_empty_forecast()
    }

    #[rstest]
    fn repeated_coordinates_fetch_once(provider: StubForecastProvider) {
        let mut cache = ForecastCache::new();
        let request = ForecastRequest::new(39.19, -106.82);

        cache.get_or_fetch(&provider, &request).expect("first fetch");
        cache.get_or_fetch(&provider, &request).expect("cached fetch");

        assert_eq!(provider.calls(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[rstest]
    fn distinct_coordinates_fetch_separately(provider: StubForecastProvider) {
        let mut cache = ForecastCache::new();

        cache
            .get_or_fetch(&provider, &ForecastRequest::new(39.19, -106.82))
            .expect("first location");
        cache
            .get_or_fetch(&provider, &ForecastRequest::new(38.72, -9.14))
            .expect("second location");

        assert_eq!(provider.calls(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[rstest]
    #[case(0.0, -0.0)]
    #[case(-0.0, 0.0)]
    fn signed_zeros_share_an_entry(
        provider: StubForecastProvider,
        #[case] first: f64,
        #[case] second: f64,
    ) {
        let mut cache = ForecastCache::new();

        cache
            .get_or_fetch(&provider, &ForecastRequest::new(first, second))
            .expect("first fetch");
        cache
            .get_or_fetch(&provider, &ForecastRequest::new(second, first))
            .expect("cached fetch");

        assert_eq!(provider.calls(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[rstest]
    fn window_length_does_not_split_entries(provider: StubForecastProvider) {
        let mut cache = ForecastCache::new();
        let weekly = ForecastRequest::new(1.0, 2.0);
        let fortnight = weekly.clone().with_forecast_days(14);

        cache.get_or_fetch(&provider, &weekly).expect("weekly");
        cache.get_or_fetch(&provider, &fortnight).expect("fortnight");

        assert_eq!(provider.calls(), 1);
    }

    #[rstest]
    fn failures_are_not_cached() {
        let provider = StubForecastProvider::with_error(ForecastError::MissingDaily);
        let mut cache = ForecastCache::new();
        let request = ForecastRequest::new(1.0, 2.0);

        assert!(cache.get_or_fetch(&provider, &request).is_err());
        assert!(cache.get_or_fetch(&provider, &request).is_err());

        assert_eq!(provider.calls(), 2);
        assert!(cache.is_empty());
    }

    #[rstest]
    fn caches_are_independent(provider: StubForecastProvider) {
        let request = ForecastRequest::new(1.0, 2.0);
        let mut first = ForecastCache::new();
        let mut second = ForecastCache::new();

        first.get_or_fetch(&provider, &request).expect("first cache");
        second.get_or_fetch(&provider, &request).expect("second cache");

        assert_eq!(provider.calls(), 2);
    }
}
