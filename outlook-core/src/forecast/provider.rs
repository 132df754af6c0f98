//! Forecast provider trait with its request and response types.

use crate::ObservationSeries;

use super::error::ForecastError;

/// Default forecast window in days.
pub const DEFAULT_FORECAST_DAYS: u8 = 7;
/// Longest forecast window the upstream service offers.
pub const MAX_FORECAST_DAYS: u8 = 16;
/// Timezone used to align daily buckets; `auto` resolves from coordinates.
pub const DEFAULT_TIMEZONE: &str = "auto";

/// Parameters for a daily forecast request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastRequest {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Number of days to forecast.
    pub forecast_days: u8,
    /// Timezone name used to bucket days.
    pub timezone: String,
}

impl ForecastRequest {
    /// Build a request for the default seven-day window.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            forecast_days: DEFAULT_FORECAST_DAYS,
            timezone: DEFAULT_TIMEZONE.to_owned(),
        }
    }

    /// Set the forecast window.
    #[must_use]
    pub fn with_forecast_days(mut self, forecast_days: u8) -> Self {
        self.forecast_days = forecast_days;
        self
    }

    /// Set the timezone.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Check coordinates and window length.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidCoordinates`] for non-finite or
    /// out-of-range coordinates and [`ForecastError::InvalidForecastDays`]
    /// when the window is outside `1..=MAX_FORECAST_DAYS`.
    pub fn validate(&self) -> Result<(), ForecastError> {
        let latitude_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let longitude_ok =
            self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if !(latitude_ok && longitude_ok) {
            return Err(ForecastError::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        if !(1..=MAX_FORECAST_DAYS).contains(&self.forecast_days) {
            return Err(ForecastError::InvalidForecastDays {
                days: self.forecast_days,
                max: MAX_FORECAST_DAYS,
            });
        }
        Ok(())
    }
}

/// Daily forecast for one location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forecast {
    /// Latitude of the grid cell the service resolved.
    pub latitude: f64,
    /// Longitude of the grid cell the service resolved.
    pub longitude: f64,
    /// Timezone the daily buckets are aligned to.
    pub timezone: Option<String>,
    /// Daily observations.
    pub daily: ObservationSeries,
}

/// Fetch a daily forecast for a location.
///
/// Implementers return a [`Forecast`] whose `daily` block covers the
/// requested window. The returned series is not required to be valid; the
/// scorer checks its length invariant.
///
/// # Examples
///
/// ```rust
/// use outlook_core::{
///     Forecast, ForecastError, ForecastProvider, ForecastRequest, ObservationSeries,
/// };
///
/// struct EmptyProvider;
///
/// impl ForecastProvider for EmptyProvider {
///     fn fetch_forecast(&self, request: &ForecastRequest) -> Result<Forecast, ForecastError> {
///         request.validate()?;
///         Ok(Forecast {
///             latitude: request.latitude,
///             longitude: request.longitude,
///             timezone: None,
///             daily: ObservationSeries::default(),
///         })
///     }
/// }
///
/// let forecast = EmptyProvider.fetch_forecast(&ForecastRequest::new(46.0, 7.0))?;
/// assert!(forecast.daily.is_empty());
/// # Ok::<(), ForecastError>(())
/// ```
pub trait ForecastProvider {
    /// Return the daily forecast for `request`.
    ///
    /// Implementations must return the error from
    /// [`ForecastRequest::validate`] for invalid requests.
    fn fetch_forecast(&self, request: &ForecastRequest) -> Result<Forecast, ForecastError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_uses_default_window() {
        let request = ForecastRequest::new(39.19, -106.82);
        assert_eq!(request.forecast_days, DEFAULT_FORECAST_DAYS);
        assert_eq!(request.timezone, DEFAULT_TIMEZONE);
        assert!(request.validate().is_ok());
    }

    #[rstest]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(0.0, 0.0)]
    fn accepts_boundary_coordinates(#[case] latitude: f64, #[case] longitude: f64) {
        assert!(ForecastRequest::new(latitude, longitude).validate().is_ok());
    }

    #[rstest]
    #[case(90.5, 0.0)]
    #[case(0.0, -180.5)]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    fn rejects_invalid_coordinates(#[case] latitude: f64, #[case] longitude: f64) {
        let err = ForecastRequest::new(latitude, longitude)
            .validate()
            .expect_err("invalid coordinates");
        assert!(matches!(err, ForecastError::InvalidCoordinates { .. }));
    }

    #[rstest]
    #[case(0)]
    #[case(17)]
    fn rejects_invalid_window(#[case] days: u8) {
        let err = ForecastRequest::new(0.0, 0.0)
            .with_forecast_days(days)
            .validate()
            .expect_err("invalid window");
        assert_eq!(
            err,
            ForecastError::InvalidForecastDays {
                days,
                max: MAX_FORECAST_DAYS,
            }
        );
    }
}
