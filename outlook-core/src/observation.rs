//! Daily observation series consumed by the activity scorer.
//!
//! The series mirrors the `daily` block of the upstream forecast payload:
//! parallel arrays indexed by day, with `time` defining the index space.
//! Every numeric array must have exactly as many entries as `time`.

use thiserror::Error;

use crate::WeatherCode;

/// Parallel-array weather dataset covering `time.len()` days.
///
/// # Examples
///
/// ```
/// use outlook_core::ObservationSeries;
///
/// # fn main() -> Result<(), outlook_core::ObservationSeriesError> {
/// let series = ObservationSeries::new(
///     vec!["2025-06-05".into()],
///     vec![22.0],
///     vec![12.0],
///     vec![0.0],
///     vec![12.0],
///     vec![0],
/// )?;
/// assert_eq!(series.len(), 1);
/// let day = series.days()?.next().unwrap();
/// assert_eq!(day.date, "2025-06-05");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservationSeries {
    /// ISO date labels in chronological order.
    pub time: Vec<String>,
    /// Daily maximum temperature in °C.
    pub temperature_2m_max: Vec<f64>,
    /// Daily minimum temperature in °C.
    pub temperature_2m_min: Vec<f64>,
    /// Daily precipitation total in mm.
    pub precipitation_sum: Vec<f64>,
    /// Daily maximum wind speed at 10 m in km/h.
    pub wind_speed_10m_max: Vec<f64>,
    /// Daily WMO weather code.
    pub weather_code: Vec<WeatherCode>,
}

/// Errors returned when an [`ObservationSeries`] breaks its length invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ObservationSeriesError {
    /// A numeric array does not line up with `time`.
    #[error("invalid observation series: {field} has {actual} entries but time has {expected}")]
    LengthMismatch {
        /// Name of the offending array.
        field: &'static str,
        /// Number of entries in `time`.
        expected: usize,
        /// Number of entries in the offending array.
        actual: usize,
    },
}

impl ObservationSeries {
    /// Validates and constructs an [`ObservationSeries`].
    ///
    /// # Errors
    ///
    /// Returns [`ObservationSeriesError::LengthMismatch`] when any array
    /// differs in length from `time`.
    pub fn new(
        time: Vec<String>,
        temperature_2m_max: Vec<f64>,
        temperature_2m_min: Vec<f64>,
        precipitation_sum: Vec<f64>,
        wind_speed_10m_max: Vec<f64>,
        weather_code: Vec<i32>,
    ) -> Result<Self, ObservationSeriesError> {
        let series = Self {
            time,
            temperature_2m_max,
            temperature_2m_min,
            precipitation_sum,
            wind_speed_10m_max,
            weather_code: weather_code.into_iter().map(WeatherCode::new).collect(),
        };
        series.validate()?;
        Ok(series)
    }

    /// Number of days covered by the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Report whether the series covers no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Check that every array has the same length as `time`.
    ///
    /// Fields are checked in declaration order and the first mismatch wins.
    ///
    /// # Errors
    ///
    /// Returns [`ObservationSeriesError::LengthMismatch`] naming the first
    /// array whose length differs from `time`.
    pub fn validate(&self) -> Result<(), ObservationSeriesError> {
        let expected = self.time.len();
        let lengths = [
            ("temperature_2m_max", self.temperature_2m_max.len()),
            ("temperature_2m_min", self.temperature_2m_min.len()),
            ("precipitation_sum", self.precipitation_sum.len()),
            ("wind_speed_10m_max", self.wind_speed_10m_max.len()),
            ("weather_code", self.weather_code.len()),
        ];
        match lengths.into_iter().find(|(_, actual)| *actual != expected) {
            Some((field, actual)) => Err(ObservationSeriesError::LengthMismatch {
                field,
                expected,
                actual,
            }),
            None => Ok(()),
        }
    }

    /// Iterate the series one day at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ObservationSeriesError::LengthMismatch`] when the series is
    /// malformed; no partial iteration is offered.
    pub fn days(&self) -> Result<Days<'_>, ObservationSeriesError> {
        self.validate()?;
        Ok(Days {
            series: self,
            index: 0,
        })
    }
}

/// The four weather inputs that drive a single-day suitability score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayConditions {
    /// Maximum temperature in °C.
    pub temperature_max: f64,
    /// Precipitation total in mm.
    pub precipitation: f64,
    /// Maximum wind speed in km/h.
    pub wind_speed: f64,
    /// WMO weather code.
    pub weather_code: WeatherCode,
}

impl DayConditions {
    /// Bundle raw inputs.
    #[must_use]
    pub const fn new(
        temperature_max: f64,
        precipitation: f64,
        wind_speed: f64,
        weather_code: WeatherCode,
    ) -> Self {
        Self {
            temperature_max,
            precipitation,
            wind_speed,
            weather_code,
        }
    }
}

/// One day of an [`ObservationSeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyObservation<'a> {
    /// ISO date label.
    pub date: &'a str,
    /// Maximum temperature in °C.
    pub temperature_max: f64,
    /// Minimum temperature in °C.
    pub temperature_min: f64,
    /// Precipitation total in mm.
    pub precipitation: f64,
    /// Maximum wind speed in km/h.
    pub wind_speed: f64,
    /// WMO weather code.
    pub weather_code: WeatherCode,
}

impl DailyObservation<'_> {
    /// Extract the inputs used for scoring.
    #[must_use]
    pub const fn conditions(&self) -> DayConditions {
        DayConditions::new(
            self.temperature_max,
            self.precipitation,
            self.wind_speed,
            self.weather_code,
        )
    }
}

/// Iterator over the days of a validated [`ObservationSeries`].
#[derive(Debug, Clone)]
pub struct Days<'a> {
    series: &'a ObservationSeries,
    index: usize,
}

impl<'a> Iterator for Days<'a> {
    type Item = DailyObservation<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let series = self.series;
        let i = self.index;
        let day = DailyObservation {
            date: series.time.get(i)?.as_str(),
            temperature_max: *series.temperature_2m_max.get(i)?,
            temperature_min: *series.temperature_2m_min.get(i)?,
            precipitation: *series.precipitation_sum.get(i)?,
            wind_speed: *series.wind_speed_10m_max.get(i)?,
            weather_code: *series.weather_code.get(i)?,
        };
        self.index += 1;
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.series.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days<'_> {}
