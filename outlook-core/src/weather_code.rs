//! WMO weather codes and the coarse classes the scorer cares about.
//!
//! The forecast provider reports conditions as integer WMO codes. Scoring
//! only distinguishes clear, rainy and snowy days; every other code (fog,
//! showers, thunderstorms) is [`WeatherClass::Unclassified`] and contributes
//! through temperature, precipitation and wind alone.
//!
//! # Examples
//! ```
//! use outlook_core::{WeatherClass, WeatherCode};
//!
//! assert_eq!(WeatherCode::new(2).class(), WeatherClass::Clear);
//! assert_eq!(WeatherCode::new(63).class(), WeatherClass::Rainy);
//! assert_eq!(WeatherCode::new(95).class(), WeatherClass::Unclassified);
//! ```

use std::fmt;

/// Integer condition code from the WMO taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeatherCode(i32);

/// Coarse weather classes derived from a [`WeatherCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherClass {
    /// Clear sky to overcast (`code <= 3`).
    Clear,
    /// Drizzle, rain and freezing rain (`51..=67`).
    Rainy,
    /// Snow fall and snow grains (`71..=77`).
    Snowy,
    /// Anything else, e.g. fog, showers or thunderstorms.
    Unclassified,
}

impl WeatherCode {
    /// Upper bound of the clear band.
    pub const CLEAR_MAX: i32 = 3;
    /// Inclusive rain band.
    pub const RAIN: std::ops::RangeInclusive<i32> = 51..=67;
    /// Inclusive snow band.
    pub const SNOW: std::ops::RangeInclusive<i32> = 71..=77;

    /// Wrap a raw code.
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Return the raw integer code.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Classify the code.
    #[must_use]
    pub fn class(self) -> WeatherClass {
        if self.0 <= Self::CLEAR_MAX {
            WeatherClass::Clear
        } else if Self::RAIN.contains(&self.0) {
            WeatherClass::Rainy
        } else if Self::SNOW.contains(&self.0) {
            WeatherClass::Snowy
        } else {
            WeatherClass::Unclassified
        }
    }

    /// `true` for clear or partly cloudy codes.
    #[must_use]
    pub fn is_clear(self) -> bool {
        self.class() == WeatherClass::Clear
    }

    /// `true` for rain codes.
    #[must_use]
    pub fn is_rainy(self) -> bool {
        self.class() == WeatherClass::Rainy
    }

    /// `true` for snow codes.
    #[must_use]
    pub fn is_snowy(self) -> bool {
        self.class() == WeatherClass::Snowy
    }
}

impl From<i32> for WeatherCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
