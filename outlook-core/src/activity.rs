//! Activities the engine can recommend and the rankings it emits.
//!
//! The enum offers compile-time safety for rule-table and reasoning lookups:
//! adding a variant without a rule table fails to compile.
//!
//! # Examples
//! ```
//! use outlook_core::Activity;
//!
//! assert_eq!(Activity::OutdoorSightseeing.as_str(), "outdoor sightseeing");
//! assert_eq!("skiing".parse::<Activity>(), Ok(Activity::Skiing));
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A recommendable activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activity {
    /// Downhill or cross-country skiing.
    #[cfg_attr(feature = "serde", serde(rename = "skiing"))]
    Skiing,
    /// Surfing.
    #[cfg_attr(feature = "serde", serde(rename = "surfing"))]
    Surfing,
    /// Walking tours, viewpoints and other open-air sightseeing.
    #[cfg_attr(feature = "serde", serde(rename = "outdoor sightseeing"))]
    OutdoorSightseeing,
    /// Museums, galleries and other indoor attractions.
    #[cfg_attr(feature = "serde", serde(rename = "indoor sightseeing"))]
    IndoorSightseeing,
}

/// Error returned when parsing an unknown activity identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown activity '{0}'")]
pub struct ParseActivityError(pub String);

impl Activity {
    /// Every built-in activity in ranking order.
    pub const ALL: [Self; 4] = [
        Self::Skiing,
        Self::Surfing,
        Self::OutdoorSightseeing,
        Self::IndoorSightseeing,
    ];

    /// Return the activity identifier.
    ///
    /// # Examples
    /// ```
    /// use outlook_core::Activity;
    ///
    /// assert_eq!(Activity::IndoorSightseeing.as_str(), "indoor sightseeing");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skiing => "skiing",
            Self::Surfing => "surfing",
            Self::OutdoorSightseeing => "outdoor sightseeing",
            Self::IndoorSightseeing => "indoor sightseeing",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = ParseActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|activity| activity.as_str() == s)
            .ok_or_else(|| ParseActivityError(s.to_owned()))
    }
}

/// Suitability of one activity across an observation series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActivityRanking {
    /// Activity being ranked.
    pub activity: Activity,
    /// One score in `0..=100` per day of the series.
    pub daily_scores: Vec<u8>,
    /// Unweighted mean of `daily_scores`; `0.0` for an empty series.
    pub average_score: f64,
    /// Sentence describing the average score.
    pub reasoning: String,
}
