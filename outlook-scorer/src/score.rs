//! Per-day scoring backed by the built-in rule tables.

use log::debug;
use outlook_core::{Activity, DayConditions, MIN_SCORE, SuitabilityScorer, WeatherCode};

use crate::rules::rule_table;

/// [`SuitabilityScorer`] that evaluates the built-in [`rules`](crate::rules)
/// tables.
///
/// # Examples
///
/// ```
/// use outlook_core::{Activity, DayConditions, SuitabilityScorer, WeatherCode};
/// use outlook_scorer::RuleTableScorer;
///
/// let calm_clear = DayConditions::new(22.0, 0.0, 15.0, WeatherCode::new(1));
/// assert_eq!(RuleTableScorer.score(Activity::Surfing, &calm_clear), 100);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RuleTableScorer;

impl SuitabilityScorer for RuleTableScorer {
    fn score(&self, activity: Activity, day: &DayConditions) -> u8 {
        Self::sanitise(rule_table(activity).points(day))
    }
}

/// Score one day for a known activity.
#[must_use]
pub fn score_activity(activity: Activity, day: &DayConditions) -> u8 {
    RuleTableScorer.score(activity, day)
}

/// Score one day for an activity given by identifier.
///
/// Unrecognised identifiers score [`MIN_SCORE`] rather than failing.
///
/// # Examples
///
/// ```
/// use outlook_scorer::score;
///
/// assert!(score("skiing", -2.0, 5.0, 15.0, 75) > score("skiing", 20.0, 0.0, 10.0, 1));
/// assert_eq!(score("kayaking", 22.0, 0.0, 10.0, 1), 0);
/// ```
#[must_use]
pub fn score(
    activity: &str,
    temperature_max: f64,
    precipitation: f64,
    wind_speed: f64,
    weather_code: i32,
) -> u8 {
    let day = DayConditions::new(
        temperature_max,
        precipitation,
        wind_speed,
        WeatherCode::new(weather_code),
    );
    match activity.parse::<Activity>() {
        Ok(known) => score_activity(known, &day),
        Err(err) => {
            debug!("{err}; scoring {MIN_SCORE}");
            MIN_SCORE
        }
    }
}
