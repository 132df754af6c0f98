//! Score how well a day's weather suits an activity.
//!
//! The `SuitabilityScorer` trait assigns a score to a single day's
//! [`DayConditions`](crate::DayConditions) for a given
//! [`Activity`](crate::Activity).

use crate::{Activity, DayConditions};

/// Lowest possible suitability score.
pub const MIN_SCORE: u8 = 0;
/// Highest possible suitability score.
pub const MAX_SCORE: u8 = 100;

/// Calculate a suitability score for one day and one activity.
///
/// Higher scores indicate weather better suited to the activity.
/// Implementations must be thread-safe (`Send` + `Sync`) so scorers can run
/// across threads. The method is infallible and must be deterministic.
///
/// Implementations must return values in `MIN_SCORE..=MAX_SCORE`; use
/// [`SuitabilityScorer::sanitise`] to clamp raw point totals.
///
/// # Examples
///
/// ```rust
/// use outlook_core::{Activity, DayConditions, SuitabilityScorer, WeatherCode};
///
/// struct FlatScorer;
///
/// impl SuitabilityScorer for FlatScorer {
///     fn score(&self, _activity: Activity, _day: &DayConditions) -> u8 {
///         Self::sanitise(150)
///     }
/// }
///
/// let day = DayConditions::new(20.0, 0.0, 10.0, WeatherCode::new(0));
/// assert_eq!(FlatScorer.score(Activity::Surfing, &day), 100);
/// ```
pub trait SuitabilityScorer: Send + Sync {
    /// Return a score for `activity` on a day with conditions `day`.
    fn score(&self, activity: Activity, day: &DayConditions) -> u8;

    /// Clamp a raw point total into `MIN_SCORE..=MAX_SCORE`.
    fn sanitise(points: i32) -> u8
    where
        Self: Sized,
    {
        let clamped = points.clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE));
        u8::try_from(clamped).unwrap_or(MIN_SCORE)
    }
}
