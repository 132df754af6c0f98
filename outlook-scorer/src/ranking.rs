//! Series-wide ranking of every built-in activity.

use outlook_core::{
    Activity, ActivityRanking, DayConditions, ObservationSeries, ObservationSeriesError,
    SuitabilityScorer,
};

use crate::{RuleTableScorer, reasoning};

/// Rank every built-in activity over `series` with the built-in rules.
///
/// Rankings follow [`Activity::ALL`] order. An empty series yields four
/// rankings with no daily scores, an average of `0.0` and poor-tier
/// reasoning.
///
/// # Errors
///
/// Returns [`ObservationSeriesError`] when the series' arrays differ in
/// length.
pub fn rank(series: &ObservationSeries) -> Result<Vec<ActivityRanking>, ObservationSeriesError> {
    rank_with(&RuleTableScorer, series)
}

/// Rank every built-in activity over `series` using `scorer`.
///
/// # Errors
///
/// Returns [`ObservationSeriesError`] when the series' arrays differ in
/// length.
pub fn rank_with<S>(
    scorer: &S,
    series: &ObservationSeries,
) -> Result<Vec<ActivityRanking>, ObservationSeriesError>
where
    S: SuitabilityScorer + ?Sized,
{
    let days: Vec<DayConditions> = series.days()?.map(|day| day.conditions()).collect();
    Ok(Activity::ALL
        .into_iter()
        .map(|activity| rank_activity(scorer, activity, &days))
        .collect())
}

fn rank_activity<S>(scorer: &S, activity: Activity, days: &[DayConditions]) -> ActivityRanking
where
    S: SuitabilityScorer + ?Sized,
{
    let daily_scores: Vec<u8> = days.iter().map(|day| scorer.score(activity, day)).collect();
    let average_score = average(&daily_scores);
    ActivityRanking {
        activity,
        daily_scores,
        average_score,
        reasoning: reasoning(activity, average_score).to_owned(),
    }
}

/// Unweighted mean of `scores`; `0.0` when empty.
///
/// # Examples
///
/// ```
/// use outlook_scorer::average;
///
/// assert!((average(&[90, 60, 30]) - 60.0).abs() < f64::EPSILON);
/// assert!(average(&[]).abs() < f64::EPSILON);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "averaging scores is inherently floating point"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "score totals and day counts are far below 2^52"
)]
pub fn average(scores: &[u8]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let total: u64 = scores.iter().copied().map(u64::from).sum();
    total as f64 / scores.len() as f64
}

/// Order rankings by average score, best first.
///
/// The sort is stable, so equal averages keep their relative order.
///
/// # Examples
///
/// ```
/// use outlook_core::{Activity, ObservationSeries};
/// use outlook_scorer::{leaderboard, rank};
///
/// # fn main() -> Result<(), outlook_core::ObservationSeriesError> {
/// let series = ObservationSeries::new(
///     vec!["2025-06-05".into()],
///     vec![22.0],
///     vec![14.0],
///     vec![0.0],
///     vec![15.0],
///     vec![1],
/// )?;
/// let board = leaderboard(rank(&series)?);
/// assert_eq!(board[0].activity, Activity::Surfing);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn leaderboard(mut rankings: Vec<ActivityRanking>) -> Vec<ActivityRanking> {
    rankings.sort_by(|left, right| right.average_score.total_cmp(&left.average_score));
    rankings
}
