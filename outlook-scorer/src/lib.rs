//! Activity suitability scoring for Outlook forecasts.
//!
//! The crate turns an [`ObservationSeries`](outlook_core::ObservationSeries)
//! into one [`ActivityRanking`](outlook_core::ActivityRanking) per built-in
//! activity:
//! - **Per-day scoring** sums the points of four independent factors
//!   (temperature, precipitation, wind, weather class) looked up in
//!   declarative [`rules`] tables, then clamps the total to `0..=100`.
//! - **Series ranking** scores every day for every activity, averages the
//!   daily scores and attaches a sentence from a fixed reasoning table keyed
//!   by [`ScoreTier`].
//! - **Recommendation** fetches a forecast through a request-scoped
//!   [`ForecastCache`](outlook_core::ForecastCache) and ranks it for a place.
//!
//! Everything except [`recommend`] is pure and can be called concurrently
//! without synchronisation.
//!
//! # Examples
//!
//! ```
//! use outlook_core::{Activity, ObservationSeries};
//! use outlook_scorer::rank;
//!
//! # fn main() -> Result<(), outlook_core::ObservationSeriesError> {
//! let series = ObservationSeries::new(
//!     vec!["2025-01-10".into()],
//!     vec![-4.0],
//!     vec![-12.0],
//!     vec![8.0],
//!     vec![12.0],
//!     vec![73],
//! )?;
//! let rankings = rank(&series)?;
//! assert_eq!(rankings.len(), 4);
//! assert_eq!(rankings[0].activity, Activity::Skiing);
//! assert_eq!(rankings[0].daily_scores, vec![90]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;
mod ranking;
mod reasoning;
mod recommend;
pub mod rules;
mod score;

pub use error::RecommendError;
pub use ranking::{average, leaderboard, rank, rank_with};
pub use reasoning::{ReasoningTable, ScoreTier, reasoning, reasoning_for, reasoning_table};
pub use recommend::{Recommendation, recommend, recommend_for_coordinates};
pub use score::{RuleTableScorer, score, score_activity};
