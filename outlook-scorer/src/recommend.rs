//! Fetch a forecast for a location and rank activities against it.

use log::{info, warn};
use outlook_core::{
    ActivityRanking, Forecast, ForecastCache, ForecastProvider, ForecastRequest, Place,
};
use serde::{Deserialize, Serialize};

use crate::{RecommendError, rank};

/// Rankings for a location together with the forecast they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Human-readable location label.
    pub location: String,
    /// Requested latitude.
    pub latitude: f64,
    /// Requested longitude.
    pub longitude: f64,
    /// Forecast used for scoring.
    pub forecast: Forecast,
    /// One ranking per built-in activity, in enumeration order.
    pub activity_rankings: Vec<ActivityRanking>,
}

/// Rank activities for a geocoded place.
///
/// Requests `forecast_days` days with the automatic timezone and labels the
/// result with [`Place::label`].
///
/// # Errors
///
/// Returns [`RecommendError::Forecast`] when the provider fails and
/// [`RecommendError::InvalidSeries`] when the forecast's daily block is
/// malformed.
pub fn recommend<P>(
    provider: &P,
    cache: &mut ForecastCache,
    place: &Place,
    forecast_days: u8,
) -> Result<Recommendation, RecommendError>
where
    P: ForecastProvider + ?Sized,
{
    let request =
        ForecastRequest::new(place.latitude, place.longitude).with_forecast_days(forecast_days);
    recommend_for_coordinates(provider, cache, &request, place.label())
}

/// Rank activities for explicit coordinates.
///
/// The forecast is fetched through `cache`, so repeated calls for the same
/// coordinates within one cache hit the provider once.
///
/// # Errors
///
/// Returns [`RecommendError::Forecast`] when the provider fails and
/// [`RecommendError::InvalidSeries`] when the forecast's daily block is
/// malformed.
pub fn recommend_for_coordinates<P>(
    provider: &P,
    cache: &mut ForecastCache,
    request: &ForecastRequest,
    label: impl Into<String>,
) -> Result<Recommendation, RecommendError>
where
    P: ForecastProvider + ?Sized,
{
    let location = label.into();
    let forecast = cache.get_or_fetch(provider, request).map_err(|err| {
        warn!("forecast for {location} unavailable: {err}");
        RecommendError::from(err)
    })?;
    let activity_rankings = rank(&forecast.daily)?;
    info!(
        "ranked {} activities over {} days for {location}",
        activity_rankings.len(),
        forecast.daily.len()
    );
    Ok(Recommendation {
        location,
        latitude: request.latitude,
        longitude: request.longitude,
        forecast: forecast.clone(),
        activity_rankings,
    })
}
