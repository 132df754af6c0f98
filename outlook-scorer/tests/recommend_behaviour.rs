//! Behavioural tests for [`recommend`].
//!
//! These tests use [`StubForecastProvider`] so no forecast service is needed.

use std::cell::RefCell;

use outlook_core::test_support::{StubForecastProvider, sample_week};
use outlook_core::{Activity, ForecastCache, ForecastError, ObservationSeriesError, Place};
use outlook_scorer::{RecommendError, Recommendation, leaderboard, recommend};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Outcomes of every recommendation request in a scenario.
type Outcomes = RefCell<Vec<Result<Recommendation, RecommendError>>>;

#[fixture]
fn provider() -> RefCell<Option<StubForecastProvider>> {
    RefCell::new(None)
}

#[fixture]
fn cache() -> RefCell<ForecastCache> {
    RefCell::new(ForecastCache::new())
}

#[fixture]
fn outcomes() -> Outcomes {
    RefCell::new(Vec::new())
}

fn aspen() -> Place {
    Place::new("Aspen", 39.19, -106.82)
        .with_admin1("Colorado")
        .with_country("United States")
}

fn only_outcome(outcomes: &Outcomes) -> Result<Recommendation, RecommendError> {
    let binding = outcomes.borrow();
    match binding.as_slice() {
        [single] => single.clone(),
        other => panic!("expected one recommendation, got {}", other.len()),
    }
}

// --- Given steps ---

#[given("a forecast service returning a sample week")]
fn service_ok(#[from(provider)] provider: &RefCell<Option<StubForecastProvider>>) {
    *provider.borrow_mut() = Some(StubForecastProvider::with_series(sample_week()));
}

#[given("a forecast service that times out")]
fn service_timeout(#[from(provider)] provider: &RefCell<Option<StubForecastProvider>>) {
    *provider.borrow_mut() = Some(StubForecastProvider::with_error(ForecastError::Timeout {
        url: "http://example.com/v1/forecast".to_owned(),
        timeout_secs: 30,
    }));
}

#[given("a forecast service returning mismatched arrays")]
fn service_malformed(#[from(provider)] provider: &RefCell<Option<StubForecastProvider>>) {
    let mut series = sample_week();
    series.weather_code.clear();
    *provider.borrow_mut() = Some(StubForecastProvider::with_series(series));
}

// --- When steps ---

#[when("I request a recommendation for Aspen")]
fn request_recommendation(
    #[from(provider)] provider: &RefCell<Option<StubForecastProvider>>,
    #[from(cache)] cache: &RefCell<ForecastCache>,
    #[from(outcomes)] outcomes: &Outcomes,
) {
    let binding = provider.borrow();
    let service = binding
        .as_ref()
        .unwrap_or_else(|| panic!("provider must be initialised"));
    let result = recommend(service, &mut cache.borrow_mut(), &aspen(), 7);
    outcomes.borrow_mut().push(result);
}

// --- Then steps ---

#[then("the recommendation is labelled with the full place name")]
fn labelled(#[from(outcomes)] outcomes: &Outcomes) {
    let recommendation =
        only_outcome(outcomes).unwrap_or_else(|err| panic!("recommendation failed: {err}"));
    assert_eq!(recommendation.location, "Aspen, Colorado, United States");
    assert_eq!(recommendation.forecast.daily.len(), 7);
    assert_eq!(recommendation.activity_rankings.len(), 4);
}

#[then("surfing tops the leaderboard")]
fn surfing_leads(#[from(outcomes)] outcomes: &Outcomes) {
    let recommendation =
        only_outcome(outcomes).unwrap_or_else(|err| panic!("recommendation failed: {err}"));
    let board = leaderboard(recommendation.activity_rankings);
    assert_eq!(board.first().map(|ranking| ranking.activity), Some(Activity::Surfing));
}

#[then("the forecast service was called once")]
fn called_once(
    #[from(provider)] provider: &RefCell<Option<StubForecastProvider>>,
    #[from(outcomes)] outcomes: &Outcomes,
) {
    let calls = provider.borrow().as_ref().map(StubForecastProvider::calls);
    assert_eq!(calls, Some(1));
    let results = outcomes.borrow();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(Result::is_ok));
}

#[then("the recommendation fails because the forecast timed out")]
fn fails_with_timeout(#[from(outcomes)] outcomes: &Outcomes) {
    match only_outcome(outcomes) {
        Err(RecommendError::Forecast(ForecastError::Timeout { timeout_secs, .. })) => {
            assert_eq!(timeout_secs, 30);
        }
        other => panic!("expected a forecast timeout, got {other:?}"),
    }
}

#[then("the recommendation fails because the series is malformed")]
fn fails_with_invalid_series(#[from(outcomes)] outcomes: &Outcomes) {
    match only_outcome(outcomes) {
        Err(RecommendError::InvalidSeries(ObservationSeriesError::LengthMismatch {
            field, ..
        })) => assert_eq!(field, "weather_code"),
        other => panic!("expected an invalid series, got {other:?}"),
    }
}

macro_rules! register_scenario {
    ($name:ident, $title:literal) => {
        #[scenario(path = "tests/features/recommend.feature", name = $title)]
        fn $name(
            provider: RefCell<Option<StubForecastProvider>>,
            cache: RefCell<ForecastCache>,
            outcomes: Outcomes,
        ) {
            let _ = (provider, cache, outcomes);
        }
    };
}

register_scenario!(
    recommending_for_geocoded_place,
    "recommending activities for a geocoded place"
);
register_scenario!(reusing_cached_forecast, "reusing a cached forecast");
register_scenario!(reporting_unavailable_forecast, "reporting an unavailable forecast");
register_scenario!(reporting_malformed_forecast, "reporting a malformed forecast");
