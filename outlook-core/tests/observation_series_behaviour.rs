//! Behavioural coverage for observation series validation.

use std::cell::RefCell;

use outlook_core::{ObservationSeries, ObservationSeriesError, WeatherClass, WeatherCode};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Date and weather class of each walked day.
type WalkOutcome = Result<Vec<(String, WeatherClass)>, ObservationSeriesError>;

#[fixture]
fn series() -> RefCell<Option<ObservationSeries>> {
    RefCell::new(None)
}

#[fixture]
fn payload() -> RefCell<Option<String>> {
    RefCell::new(None)
}

#[fixture]
fn walk() -> RefCell<Option<WalkOutcome>> {
    RefCell::new(None)
}

fn three_days() -> ObservationSeries {
    ObservationSeries {
        time: vec![
            "2025-01-10".to_owned(),
            "2025-01-11".to_owned(),
            "2025-01-12".to_owned(),
        ],
        temperature_2m_max: vec![-2.0, -5.0, 1.0],
        temperature_2m_min: vec![-9.0, -12.0, -4.0],
        precipitation_sum: vec![0.0, 12.5, 1.2],
        wind_speed_10m_max: vec![8.0, 22.0, 14.0],
        weather_code: vec![WeatherCode::new(1), WeatherCode::new(73), WeatherCode::new(61)],
    }
}

#[given("a three-day series with matching arrays")]
fn matching_series(#[from(series)] series: &RefCell<Option<ObservationSeries>>) {
    *series.borrow_mut() = Some(three_days());
}

#[given("a three-day series missing one precipitation total")]
fn short_series(#[from(series)] series: &RefCell<Option<ObservationSeries>>) {
    let mut malformed = three_days();
    malformed.precipitation_sum.pop();
    *series.borrow_mut() = Some(malformed);
}

#[given("a JSON daily block with seven days")]
fn json_payload(#[from(payload)] payload: &RefCell<Option<String>>) {
    let json = r#"{
        "time": ["2025-06-05","2025-06-06","2025-06-07","2025-06-08","2025-06-09","2025-06-10","2025-06-11"],
        "temperature_2m_max": [22.0, 24.0, 25.0, 21.0, 19.0, 20.0, 23.0],
        "temperature_2m_min": [12.0, 14.0, 15.0, 13.0, 11.0, 12.0, 13.0],
        "precipitation_sum": [0.0, 0.2, 0.0, 5.0, 10.0, 2.0, 0.0],
        "wind_speed_10m_max": [10.0, 12.0, 8.0, 15.0, 20.0, 18.0, 10.0],
        "weather_code": [0, 1, 0, 61, 63, 80, 1]
    }"#;
    *payload.borrow_mut() = Some(json.to_owned());
}

#[when("I walk the series day by day")]
fn walk_series(
    #[from(series)] series: &RefCell<Option<ObservationSeries>>,
    #[from(walk)] walk: &RefCell<Option<WalkOutcome>>,
) {
    let binding = series.borrow();
    let input = binding
        .as_ref()
        .unwrap_or_else(|| panic!("series must be initialised"));
    let outcome = input.days().map(|days| {
        days.map(|day| (day.date.to_owned(), day.weather_code.class()))
            .collect()
    });
    *walk.borrow_mut() = Some(outcome);
}

#[when("I decode the payload")]
fn decode_payload(
    #[from(payload)] payload: &RefCell<Option<String>>,
    #[from(series)] series: &RefCell<Option<ObservationSeries>>,
) {
    let binding = payload.borrow();
    let json = binding
        .as_deref()
        .unwrap_or_else(|| panic!("payload must be initialised"));
    let decoded: ObservationSeries =
        serde_json::from_str(json).unwrap_or_else(|err| panic!("decode daily block: {err}"));
    *series.borrow_mut() = Some(decoded);
}

#[then("three days are produced in date order")]
fn three_days_in_order(#[from(walk)] walk: &RefCell<Option<WalkOutcome>>) {
    let binding = walk.borrow();
    match binding.as_ref() {
        Some(Ok(days)) => {
            let dates: Vec<&str> = days.iter().map(|(date, _)| date.as_str()).collect();
            assert_eq!(dates, ["2025-01-10", "2025-01-11", "2025-01-12"]);
        }
        Some(Err(err)) => panic!("walk should succeed, got {err}"),
        None => panic!("walk outcome must be recorded"),
    }
}

#[then("the second day is classified as snowy")]
fn second_day_snowy(#[from(walk)] walk: &RefCell<Option<WalkOutcome>>) {
    let binding = walk.borrow();
    let class = match binding.as_ref() {
        Some(Ok(days)) => days.get(1).map(|(_, class)| *class),
        other => panic!("walk should succeed, got {other:?}"),
    };
    assert_eq!(class, Some(WeatherClass::Snowy));
}

#[then("the walk fails naming the precipitation array")]
fn walk_fails(#[from(walk)] walk: &RefCell<Option<WalkOutcome>>) {
    let binding = walk.borrow();
    match binding.as_ref() {
        Some(Err(ObservationSeriesError::LengthMismatch {
            field,
            expected,
            actual,
        })) => {
            assert_eq!(*field, "precipitation_sum");
            assert_eq!((*expected, *actual), (3, 2));
        }
        other => panic!("expected a length mismatch, got {other:?}"),
    }
}

#[then("the decoded series covers seven days")]
fn decoded_seven_days(#[from(series)] series: &RefCell<Option<ObservationSeries>>) {
    let binding = series.borrow();
    let decoded = binding
        .as_ref()
        .unwrap_or_else(|| panic!("series must be decoded"));
    assert_eq!(decoded.len(), 7);
    assert_eq!(decoded.validate(), Ok(()));
    assert_eq!(decoded.weather_code.get(3), Some(&WeatherCode::new(61)));
}

#[scenario(path = "tests/features/observation_series.feature", index = 0)]
fn iterating_well_formed_series(
    series: RefCell<Option<ObservationSeries>>,
    payload: RefCell<Option<String>>,
    walk: RefCell<Option<WalkOutcome>>,
) {
    let _ = (series, payload, walk);
}

#[scenario(path = "tests/features/observation_series.feature", index = 1)]
fn rejecting_short_series(
    series: RefCell<Option<ObservationSeries>>,
    payload: RefCell<Option<String>>,
    walk: RefCell<Option<WalkOutcome>>,
) {
    let _ = (series, payload, walk);
}

#[scenario(path = "tests/features/observation_series.feature", index = 2)]
fn decoding_forecast_payload(
    series: RefCell<Option<ObservationSeries>>,
    payload: RefCell<Option<String>>,
    walk: RefCell<Option<WalkOutcome>>,
) {
    let _ = (series, payload, walk);
}
