//! Focused unit tests covering score CLI configuration and series loading.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::score::{ScoreConfig, config_from_layers_for_test, execute_score, load_series};
use ortho_config::MergeComposer;
use outlook_core::test_support::sample_week;
use outlook_core::{Activity, ObservationSeriesError};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn write_sample_week(workspace: &Workspace, name: &str) -> camino::Utf8PathBuf {
    let path = workspace.path(name);
    let payload = serde_json::to_vec(&sample_week()).expect("serialise series");
    write_utf8(&path, &payload);
    path
}

fn config_for(series_path: camino::Utf8PathBuf) -> ScoreConfig {
    ScoreConfig {
        series_path,
        leaderboard: false,
        output: None,
    }
}

#[rstest]
fn converting_without_series_errors() {
    let err = ScoreConfig::try_from(ScoreArgs::default()).expect_err("missing series");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SERIES);
            assert_eq!(env, ENV_SCORE_SERIES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_file(workspace: Workspace) {
    let config = config_for(workspace.path("absent.json"));
    let err = config.validate_sources().expect_err("missing file");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_SERIES),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories(workspace: Workspace) {
    let dir = workspace.path("series");
    std::fs::create_dir(&dir).expect("series directory");
    let err = config_for(dir)
        .validate_sources()
        .expect_err("directory should be rejected");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_SERIES),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_series_accepts_bare_series(workspace: Workspace) {
    let path = write_sample_week(&workspace, "week.json");
    let series = load_series(&path).expect("series should load");
    assert_eq!(series, sample_week());
}

#[rstest]
fn load_series_accepts_saved_forecast_response(workspace: Workspace) {
    let path = workspace.path("forecast.json");
    let payload = json!({
        "latitude": 38.72,
        "longitude": -9.14,
        "timezone": "Europe/Lisbon",
        "daily": sample_week(),
    });
    write_utf8(&path, payload.to_string().as_bytes());

    let series = load_series(&path).expect("series should load");
    assert_eq!(series.len(), 7);
}

#[rstest]
fn load_series_normalises_single_day_forecast(workspace: Workspace) {
    let path = workspace.path("one-day.json");
    let payload = json!({
        "daily": {
            "time": "2025-06-05",
            "temperature_2m_max": [22.0],
            "temperature_2m_min": [12.0],
            "precipitation_sum": [0.0],
            "wind_speed_10m_max": [10.0],
            "weather_code": [0],
        }
    });
    write_utf8(&path, payload.to_string().as_bytes());

    let series = load_series(&path).expect("single-day forecast should load");
    assert_eq!(series.time, vec!["2025-06-05".to_owned()]);
    assert!(series.validate().is_ok());

    let rankings = execute_score(&config_for(path)).expect("scoring should succeed");
    assert!(rankings.iter().all(|ranking| ranking.daily_scores.len() == 1));
}

#[rstest]
fn forecast_missing_arrays_is_reported_as_malformed(workspace: Workspace) {
    let path = workspace.path("sparse.json");
    let payload = json!({ "daily": { "time": ["2025-06-05", "2025-06-06"] } });
    write_utf8(&path, payload.to_string().as_bytes());

    let err = execute_score(&config_for(path)).expect_err("missing arrays");
    match err {
        CliError::InvalidSeries {
            source: ObservationSeriesError::LengthMismatch {
                expected, actual, ..
            },
            ..
        } => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 0);
        }
        other => panic!("expected InvalidSeries, found {other:?}"),
    }
}

#[rstest]
fn load_series_reports_invalid_json(workspace: Workspace) {
    let path = workspace.path("broken.json");
    write_utf8(&path, b"{ not valid json");

    let err = load_series(&path).expect_err("invalid JSON");
    match err {
        CliError::ParseSeries { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseSeries, found {other:?}"),
    }
}

#[rstest]
fn load_series_reports_missing_file(workspace: Workspace) {
    let path = workspace.path("absent.json");
    let err = load_series(&path).expect_err("missing file");
    assert!(matches!(err, CliError::OpenSeries { .. }));
}

#[rstest]
fn execute_score_ranks_every_activity(workspace: Workspace) {
    let path = write_sample_week(&workspace, "week.json");

    let rankings = execute_score(&config_for(path)).expect("scoring should succeed");

    let activities: Vec<Activity> = rankings.iter().map(|ranking| ranking.activity).collect();
    assert_eq!(activities, Activity::ALL.to_vec());
    assert!(rankings.iter().all(|ranking| ranking.daily_scores.len() == 7));
}

#[rstest]
fn execute_score_orders_leaderboard(workspace: Workspace) {
    let mut config = config_for(write_sample_week(&workspace, "week.json"));
    config.leaderboard = true;

    let rankings = execute_score(&config).expect("scoring should succeed");

    assert_eq!(
        rankings.first().map(|ranking| ranking.activity),
        Some(Activity::Surfing)
    );
    assert_eq!(
        rankings.last().map(|ranking| ranking.activity),
        Some(Activity::Skiing)
    );
}

#[rstest]
fn execute_score_reports_malformed_series(workspace: Workspace) {
    let mut series = sample_week();
    series.precipitation_sum.pop();
    let path = workspace.path("short.json");
    write_utf8(
        &path,
        &serde_json::to_vec(&series).expect("serialise series"),
    );

    let err = execute_score(&config_for(path)).expect_err("malformed series");
    match err {
        CliError::InvalidSeries {
            source: ObservationSeriesError::LengthMismatch { field, .. },
            ..
        } => assert_eq!(field, "precipitation_sum"),
        other => panic!("expected InvalidSeries, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_reads_series_from_environment(workspace: Workspace) {
    let env_path = workspace.path("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "leaderboard": true }), None);
    composer.push_environment(json!({ "series_path": env_path.as_str() }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.series_path, env_path);
    assert!(config.leaderboard);
}
