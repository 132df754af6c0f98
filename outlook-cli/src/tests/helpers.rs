//! Test doubles and fixtures shared by the CLI unit and behaviour tests.

use std::cell::RefCell;

use camino::{Utf8Path, Utf8PathBuf};
use outlook_core::test_support::{StubForecastProvider, StubGeocoder, sample_week};
use outlook_core::{
    ForecastError, ForecastProvider, GeocodeError, Geocoder, ObservationSeries, Place,
};
use tempfile::TempDir;

use crate::CliError;
use crate::services::ServiceBuilder;

/// Writes `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// Temporary directory addressed through a UTF-8 path.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn lisbon() -> Place {
    Place::new("Lisbon", 38.72, -9.14).with_country("Portugal")
}

/// Service builder handing out stub adapters and recording requested URLs.
#[derive(Debug)]
pub(super) struct StubServices {
    forecast: Result<ObservationSeries, ForecastError>,
    places: Result<Vec<Place>, GeocodeError>,
    pub(super) forecast_urls: RefCell<Vec<String>>,
    pub(super) geocoding_urls: RefCell<Vec<String>>,
}

impl StubServices {
    pub(super) fn new(places: Vec<Place>) -> Self {
        Self {
            forecast: Ok(sample_week()),
            places: Ok(places),
            forecast_urls: RefCell::new(Vec::new()),
            geocoding_urls: RefCell::new(Vec::new()),
        }
    }

    pub(super) fn with_forecast_error(mut self, error: ForecastError) -> Self {
        self.forecast = Err(error);
        self
    }

    pub(super) fn with_geocode_error(mut self, error: GeocodeError) -> Self {
        self.places = Err(error);
        self
    }
}

impl ServiceBuilder for StubServices {
    fn forecast_provider(&self, base_url: &str) -> Result<Box<dyn ForecastProvider>, CliError> {
        self.forecast_urls.borrow_mut().push(base_url.to_owned());
        let provider = match &self.forecast {
            Ok(series) => StubForecastProvider::with_series(series.clone()),
            Err(error) => StubForecastProvider::with_error(error.clone()),
        };
        Ok(Box::new(provider))
    }

    fn geocoder(&self, base_url: &str) -> Result<Box<dyn Geocoder>, CliError> {
        self.geocoding_urls.borrow_mut().push(base_url.to_owned());
        let geocoder = match &self.places {
            Ok(places) => StubGeocoder::with_places(places.clone()),
            Err(error) => StubGeocoder::with_error(error.clone()),
        };
        Ok(Box::new(geocoder))
    }
}
