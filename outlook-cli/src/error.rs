//! Error types emitted by the Outlook CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use outlook_core::{GeocodeError, ObservationSeriesError};
use outlook_data::ProviderBuildError;
use outlook_scorer::RecommendError;
use thiserror::Error;

/// Errors emitted by the Outlook CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without dashes.
        field: &'static str,
        /// Environment variable that also supplies the value.
        env: &'static str,
    },
    /// A place name and coordinates were both supplied.
    #[error("--place cannot be combined with --latitude/--longitude")]
    ConflictingLocation,
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name without dashes.
        field: &'static str,
        /// Configured path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name without dashes.
        field: &'static str,
        /// Configured path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name without dashes.
        field: &'static str,
        /// Configured path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the observation series file failed.
    #[error("failed to open observation series at {path:?}: {source}")]
    OpenSeries {
        /// Series file path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The observation series JSON could not be decoded.
    #[error("failed to parse observation series JSON at {path:?}: {source}")]
    ParseSeries {
        /// Series file path.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The observation series arrays disagree in length.
    #[error("observation series in {path:?} is malformed: {source}")]
    InvalidSeries {
        /// Series file path.
        path: Utf8PathBuf,
        /// Validation error.
        #[source]
        source: ObservationSeriesError,
    },
    /// Constructing an HTTP adapter failed.
    #[error("failed to build client for {base_url:?}: {source}")]
    BuildProvider {
        /// Configured endpoint.
        base_url: String,
        /// Construction error.
        #[source]
        source: ProviderBuildError,
    },
    /// The geocoding service failed.
    #[error("failed to look up {name:?}: {source}")]
    Geocode {
        /// Searched name.
        name: String,
        /// Geocoder error.
        #[source]
        source: GeocodeError,
    },
    /// The geocoding service found nothing for the name.
    #[error("no place matches {name:?}")]
    PlaceNotFound {
        /// Searched name.
        name: String,
    },
    /// Building the recommendation failed.
    #[error("failed to rank activities for {location}: {source}")]
    Recommend {
        /// Location label.
        location: String,
        /// Recommendation error.
        #[source]
        source: RecommendError,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output to stdout failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Writing command output to a file failed.
    #[error("failed to write output to {path:?}: {source}")]
    WriteOutputFile {
        /// Output file path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
