//! Error types emitted by the Tripline CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>`.

use std::io;
use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tripline_core::{ItineraryError, SearchError};
use tripline_data::{CatalogueError, JsonSnapshotStoreError};

/// Errors emitted by the Tripline CLI.
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
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    /// Opening the trip plan failed.
    #[error("failed to open trip plan at {path:?}")]
    OpenTrip {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    /// Trip plan JSON could not be decoded.
    #[error("failed to parse trip plan JSON at {path:?}")]
    ParseTrip {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The trip plan describes an itinerary the model rejects.
    #[error("trip plan in {path:?} is not a valid itinerary")]
    InvalidTrip {
        path: Utf8PathBuf,
        #[source]
        source: ItineraryError,
    },
    /// Loading or saving the snapshot failed.
    #[error(transparent)]
    Snapshot(#[from] JsonSnapshotStoreError),
    /// `show` found nothing to display.
    #[error("no itinerary saved at {path:?}")]
    NoSavedItinerary { path: Utf8PathBuf },
    /// Loading the place catalogue failed.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
    /// The catalogue rejected the query.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The reference location is not in the catalogue.
    #[error("location {id:?} is not in the catalogue")]
    UnknownLocation { id: String },
    /// The suggestion category is not recognised.
    #[error("invalid --{field} value: {reason}")]
    InvalidCategory { field: &'static str, reason: String },
    /// Serializing command output failed.
    #[error("failed to serialize output")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output")]
    WriteOutput(#[source] io::Error),
}
