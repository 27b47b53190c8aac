//! Error taxonomy for the scoring pipeline.
//!
//! Schema errors halt the pipeline: no meaningful scoring is possible with
//! required columns missing. Everything else is recoverable at the boundary
//! (join mismatches are warnings, degenerate statistics have defined
//! fallbacks, inverted filter ranges normalize to empty results).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FireriskError {
    /// A required column is absent from the tabular input. Fatal: reported
    /// before any scoring is attempted.
    #[error("missing required column '{column}' in dataset")]
    MissingColumn { column: &'static str },

    /// A row failed to parse into the expected field types.
    #[error("malformed dataset row: {message}")]
    MalformedRow { message: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The geometry file is not a parseable GeoJSON FeatureCollection.
    #[error("invalid geometry file {}: {message}", path.display())]
    Geometry { path: PathBuf, message: String },

    /// Configuration failed validation (weights, thresholds).
    #[error("invalid configuration: {0}")]
    Config(String),
}
