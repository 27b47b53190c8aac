//! File and stream I/O: tabular datasets, boundary geometry, report output.

pub mod dataset;
pub mod geometry;
pub mod output;

pub use dataset::{read_dataset, read_dataset_file, read_scored, write_scored, write_scored_file};
pub use geometry::{load_geometry_file, GeometrySource, JoinReport, DEFAULT_ID_PROPERTY};
pub use output::{create_writer, OutputFormat, OutputWriter, ScoreReport};
