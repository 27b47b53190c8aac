//! Core domain types shared across the pipeline.

pub mod score_types;
pub mod types;

pub use score_types::{Score0To100, Score0To25, Score0To30};
pub use types::{Dataset, RegionRecord, RiskCategory, ScoredDataset, ScoredRegion, SubScores};
