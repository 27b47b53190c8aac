// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod filter;
pub mod io;
pub mod scoring;
pub mod summary;

// Re-export commonly used types
pub use crate::core::{
    Dataset, RegionRecord, RiskCategory, Score0To100, Score0To25, Score0To30, ScoredDataset,
    ScoredRegion, SubScores,
};

pub use crate::config::{FireriskConfig, RiskThresholds, ScoringWeights};

pub use crate::errors::FireriskError;

pub use crate::filter::{FilterCriteria, FilterStatistics};

pub use crate::io::{
    create_writer, read_dataset, read_scored, write_scored, JoinReport, OutputWriter, ScoreReport,
};

pub use crate::scoring::{classify, composite_score, score_dataset, NormalizationContext};

pub use crate::summary::{summarize, DatasetSummary};
