//! The `score` command: load, score, filter, report/export.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::config::{self, FireriskConfig};
use crate::errors::FireriskError;
use crate::filter::{apply, FilterCriteria, FilterStatistics};
use crate::io::output::{create_writer, OutputFormat, ScoreReport};
use crate::io::{load_geometry_file, read_dataset_file, write_scored_file, JoinReport};
use crate::scoring::score_dataset;
use crate::summary::summarize;

#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub geometry: Option<PathBuf>,
    pub geometry_id_property: String,
    pub categories: Vec<String>,
    pub trends: Vec<String>,
    pub min_population: Option<u64>,
    pub max_population: Option<u64>,
    pub top: Option<usize>,
    pub config_path: Option<PathBuf>,
    pub heat_weight: Option<f64>,
    pub drought_weight: Option<f64>,
    pub fire_weight: Option<f64>,
    pub wui_weight: Option<f64>,
}

pub fn handle_score(config: ScoreConfig) -> Result<()> {
    let pipeline_config = resolve_config(&config)?;

    // Schema errors fail fast here, before any scoring
    let dataset = read_dataset_file(&config.path)
        .with_context(|| format!("failed to load dataset {}", config.path.display()))?;
    log::debug!("loaded {} regions from {}", dataset.len(), config.path.display());

    let scored = score_dataset(&dataset, &pipeline_config);

    let criteria = build_criteria(&config)?;
    if criteria.is_unfiltered() {
        log::debug!("no active filters; reporting the full dataset");
    } else if criteria.is_empty_range() {
        log::warn!("min population exceeds max population; result is empty");
    }
    let filtered = apply(&scored, &criteria);
    let filter_stats = FilterStatistics::from_result(&scored, &filtered);

    // The join is reported over the full dataset: unmatched regions stay in
    // the filtered/exported view either way.
    let join = match &config.geometry {
        Some(path) => Some(run_geometry_join(path, &config.geometry_id_property, &scored)?),
        None => None,
    };

    let report = ScoreReport {
        summary: summarize(&filtered),
        filter: filter_stats,
        join,
        regions: filtered,
    };

    write_report(&config, &report)
}

/// Load config (explicit file is a hard error, discovery degrades to
/// defaults), then layer CLI weight overrides on top and re-validate.
fn resolve_config(config: &ScoreConfig) -> Result<FireriskConfig> {
    let mut pipeline_config = match &config.config_path {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };

    if let Some(weight) = config.heat_weight {
        pipeline_config.weights.heat_weight = weight;
    }
    if let Some(weight) = config.drought_weight {
        pipeline_config.weights.drought_weight = weight;
    }
    if let Some(weight) = config.fire_weight {
        pipeline_config.weights.fire_weight = weight;
    }
    if let Some(weight) = config.wui_weight {
        pipeline_config.weights.wui_weight = weight;
    }

    pipeline_config
        .weights
        .validate()
        .map_err(FireriskError::Config)?;

    Ok(pipeline_config)
}

fn build_criteria(config: &ScoreConfig) -> Result<FilterCriteria> {
    let categories = config
        .categories
        .iter()
        .map(|s| s.parse().map_err(FireriskError::Config))
        .collect::<Result<_, _>>()?;

    Ok(FilterCriteria {
        categories,
        trends: config.trends.iter().cloned().collect(),
        min_population: config.min_population,
        max_population: config.max_population,
    })
}

fn run_geometry_join(
    path: &PathBuf,
    id_property: &str,
    scored: &crate::core::types::ScoredDataset,
) -> Result<JoinReport> {
    let source = load_geometry_file(path, id_property)
        .with_context(|| format!("failed to load geometry {}", path.display()))?;
    let report = source.join(scored);
    report.log_warnings();
    Ok(report)
}

fn write_report(config: &ScoreConfig, report: &ScoreReport) -> Result<()> {
    match (&config.output, config.format) {
        // CSV export to a file is the dataset writer's own path
        (Some(path), OutputFormat::Csv) => write_scored_file(path, &report.regions)
            .with_context(|| format!("failed to write {}", path.display())),
        (Some(path), format) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            create_writer(format, file, config.top).write_report(report)
        }
        (None, format) => {
            let stdout = std::io::stdout();
            create_writer(format, stdout, config.top).write_report(report)?;
            std::io::stdout().flush()?;
            Ok(())
        }
    }
}
