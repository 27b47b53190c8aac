//! Tabular (CSV) reading and writing of region datasets.
//!
//! The raw schema mirrors the source data one-to-one. Scored datasets are
//! written with the derived columns appended, and can be read back whole,
//! so an exported filtered view round-trips with every raw and derived
//! value intact.

use crate::core::score_types::{Score0To100, Score0To25, Score0To30};
use crate::core::types::{Dataset, RegionRecord, ScoredDataset, ScoredRegion, SubScores};
use crate::errors::FireriskError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Required columns for a raw dataset, in canonical order.
pub const RAW_COLUMNS: [&str; 9] = [
    "region_id",
    "name",
    "temperature_anomaly",
    "precipitation_deficit",
    "fire_event_count",
    "wui_interface_pct",
    "wui_intermix_pct",
    "population",
    "climate_trend_label",
];

/// Derived columns present in exported (scored) datasets.
pub const DERIVED_COLUMNS: [&str; 6] = [
    "heat_stress",
    "drought_stress",
    "fire_history_norm",
    "wui_exposure",
    "risk_score",
    "risk_category",
];

#[derive(Debug, Deserialize)]
struct RawRow {
    region_id: String,
    name: String,
    temperature_anomaly: f64,
    precipitation_deficit: f64,
    fire_event_count: u32,
    wui_interface_pct: f64,
    wui_intermix_pct: f64,
    population: u64,
    climate_trend_label: String,
}

/// NaN and infinity defeat both the clamping score types (`f64::clamp`
/// passes NaN through) and the collection statistics (one infinite value
/// poisons the mean), so non-finite numerics are rejected at load.
fn require_finite(value: f64, column: &'static str, region_id: &str) -> Result<f64, FireriskError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FireriskError::MalformedRow {
            message: format!("region {}: {} must be finite, got {}", region_id, column, value),
        })
    }
}

impl TryFrom<RawRow> for RegionRecord {
    type Error = FireriskError;

    fn try_from(row: RawRow) -> Result<Self, Self::Error> {
        Ok(RegionRecord {
            temperature_anomaly: require_finite(
                row.temperature_anomaly,
                "temperature_anomaly",
                &row.region_id,
            )?,
            precipitation_deficit: require_finite(
                row.precipitation_deficit,
                "precipitation_deficit",
                &row.region_id,
            )?,
            wui_interface_pct: require_finite(
                row.wui_interface_pct,
                "wui_interface_pct",
                &row.region_id,
            )?,
            wui_intermix_pct: require_finite(
                row.wui_intermix_pct,
                "wui_intermix_pct",
                &row.region_id,
            )?,
            region_id: row.region_id,
            name: row.name,
            fire_event_count: row.fire_event_count,
            population: row.population,
            climate_trend_label: row.climate_trend_label,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ScoredRow {
    region_id: String,
    name: String,
    temperature_anomaly: f64,
    precipitation_deficit: f64,
    fire_event_count: u32,
    wui_interface_pct: f64,
    wui_intermix_pct: f64,
    population: u64,
    climate_trend_label: String,
    heat_stress: f64,
    drought_stress: f64,
    fire_history_norm: f64,
    wui_exposure: f64,
    risk_score: f64,
    risk_category: String,
}

impl From<&ScoredRegion> for ScoredRow {
    fn from(region: &ScoredRegion) -> Self {
        let record = &region.record;
        ScoredRow {
            region_id: record.region_id.clone(),
            name: record.name.clone(),
            temperature_anomaly: record.temperature_anomaly,
            precipitation_deficit: record.precipitation_deficit,
            fire_event_count: record.fire_event_count,
            wui_interface_pct: record.wui_interface_pct,
            wui_intermix_pct: record.wui_intermix_pct,
            population: record.population,
            climate_trend_label: record.climate_trend_label.clone(),
            heat_stress: region.scores.heat_stress.value(),
            drought_stress: region.scores.drought_stress.value(),
            fire_history_norm: region.scores.fire_history_norm.value(),
            wui_exposure: region.scores.wui_exposure.value(),
            risk_score: region.risk_score.value(),
            risk_category: region.risk_category.to_string(),
        }
    }
}

impl TryFrom<ScoredRow> for ScoredRegion {
    type Error = FireriskError;

    fn try_from(row: ScoredRow) -> Result<Self, Self::Error> {
        let risk_category =
            row.risk_category
                .parse()
                .map_err(|message| FireriskError::MalformedRow { message })?;

        let id = &row.region_id;
        let scores = SubScores {
            heat_stress: Score0To30::new(require_finite(row.heat_stress, "heat_stress", id)?),
            drought_stress: Score0To30::new(require_finite(
                row.drought_stress,
                "drought_stress",
                id,
            )?),
            fire_history_norm: Score0To30::new(require_finite(
                row.fire_history_norm,
                "fire_history_norm",
                id,
            )?),
            wui_exposure: Score0To25::new(require_finite(row.wui_exposure, "wui_exposure", id)?),
        };
        let risk_score = Score0To100::new(require_finite(row.risk_score, "risk_score", id)?);

        Ok(ScoredRegion {
            record: RegionRecord {
                temperature_anomaly: require_finite(
                    row.temperature_anomaly,
                    "temperature_anomaly",
                    id,
                )?,
                precipitation_deficit: require_finite(
                    row.precipitation_deficit,
                    "precipitation_deficit",
                    id,
                )?,
                wui_interface_pct: require_finite(
                    row.wui_interface_pct,
                    "wui_interface_pct",
                    id,
                )?,
                wui_intermix_pct: require_finite(
                    row.wui_intermix_pct,
                    "wui_intermix_pct",
                    id,
                )?,
                region_id: row.region_id,
                name: row.name,
                fire_event_count: row.fire_event_count,
                population: row.population,
                climate_trend_label: row.climate_trend_label,
            },
            scores,
            risk_score,
            risk_category,
        })
    }
}

/// Fail fast on the first missing required column, naming it.
fn check_headers(
    headers: &csv::StringRecord,
    required: &[&'static str],
) -> Result<(), FireriskError> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(FireriskError::MissingColumn { column });
        }
    }
    Ok(())
}

/// Read a raw dataset. Derived columns, if present, are ignored.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, FireriskError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    check_headers(csv_reader.headers()?, &RAW_COLUMNS)?;

    let mut regions = Vec::new();
    for row in csv_reader.deserialize::<RawRow>() {
        regions.push(RegionRecord::try_from(row?)?);
    }
    Ok(Dataset::new(regions))
}

/// Read a previously exported dataset, derived columns included.
pub fn read_scored<R: Read>(reader: R) -> Result<ScoredDataset, FireriskError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?;
    check_headers(headers, &RAW_COLUMNS)?;
    check_headers(headers, &DERIVED_COLUMNS)?;

    let mut regions = Vec::new();
    for row in csv_reader.deserialize::<ScoredRow>() {
        regions.push(ScoredRegion::try_from(row?)?);
    }
    Ok(ScoredDataset::new(regions))
}

/// Serialize a scored dataset (or filtered view) with raw and derived
/// columns. A pure projection: order and values pass through untouched.
pub fn write_scored<W: Write>(writer: W, dataset: &ScoredDataset) -> Result<(), FireriskError> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    // Header goes out even for an empty view, so the export stays readable
    let header = RAW_COLUMNS.iter().chain(DERIVED_COLUMNS.iter());
    csv_writer.write_record(header)?;
    for region in dataset.iter() {
        csv_writer.serialize(ScoredRow::from(region))?;
    }
    csv_writer.flush().map_err(|source| FireriskError::Io {
        path: Path::new("<writer>").to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Read a raw dataset from a file path.
pub fn read_dataset_file(path: &Path) -> Result<Dataset, FireriskError> {
    let file = File::open(path).map_err(|source| FireriskError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_dataset(file)
}

/// Write a scored dataset to a file path.
pub fn write_scored_file(path: &Path, dataset: &ScoredDataset) -> Result<(), FireriskError> {
    let file = File::create(path).map_err(|source| FireriskError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_scored(file, dataset)
}
