//! Report writers for the scored, filtered dataset.
//!
//! Follows a writer-per-format design behind a single trait. The CSV
//! writer is the export path: it emits exactly the filtered view in
//! dataset order, so downstream tools can re-read what the user saw.

use crate::core::types::{RiskCategory, ScoredDataset, ScoredRegion};
use crate::filter::FilterStatistics;
use crate::io::dataset::write_scored;
use crate::io::geometry::JoinReport;
use crate::summary::DatasetSummary;
use colored::Colorize;
use comfy_table::Table;
use serde::Serialize;
use std::io::Write;

/// Everything a writer needs to render one scoring run.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub summary: DatasetSummary,
    pub filter: FilterStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join: Option<JoinReport>,
    /// Filtered view, in dataset order.
    pub regions: ScoredDataset,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Export writer: the filtered view serialized back to the tabular format.
pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        write_scored(&mut self.writer, &report.regions)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    /// Limit the ranking table to the top N regions by score.
    top: Option<usize>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, top: Option<usize>) -> Self {
        Self { writer, top }
    }

    fn write_summary(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(
            self.writer,
            "{} of {} regions shown",
            report.filter.retained, report.filter.total_regions
        )?;
        writeln!(
            self.writer,
            "Population: {}  At risk (WUI-weighted): {}",
            summary.total_population, summary.population_at_risk
        )?;

        let categories = RiskCategory::all()
            .map(|category| format!("{}: {}", colored_label(category), summary.count_for(category)));
        writeln!(self.writer, "{}", categories.join("  "))?;

        if !summary.trend_counts.is_empty() {
            let trends: Vec<String> = summary
                .trend_counts
                .iter()
                .map(|(label, count)| format!("{}: {}", label, count))
                .collect();
            writeln!(self.writer, "Trends  {}", trends.join("  "))?;
        }
        Ok(())
    }

    fn write_join_report(&mut self, join: &JoinReport) -> anyhow::Result<()> {
        if join.is_clean() {
            writeln!(self.writer, "Geometry join: all {} regions matched", join.matched)?;
            return Ok(());
        }
        writeln!(
            self.writer,
            "Geometry join: {} matched, {} region(s) without geometry, {} feature(s) without region",
            join.matched,
            join.regions_without_geometry.len(),
            join.features_without_region.len()
        )?;
        Ok(())
    }

    fn write_rankings(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let mut ranked: Vec<&ScoredRegion> = report.regions.iter().collect();
        // Stable sort keeps dataset order among ties
        ranked.sort_by(|a, b| {
            b.risk_score
                .partial_cmp(&a.risk_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if let Some(top) = self.top {
            ranked.truncate(top);
        }

        let mut table = Table::new();
        table.set_header(vec![
            "Rank", "Region", "FIPS", "Score", "Category", "Trend", "Population",
        ]);
        for (rank, region) in ranked.iter().enumerate() {
            table.add_row(vec![
                (rank + 1).to_string(),
                region.record.name.clone(),
                region.record.region_id.clone(),
                region.risk_score.to_string(),
                region.risk_category.to_string(),
                region.record.climate_trend_label.clone(),
                region.record.population.to_string(),
            ]);
        }
        writeln!(self.writer, "{}", table)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        self.write_summary(report)?;
        if let Some(ref join) = report.join {
            self.write_join_report(join)?;
        }
        writeln!(self.writer)?;
        self.write_rankings(report)?;
        Ok(())
    }
}

fn colored_label(category: RiskCategory) -> String {
    match category {
        RiskCategory::Critical => category.label().red().bold().to_string(),
        RiskCategory::High => category.label().red().to_string(),
        RiskCategory::Moderate => category.label().yellow().to_string(),
        RiskCategory::Low => category.label().green().to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
    Csv,
}

/// Construct the writer for a format.
pub fn create_writer<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
    top: Option<usize>,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, top)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Csv => Box::new(CsvWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FireriskConfig;
    use crate::core::types::{Dataset, RegionRecord};
    use crate::filter::FilterStatistics;
    use crate::scoring::score_dataset;
    use crate::summary::summarize;

    fn sample_report() -> ScoreReport {
        let records = vec![
            region("53007", "CHELAN", 3.0, 80, 90.0),
            region("53001", "ADAMS", -2.0, 0, 5.0),
        ];
        let scored = score_dataset(&Dataset::new(records), &FireriskConfig::default());
        ScoreReport {
            summary: summarize(&scored),
            filter: FilterStatistics {
                total_regions: 2,
                retained: 2,
            },
            join: None,
            regions: scored,
        }
    }

    fn region(id: &str, name: &str, anomaly: f64, fires: u32, intermix: f64) -> RegionRecord {
        RegionRecord {
            region_id: id.to_string(),
            name: name.to_string(),
            temperature_anomaly: anomaly,
            precipitation_deficit: anomaly,
            fire_event_count: fires,
            wui_interface_pct: intermix / 2.0,
            wui_intermix_pct: intermix,
            population: 10_000,
            climate_trend_label: "Stable".to_string(),
        }
    }

    #[test]
    fn json_writer_emits_parseable_report() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["regions"]["regions"].as_array().unwrap().len(), 2);
        assert!(value["summary"]["region_count"].is_number());
    }

    #[test]
    fn csv_writer_emits_the_filtered_view() {
        let mut buffer = Vec::new();
        CsvWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("region_id,"));
        assert!(text.contains("CHELAN"));
        assert!(text.contains("ADAMS"));
    }

    #[test]
    fn terminal_writer_ranks_by_score_descending() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, None)
            .write_report(&sample_report())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let chelan = text.find("CHELAN").unwrap();
        let adams = text.find("ADAMS").unwrap();
        assert!(chelan < adams);
    }

    #[test]
    fn terminal_writer_honors_top_limit() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, Some(1))
            .write_report(&sample_report())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("CHELAN"));
        assert!(!text.contains("ADAMS"));
    }
}
