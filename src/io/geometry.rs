//! Region boundary geometry, joined to the dataset by identity.
//!
//! The geometry file is a GeoJSON FeatureCollection whose features carry a
//! region-identity property (default `GEOID`) matching the tabular
//! `region_id` column. A join mismatch is a data-quality warning, never an
//! error: unmatched regions stay in the dataset for filtering and export,
//! they are only absent from any downstream map rendering.

use crate::core::types::ScoredDataset;
use crate::errors::FireriskError;
use geojson::GeoJson;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Property name the original county boundaries key their features by.
pub const DEFAULT_ID_PROPERTY: &str = "GEOID";

/// The set of region identities present in a boundary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometrySource {
    ids: BTreeSet<String>,
    /// Features that carry no usable identity property at all.
    features_missing_id: usize,
}

impl GeometrySource {
    pub fn ids(&self) -> &BTreeSet<String> {
        &self.ids
    }

    pub fn contains(&self, region_id: &str) -> bool {
        self.ids.contains(region_id)
    }

    pub fn features_missing_id(&self) -> usize {
        self.features_missing_id
    }

    /// Join the boundary identities against a scored dataset (or view).
    pub fn join(&self, dataset: &ScoredDataset) -> JoinReport {
        let table_ids: BTreeSet<&str> = dataset
            .iter()
            .map(|r| r.record.region_id.as_str())
            .collect();

        let regions_without_geometry = dataset
            .iter()
            .filter(|r| !self.ids.contains(&r.record.region_id))
            .map(|r| r.record.region_id.clone())
            .collect();

        let features_without_region = self
            .ids
            .iter()
            .filter(|id| !table_ids.contains(id.as_str()))
            .cloned()
            .collect();

        JoinReport {
            matched: table_ids
                .iter()
                .filter(|id| self.ids.contains(**id))
                .count(),
            regions_without_geometry,
            features_without_region,
            features_missing_id: self.features_missing_id,
        }
    }
}

/// Result of joining tabular identities against boundary identities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinReport {
    pub matched: usize,
    /// Tabular regions with no boundary; retained for filtering/export.
    pub regions_without_geometry: Vec<String>,
    /// Boundary features with no tabular row.
    pub features_without_region: Vec<String>,
    /// Boundary features lacking the identity property entirely.
    pub features_missing_id: usize,
}

impl JoinReport {
    pub fn is_clean(&self) -> bool {
        self.regions_without_geometry.is_empty()
            && self.features_without_region.is_empty()
            && self.features_missing_id == 0
    }

    /// Emit data-quality warnings for every mismatch.
    pub fn log_warnings(&self) {
        for region_id in &self.regions_without_geometry {
            log::warn!("region {} has no matching boundary geometry", region_id);
        }
        for feature_id in &self.features_without_region {
            log::warn!("boundary feature {} has no matching dataset region", feature_id);
        }
        if self.features_missing_id > 0 {
            log::warn!(
                "{} boundary feature(s) lack an identity property",
                self.features_missing_id
            );
        }
    }
}

/// Parse a GeoJSON string into a geometry source keyed by `id_property`.
///
/// Numeric identity values are accepted and stringified, matching how the
/// source boundary files encode FIPS codes.
pub fn parse_geometry(contents: &str, id_property: &str) -> Result<GeometrySource, String> {
    let geojson = contents
        .parse::<GeoJson>()
        .map_err(|e| format!("not valid GeoJSON: {}", e))?;

    let collection = match geojson {
        GeoJson::FeatureCollection(collection) => collection,
        other => {
            return Err(format!(
                "expected a FeatureCollection, got {}",
                geojson_kind(&other)
            ))
        }
    };

    let mut ids = BTreeSet::new();
    let mut features_missing_id = 0usize;
    for feature in &collection.features {
        match feature.property(id_property) {
            Some(serde_json::Value::String(id)) => {
                ids.insert(id.clone());
            }
            Some(serde_json::Value::Number(id)) => {
                ids.insert(id.to_string());
            }
            _ => features_missing_id += 1,
        }
    }

    Ok(GeometrySource {
        ids,
        features_missing_id,
    })
}

fn geojson_kind(geojson: &GeoJson) -> &'static str {
    match geojson {
        GeoJson::Geometry(_) => "a bare Geometry",
        GeoJson::Feature(_) => "a single Feature",
        GeoJson::FeatureCollection(_) => "a FeatureCollection",
    }
}

/// Load a geometry source from a GeoJSON file.
pub fn load_geometry_file(path: &Path, id_property: &str) -> Result<GeometrySource, FireriskError> {
    let contents = fs::read_to_string(path).map_err(|source| FireriskError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_geometry(&contents, id_property).map_err(|message| FireriskError::Geometry {
        path: path.to_path_buf(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FireriskConfig;
    use crate::core::types::{Dataset, RegionRecord};
    use crate::scoring::score_dataset;

    const BOUNDARIES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"GEOID": "53007", "NAME": "Chelan"},
             "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}},
            {"type": "Feature", "properties": {"GEOID": "53033", "NAME": "King"},
             "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}},
            {"type": "Feature", "properties": {"GEOID": "53077", "NAME": "Yakima"},
             "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}}
        ]
    }"#;

    fn record(id: &str) -> RegionRecord {
        RegionRecord {
            region_id: id.to_string(),
            name: "COUNTY".to_string(),
            temperature_anomaly: 1.0,
            precipitation_deficit: 0.5,
            fire_event_count: 3,
            wui_interface_pct: 10.0,
            wui_intermix_pct: 20.0,
            population: 1000,
            climate_trend_label: "Stable".to_string(),
        }
    }

    fn scored(ids: &[&str]) -> ScoredDataset {
        let dataset = Dataset::new(ids.iter().map(|id| record(id)).collect());
        score_dataset(&dataset, &FireriskConfig::default())
    }

    #[test]
    fn parses_feature_collection_ids() {
        let source = parse_geometry(BOUNDARIES, DEFAULT_ID_PROPERTY).unwrap();
        assert!(source.contains("53007"));
        assert!(source.contains("53077"));
        assert_eq!(source.ids().len(), 3);
        assert_eq!(source.features_missing_id(), 0);
    }

    #[test]
    fn join_reports_mismatches_both_ways() {
        let source = parse_geometry(BOUNDARIES, DEFAULT_ID_PROPERTY).unwrap();
        // 53001 has no boundary; 53077 has no tabular row
        let report = source.join(&scored(&["53007", "53033", "53001"]));

        assert_eq!(report.matched, 2);
        assert_eq!(report.regions_without_geometry, vec!["53001".to_string()]);
        assert_eq!(report.features_without_region, vec!["53077".to_string()]);
        assert!(!report.is_clean());
    }

    #[test]
    fn clean_join_has_no_warnings() {
        let source = parse_geometry(BOUNDARIES, DEFAULT_ID_PROPERTY).unwrap();
        let report = source.join(&scored(&["53007", "53033", "53077"]));
        assert!(report.is_clean());
        assert_eq!(report.matched, 3);
    }

    #[test]
    fn numeric_ids_are_stringified() {
        let numeric = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"GEOID": 53007}, "geometry": null}
            ]
        }"#;
        let source = parse_geometry(numeric, DEFAULT_ID_PROPERTY).unwrap();
        assert!(source.contains("53007"));
    }

    #[test]
    fn features_without_identity_are_counted_not_fatal() {
        let anonymous = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"NAME": "Mystery"}, "geometry": null}
            ]
        }"#;
        let source = parse_geometry(anonymous, DEFAULT_ID_PROPERTY).unwrap();
        assert_eq!(source.features_missing_id(), 1);
        assert!(source.ids().is_empty());
    }

    #[test]
    fn non_collection_geojson_is_rejected() {
        let bare = r#"{"type": "Point", "coordinates": [0.0, 0.0]}"#;
        assert!(parse_geometry(bare, DEFAULT_ID_PROPERTY).is_err());
    }
}
