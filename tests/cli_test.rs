//! CLI-level tests exercising the binary end to end.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

const SAMPLE_CSV: &str = "\
region_id,name,temperature_anomaly,precipitation_deficit,fire_event_count,wui_interface_pct,wui_intermix_pct,population,climate_trend_label
53007,CHELAN,2.1,1.4,38,22.5,41.0,79074,Warming & Drying
53033,KING,0.8,0.2,5,12.0,8.5,2252782,Warming
53001,ADAMS,-0.3,-0.6,1,3.0,6.5,20613,Stable
";

fn firerisk() -> Command {
    Command::cargo_bin("firerisk").unwrap()
}

fn write_sample(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("counties.csv");
    fs::write(&path, SAMPLE_CSV).unwrap();
    path
}

#[test]
fn score_terminal_output_lists_regions() {
    let dir = TempDir::new().unwrap();
    let data = write_sample(&dir);

    let output = firerisk()
        .current_dir(dir.path())
        .args(["score", data.to_str().unwrap()])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("3 of 3 regions shown"));
    assert!(stdout.contains("CHELAN"));
    assert!(stdout.contains("ADAMS"));
}

#[test]
fn score_json_output_is_parseable() {
    let dir = TempDir::new().unwrap();
    let data = write_sample(&dir);

    let output = firerisk()
        .current_dir(dir.path())
        .args(["score", data.to_str().unwrap(), "--format", "json"])
        .assert()
        .success();
    let value: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(value["summary"]["region_count"], 3);
}

#[test]
fn score_csv_export_round_trips_through_the_reader() {
    let dir = TempDir::new().unwrap();
    let data = write_sample(&dir);
    let exported = dir.path().join("filtered.csv");

    firerisk()
        .current_dir(dir.path())
        .args([
            "score",
            data.to_str().unwrap(),
            "--format",
            "csv",
            "--output",
            exported.to_str().unwrap(),
            "--trend",
            "Stable",
        ])
        .assert()
        .success();

    let contents = fs::read_to_string(&exported).unwrap();
    let reread = firerisk::io::read_scored(contents.as_bytes()).unwrap();
    assert_eq!(reread.len(), 1);
    assert_eq!(reread.regions()[0].record.name, "ADAMS");
}

#[test]
fn missing_column_is_a_fatal_schema_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.csv");
    fs::write(
        &path,
        "region_id,name,precipitation_deficit,fire_event_count,wui_interface_pct,wui_intermix_pct,population,climate_trend_label\n53007,CHELAN,1.4,38,22.5,41.0,79074,Stable\n",
    )
    .unwrap();

    let output = firerisk()
        .current_dir(dir.path())
        .args(["score", path.to_str().unwrap()])
        .assert()
        .failure();
    let stderr = String::from_utf8(output.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("temperature_anomaly"));
}

#[test]
fn inverted_population_range_yields_empty_result_not_error() {
    let dir = TempDir::new().unwrap();
    let data = write_sample(&dir);

    let output = firerisk()
        .current_dir(dir.path())
        .args([
            "score",
            data.to_str().unwrap(),
            "--min-population",
            "100000",
            "--max-population",
            "50000",
        ])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("0 of 3 regions shown"));
}

#[test]
fn init_writes_config_and_respects_existing_file() {
    let dir = TempDir::new().unwrap();

    firerisk().current_dir(dir.path()).arg("init").assert().success();
    assert!(dir.path().join(".firerisk.toml").exists());

    // Second run without --force refuses to overwrite
    firerisk().current_dir(dir.path()).arg("init").assert().failure();
    firerisk()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn score_honors_discovered_config_thresholds() {
    let dir = TempDir::new().unwrap();
    let data = write_sample(&dir);
    // Thresholds so low everything classifies Critical
    fs::write(
        dir.path().join(".firerisk.toml"),
        "[thresholds]\ncritical = 1.0\nhigh = 0.5\nmoderate = 0.1\n",
    )
    .unwrap();

    let output = firerisk()
        .current_dir(dir.path())
        .args(["score", data.to_str().unwrap(), "--format", "json"])
        .assert()
        .success();
    let value: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(value["summary"]["category_counts"]["Critical"], 3);
}

#[test]
fn geometry_join_mismatch_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let data = write_sample(&dir);
    let geometry = dir.path().join("counties.geojson");
    fs::write(
        &geometry,
        r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"GEOID": "53007"}, "geometry": null}
        ]}"#,
    )
    .unwrap();

    let output = firerisk()
        .current_dir(dir.path())
        .args([
            "score",
            data.to_str().unwrap(),
            "--geometry",
            geometry.to_str().unwrap(),
        ])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Geometry join"));
    assert!(stdout.contains("3 of 3 regions shown"));
}
