use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const AQUARIUMS: &str = r#"schema_version: "1.0"
aquariums:
  - id: reef
    name: Reef 300
    volume: 300
    mainType: marine
    subType: sps
  - id: tetras
    name: Tetras
    volume: 120
    type: freshwater
    subType: community
  - id: odd
    name: Odd One
    volume: 50
    subType: unknownXYZ
"#;

const READINGS: &str = "id,aquarium_id,parameter,value,timestamp
r1,reef,no3,3,2024-05-01T08:00:00Z
r2,reef,no3,12,2024-05-08T08:00:00Z
r3,reef,po4,0.05,2024-05-08T08:00:00Z
r4,tetras,ph,9.0,2024-05-02T10:00:00Z
r5,odd,kh,8,2024-05-02T10:00:00Z
r6,reef,boron,8,2024-05-02T10:00:00Z
";

fn fixtures() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let aquariums = dir.path().join("aquariums.yaml");
    let readings = dir.path().join("readings.csv");
    fs::write(&aquariums, AQUARIUMS).unwrap();
    fs::write(&readings, READINGS).unwrap();
    (dir, aquariums, readings)
}

fn aquamind() -> Command {
    Command::cargo_bin("aquamind").unwrap()
}

#[test]
fn evaluate_prints_status_per_aquarium() {
    let (_dir, aquariums, readings) = fixtures();
    aquamind()
        .args(["--lang", "en", "evaluate", "--aquariums"])
        .arg(&aquariums)
        .arg("--readings")
        .arg(&readings)
        .assert()
        .success()
        .stdout(predicate::str::contains("[alert] Alert: Nitrate high"))
        .stdout(predicate::str::contains("[alert] Alert: pH high"))
        .stdout(predicate::str::contains("[undefinedRanges] Ranges not defined for this aquarium type"))
        .stderr(predicate::str::contains("'odd' has no recognizable main type"));
}

#[test]
fn evaluate_defaults_to_spanish() {
    let (_dir, aquariums, readings) = fixtures();
    aquamind()
        .args(["evaluate", "--aquariums"])
        .arg(&aquariums)
        .arg("--readings")
        .arg(&readings)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alerta: Nitratos alto"));
}

#[test]
fn evaluate_json_and_log() {
    let (dir, aquariums, readings) = fixtures();
    let log = dir.path().join("evaluations.csv");
    let output = aquamind()
        .args(["--lang", "en", "evaluate", "--json", "--aquariums"])
        .arg(&aquariums)
        .arg("--readings")
        .arg(&readings)
        .arg("--log")
        .arg(&log)
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reports[0]["result"]["severity"], "alert");
    assert_eq!(reports[1]["result"]["recommendations"][0]["key"], "freshwater_ph");
    assert_eq!(reports[2]["result"]["severity"], "undefinedRanges");

    let logged = fs::read_to_string(&log).unwrap();
    assert_eq!(logged.lines().count(), 4);
}

#[test]
fn evaluate_json_stays_parseable_with_catalog_dir() {
    let (dir, aquariums, readings) = fixtures();
    let catalog = dir.path().join("catalog");
    fs::create_dir_all(catalog.join("ranges")).unwrap();
    fs::write(
        catalog.join("ranges/odd.yaml"),
        r#"schema_version: "1.0"
sub_types:
  - sub_type: unknownXYZ
    main_type: marine
    ranges:
      - parameter: kh
        display_name: { es: KH, en: KH }
        min: 9
        max: 12
"#,
    )
    .unwrap();

    let output = aquamind()
        .args(["--lang", "en", "evaluate", "--json", "--aquariums"])
        .arg(&aquariums)
        .arg("--readings")
        .arg(&readings)
        .arg("--catalog")
        .arg(&catalog)
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reports[2]["result"]["severity"], "alert");
    assert!(String::from_utf8(output.stderr).unwrap().contains("Catalogs loaded"));
}

#[test]
fn evaluation_log_accumulates_across_runs() {
    let (dir, aquariums, readings) = fixtures();
    let log = dir.path().join("evaluations.csv");
    for _ in 0..2 {
        aquamind()
            .args(["evaluate", "--aquariums"])
            .arg(&aquariums)
            .arg("--readings")
            .arg(&readings)
            .arg("--log")
            .arg(&log)
            .assert()
            .success();
    }

    let mut reader = csv::Reader::from_path(&log).unwrap();
    assert_eq!(reader.records().count(), 6);
}

#[test]
fn malformed_reading_fails_with_line_number() {
    let (dir, aquariums, _) = fixtures();
    let readings = dir.path().join("bad.csv");
    fs::write(
        &readings,
        "id,aquarium_id,parameter,value,timestamp\nr1,reef,kh,NaN,2024-05-01T08:00:00Z\n",
    )
    .unwrap();
    aquamind()
        .args(["evaluate", "--aquariums"])
        .arg(&aquariums)
        .arg("--readings")
        .arg(&readings)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn ranges_lists_sub_type_table() {
    aquamind()
        .args(["--lang", "en", "ranges", "--sub-type", "sps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sps (marine)"))
        .stdout(predicate::str::contains("Calcium"))
        .stdout(predicate::str::contains("Recorded without a reference range: salinity"));

    aquamind()
        .args(["ranges", "--sub-type", "unknownXYZ"])
        .assert()
        .failure();
}

#[test]
fn sub_types_filters_by_main_type() {
    aquamind()
        .args(["sub-types", "--main-type", "freshwater"])
        .assert()
        .success()
        .stdout(predicate::str::contains("goldfish"))
        .stdout(predicate::str::contains("mixedReef").not());
}

#[test]
fn water_change_reports_smart_note() {
    let (_dir, aquariums, readings) = fixtures();
    aquamind()
        .args(["--lang", "en", "water-change", "--aquarium", "reef", "--volume", "30", "--aquariums"])
        .arg(&aquariums)
        .arg("--readings")
        .arg(&readings)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"water_change\""))
        .stdout(predicate::str::contains("May reduce NO₃ by ~1.20 ppm. May reduce PO₄ by ~0.005 ppm."));
}

#[test]
fn history_groups_readings_by_parameter() {
    let (_dir, _, readings) = fixtures();
    aquamind()
        .args(["history", "--aquarium", "reef", "--range", "all", "--readings"])
        .arg(&readings)
        .assert()
        .success()
        .stdout(predicate::str::contains("--- no3 (2 readings) ---"))
        .stdout(predicate::str::contains("--- po4 (1 readings) ---"))
        .stdout(predicate::str::contains("--- boron (1 readings, custom) ---"));
}

#[test]
fn summary_totals_fleet() {
    let (_dir, aquariums, _) = fixtures();
    aquamind()
        .args(["summary", "--aquariums"])
        .arg(&aquariums)
        .assert()
        .success()
        .stdout(predicate::str::contains("Marine: 2"))
        .stdout(predicate::str::contains("Freshwater: 1"))
        .stdout(predicate::str::contains("Total volume: 470.0 L"));
}
