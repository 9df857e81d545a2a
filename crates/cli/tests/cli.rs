use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn data(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

fn text_sources() -> [String; 4] {
    [
        "--planets".into(),
        data("Planetary_Data.txt"),
        "--orbits".into(),
        data("Solar_System_Data.txt"),
    ]
}

#[test]
fn catalog_prints_escape_velocities() {
    Command::cargo_bin("catalog")
        .expect("catalog bin")
        .args(text_sources())
        .assert()
        .success()
        .stdout(predicate::str::contains("Earth: diameter 12742 km"))
        .stdout(predicate::str::contains("escape velocity 11185.7"))
        .stdout(predicate::str::contains("Pluto"));
}

#[test]
fn catalog_saves_yaml_that_loads_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let yaml = dir.path().join("catalog.yaml");
    Command::cargo_bin("catalog")
        .expect("catalog bin")
        .args(text_sources())
        .args(["--save-yaml", yaml.to_str().unwrap()])
        .assert()
        .success();

    Command::cargo_bin("catalog")
        .expect("catalog bin")
        .args(["--catalog", yaml.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Neptune: diameter 49244 km"));
}

#[test]
fn simulate_prints_angles_for_a_day() {
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args(text_sources())
        .args(["--day", "182.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Earth: 180.000000°"));
}

#[test]
fn simulate_streams_position_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("positions.csv");
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args(text_sources())
        .args(["--ticks", "3", "--dt", "1", "--time-scale", "10"])
        .args(["--output", out.to_str().unwrap()])
        .assert()
        .success();

    let mut reader = csv::Reader::from_path(&out).expect("csv reader");
    let headers: Vec<String> = reader
        .headers()
        .expect("headers")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, ["tick", "time", "body", "x", "y"]);
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 3 * 9);
    assert_eq!(&rows[0][0], "1");
    assert_eq!(&rows.last().unwrap()[0], "3");
}

#[test]
fn journey_reports_travel_between_earth_and_mars() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json = dir.path().join("plan.json");
    Command::cargo_bin("journey")
        .expect("journey bin")
        .args(text_sources())
        .args(["--from", "Earth", "--to", "Mars", "--policy", "static"])
        .args(["--horizon-days", "800", "--epoch-days", "0"])
        .args(["--json", json.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Best launch window: day"))
        .stdout(predicate::str::contains("Total travel time"));

    let plan: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).expect("json")).expect("valid json");
    assert_eq!(plan["window"]["origin"], "Earth");
    assert_eq!(plan["window"]["policy"], "static");
    assert!(plan["window"]["best"]["day"].as_u64().is_some());
}

#[test]
fn journey_rejects_unknown_planet() {
    Command::cargo_bin("journey")
        .expect("journey bin")
        .args(text_sources())
        .args(["--from", "Earth", "--to", "Vulcan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vulcan"));
}
