use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const CATALOG: &str = "\
- name: Coors Field
  temperature: 75
  pressure_hpa: 843
  relative_humidity: 0.3
  wind:
    speed_m_s: 4
    direction_deg: 0
- name: Tropicana Field
  temperature: 22
  temperature_unit: celsius
  pressure_hpa: 1015
  relative_humidity: 0.5
";

const PAGE: &str = r#"<html><script>
const serverVals = {"binnedData": [[2023, 0.33, 700000, 100, 0.25], [2023, 0.35, 700000, 300, 0.75], [2024, 0.34, 710000, 50, 1.0]], "scatterData": []};
</script></html>"#;

#[test]
fn conditions_reports_density_and_drag() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("parks.yaml");
    fs::write(&catalog, CATALOG).unwrap();
    let report = dir.path().join("out/report.json");

    Command::cargo_bin("conditions")
        .unwrap()
        .args(["--catalog", catalog.to_str().unwrap()])
        .args(["--park", "coors field"])
        .args(["--velocity", "40", "0", "-2"])
        .args(["--cd", "0.35"])
        .args(["--report", report.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ballpark        : Coors Field"))
        .stdout(predicate::str::contains("Air density"))
        .stdout(predicate::str::contains("DragForce(x="));

    let json = fs::read_to_string(&report).unwrap();
    assert!(json.contains("\"ballpark\": \"Coors Field\""));
    assert!(json.contains("\"force_n\""));
}

#[test]
fn conditions_rejects_unknown_park_and_bad_velocity() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("parks.yaml");
    fs::write(&catalog, CATALOG).unwrap();

    Command::cargo_bin("conditions")
        .unwrap()
        .args(["--catalog", catalog.to_str().unwrap(), "--park", "Wrigley Field"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in catalog"));

    Command::cargo_bin("conditions")
        .unwrap()
        .args(["--catalog", catalog.to_str().unwrap(), "--park", "Coors Field"])
        .args(["--velocity", "40", "0", "--cd", "0.35"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly three components"));
}

#[test]
fn fetch_drag_reads_saved_page_and_feeds_conditions() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("dashboard.html");
    fs::write(&page, PAGE).unwrap();
    let table = dir.path().join("drag.csv");

    Command::cargo_bin("fetch_drag")
        .unwrap()
        .args(["--html", page.to_str().unwrap()])
        .args(["--table-output", table.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023  0.3450"))
        .stdout(predicate::str::contains("2024  0.3400"));

    assert_eq!(
        fs::read_to_string(&table).unwrap(),
        "year,cd\n2023,0.345000\n2024,0.340000\n"
    );

    let catalog = dir.path().join("parks.yaml");
    fs::write(&catalog, CATALOG).unwrap();
    Command::cargo_bin("conditions")
        .unwrap()
        .args(["--catalog", catalog.to_str().unwrap(), "--park", "Tropicana Field"])
        .args(["--velocity", "30", "0", "0"])
        .args(["--drag-table", table.to_str().unwrap(), "--year", "2023"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cd = 0.345"));
}
