//! CLI smoke tests for the haulplan binary.
//!
//! `HOME` is pointed at a scratch directory so each test gets its own
//! `~/.haulplan` data directory and never touches real user state.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn haulplan(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("haulplan").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

const FEASIBLE_PLAN: &str = r#"
fleet = [1500, 10000]

[client]
name = "acme"
latitude = 55.7558
longitude = 37.6173
demand = 9000

[[warehouses]]
name = "north"
latitude = 59.9343
longitude = 30.3351
supply = 8000

[[warehouses]]
name = "south"
latitude = 47.2357
longitude = 39.7015
supply = 9000
"#;

const INFEASIBLE_PLAN: &str = r#"
fleet = [100]

[client]
name = "acme"
latitude = 55.7558
longitude = 37.6173
demand = 9000

[[warehouses]]
name = "north"
latitude = 59.9343
longitude = 30.3351
supply = 8000
"#;

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    haulplan(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("solve"))
        .stdout(predicate::str::contains("warehouse"))
        .stdout(predicate::str::contains("client"));
}

#[test]
fn solve_plan_file_prints_json_plan() {
    let home = TempDir::new().unwrap();
    let plan_path = home.path().join("plan.toml");
    std::fs::write(&plan_path, FEASIBLE_PLAN).unwrap();

    haulplan(&home)
        .args(["--json", "solve", "--plan"])
        .arg(&plan_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\":\"optimal\""))
        .stdout(predicate::str::contains("\"shipments\""));
}

#[test]
fn solve_infeasible_plan_exits_one() {
    let home = TempDir::new().unwrap();
    let plan_path = home.path().join("plan.toml");
    std::fs::write(&plan_path, INFEASIBLE_PLAN).unwrap();

    haulplan(&home)
        .args(["solve", "--plan"])
        .arg(&plan_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("demand cannot be met"));
}

#[test]
fn solve_writes_geojson_with_routes() {
    let home = TempDir::new().unwrap();
    let plan_path = home.path().join("plan.toml");
    let geojson_path = home.path().join("plan.geojson");
    std::fs::write(&plan_path, FEASIBLE_PLAN).unwrap();

    haulplan(&home)
        .args(["--quiet", "solve", "--plan"])
        .arg(&plan_path)
        .arg("--geojson")
        .arg(&geojson_path)
        .assert()
        .success();

    let body = std::fs::read_to_string(&geojson_path).unwrap();
    let collection: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(collection["type"], "FeatureCollection");

    let features = collection["features"].as_array().unwrap();
    assert!(features
        .iter()
        .any(|f| f["properties"]["kind"] == "route"));
    assert!(features
        .iter()
        .any(|f| f["properties"]["kind"] == "client"));
}

#[test]
fn warehouse_add_then_list_roundtrips() {
    let home = TempDir::new().unwrap();

    haulplan(&home)
        .args([
            "warehouse", "add", "north", "--lat", "59.93", "--lon", "30.33", "--supply", "800",
        ])
        .assert()
        .success();

    haulplan(&home)
        .args(["warehouse", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("north"))
        .stdout(predicate::str::contains("800"));
}

#[test]
fn solve_without_client_reports_missing_client() {
    let home = TempDir::new().unwrap();

    haulplan(&home)
        .args([
            "warehouse", "add", "north", "--lat", "59.93", "--lon", "30.33", "--supply", "800",
        ])
        .assert()
        .success();

    haulplan(&home)
        .arg("solve")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no client is configured"));
}

#[test]
fn solve_from_store_uses_saved_sites() {
    let home = TempDir::new().unwrap();

    haulplan(&home)
        .args([
            "warehouse", "add", "north", "--lat", "59.93", "--lon", "30.33", "--supply", "9500",
        ])
        .assert()
        .success();
    haulplan(&home)
        .args([
            "client", "set", "acme", "--lat", "55.75", "--lon", "37.61", "--demand", "9000",
        ])
        .assert()
        .success();

    haulplan(&home)
        .args(["--json", "solve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\":\"optimal\""));
}
