use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn co2() -> Command {
    let mut cmd = Command::cargo_bin("co2").unwrap();
    cmd.env_remove("CO2_REPORT_PATH")
        .env_remove("CO2_CHART_WIDTH")
        .env_remove("CO2_PRECISION")
        .env_remove("RUST_LOG");
    cmd
}

const SCENARIO: [&str; 10] = [
    "-t",
    "car:50",
    "-t",
    "bus:20",
    "-e",
    "electricity:300",
    "-f",
    "meat:2",
    "-f",
    "vegetarian:10",
];

#[test]
fn calc_prints_entries_and_total() {
    co2()
        .arg("calc")
        .args(SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: 50 km by car = 9.60 kg CO2"))
        .stdout(predicate::str::contains("Added: 2 kg of meat = 54.00 kg CO2"))
        .stdout(predicate::str::contains("Total emissions: 222.88 kg"));
}

#[test]
fn calc_summary_matches_category_totals() {
    co2()
        .arg("calc")
        .args(SCENARIO)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transportation: 11.38 kg CO2"))
        .stdout(predicate::str::contains("Energy: 142.50 kg CO2"))
        .stdout(predicate::str::contains("Food: 69.00 kg CO2"))
        .stdout(predicate::str::contains("0.223 tonnes"));
}

#[test]
fn calc_rejects_unknown_mode() {
    co2()
        .args(["calc", "-t", "rocket:10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown mode 'rocket'"));
}

#[test]
fn calc_rejects_non_positive_amount_before_core() {
    co2()
        .args(["calc", "-t", "car:-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount must be positive"));
}

#[test]
fn calc_without_entries_reports_no_data() {
    co2()
        .args(["calc", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No emissions recorded yet!"));
}

#[test]
fn calc_json_output() {
    let output = co2()
        .args(["--format", "json", "calc", "-e", "natural_gas:150", "--summary"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["entries"][0]["type"], "Natural_gas");
    assert_eq!(value["entries"][0]["unit"], "kWh");
    assert_eq!(value["summary"]["categories"][0]["category"], "Energy");
}

#[test]
fn save_then_summary_and_chart_from_report() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("week.csv");

    co2()
        .arg("calc")
        .args(SCENARIO)
        .arg("--save")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to"));

    let text = fs::read_to_string(&report).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("category,type,amount,unit,co2_kg"));
    assert!(lines.next().unwrap().starts_with("Transportation,Car,50.0,km,"));
    assert_eq!(text.lines().count(), 6);

    co2()
        .arg("summary")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total CO2 Emissions:           222.88 kg"));

    co2()
        .arg("chart")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("CO2 Emissions by Category"))
        .stdout(predicate::str::contains("CO2 Emissions by Type"));
}

#[test]
fn save_uses_default_report_path() {
    let dir = tempfile::tempdir().unwrap();
    co2()
        .current_dir(dir.path())
        .args(["calc", "-t", "train:100", "--save"])
        .assert()
        .success();
    assert!(dir.path().join("co2_report.csv").exists());
}

#[test]
fn empty_calc_does_not_create_report() {
    let dir = tempfile::tempdir().unwrap();
    co2()
        .current_dir(dir.path())
        .args(["calc", "--save"])
        .assert()
        .success();
    assert!(!dir.path().join("co2_report.csv").exists());
}

#[test]
fn summary_of_missing_report_fails() {
    let dir = tempfile::tempdir().unwrap();
    co2()
        .arg("summary")
        .arg(dir.path().join("nope.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read report"));
}

#[test]
fn session_reads_commands_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("session.csv");
    let script = format!(
        "transport plane 500\nenergy gas 10\nfood vegetarian 4\nsummary\n\
         save {}\nclear\ny\ntotal\nquit\n",
        report.display()
    );

    co2()
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: 500 km by plane = 127.50 kg CO2"))
        .stdout(predicate::str::contains("Error: Unknown energy type 'gas'"))
        .stdout(predicate::str::contains("Total emissions: 133.50 kg"))
        .stdout(predicate::str::contains("CO2 EMISSION SUMMARY"))
        .stdout(predicate::str::contains("All entries cleared."))
        .stdout(predicate::str::contains("Total emissions: 0.00 kg"));

    let text = fs::read_to_string(&report).unwrap();
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn session_can_load_a_report() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("in.csv");
    fs::write(
        &report,
        "category,type,amount,unit,co2_kg\nTransportation,Car,100.0,km,19.2\n",
    )
    .unwrap();

    co2()
        .arg("session")
        .arg("--load")
        .arg(&report)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 1 entries."))
        .stdout(predicate::str::contains("Total emissions: 19.20 kg"));
}

#[test]
fn factors_lists_fixed_table() {
    co2()
        .arg("factors")
        .assert()
        .success()
        .stdout(predicate::str::contains("car_km"))
        .stdout(predicate::str::contains("0.192"))
        .stdout(predicate::str::contains("vegetarian_meal"));
}

#[test]
fn calc_saves_entries_in_command_line_order() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("order.csv");
    co2()
        .args(["calc", "-f", "meat:2", "-e", "electricity:10", "-t", "car:50", "--save"])
        .arg(&report)
        .assert()
        .success();

    let text = fs::read_to_string(&report).unwrap();
    let categories: Vec<&str> = text
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').next())
        .collect();
    assert_eq!(categories, ["Food", "Energy", "Transportation"]);
}

#[test]
fn precision_comes_from_environment() {
    co2()
        .env("CO2_PRECISION", "3")
        .args(["calc", "-t", "car:50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total emissions: 9.600 kg"));
}

#[test]
fn precision_flag_overrides_environment() {
    co2()
        .env("CO2_PRECISION", "3")
        .args(["--precision", "1", "calc", "-t", "car:50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total emissions: 9.6 kg"));
}

#[test]
fn invalid_precision_in_environment_is_a_config_error() {
    co2()
        .env("CO2_PRECISION", "abc")
        .arg("factors")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"))
        .stderr(predicate::str::contains(
            "CO2_PRECISION: expected a whole number, got 'abc'",
        ));
}
