use assert_cmd::Command;
use predicates::prelude::*;

fn tariff() -> Command {
    Command::cargo_bin("tariff").unwrap()
}

const CLEAN: &str = r#"{
    "monFri": [
        {"vehicleType": "Car/HGV", "from": "08:00", "to": "18:00"},
        {"vehicleType": "MC", "from": "08:00", "to": "18:00"}
    ],
    "sat": [
        {"vehicleType": "Car/HGV", "from": "08:00", "to": "14:00"}
    ]
}"#;

const OVERLAPPING_SAT: &str = r#"{
    "sat": [
        {"vehicleType": "Car/HGV", "from": "08:00", "to": "14:00"},
        {"vehicleType": "Car/HGV", "from": "13:00", "to": "20:00"}
    ]
}"#;

#[test]
fn validate_clean_schedule_succeeds() {
    tariff()
        .args(["validate", "-"])
        .write_stdin(CLEAN)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mon-Fri: 2 slots OK"))
        .stdout(predicate::str::contains("Sat: 1 slot OK"));
}

#[test]
fn validate_overlap_fails_with_indices() {
    tariff()
        .args(["validate", "-"])
        .write_stdin(OVERLAPPING_SAT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Overlap detected"))
        .stderr(predicate::str::contains("slots 0 and 1"));
}

#[test]
fn validate_day_filter_skips_other_buckets() {
    // Only Mon-Fri is checked, so the Sat overlap is not reported.
    tariff()
        .args(["validate", "-", "--day", "mon-fri"])
        .write_stdin(OVERLAPPING_SAT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mon-Fri: 0 slots OK"));
}

#[test]
fn validate_unknown_day_is_an_error() {
    tariff()
        .args(["validate", "-", "--day", "tuesdays"])
        .write_stdin(CLEAN)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown day bucket"));
}

#[test]
fn validate_missing_field_reported() {
    tariff()
        .args(["validate", "-"])
        .write_stdin(r#"{"sun": [{"vehicleType": "MC", "from": "08:00", "to": ""}]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing field"))
        .stderr(predicate::str::contains("'to'"));
}

#[test]
fn validate_rejects_malformed_json() {
    tariff()
        .args(["validate", "-"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing tariff schedule JSON"));
}

#[test]
fn show_prints_normalized_minutes() {
    tariff()
        .args(["show", "-"])
        .write_stdin(r#"{"sat": [{"vehicleType": "MC", "from": "22:00", "to": "02:00"}]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sat:"))
        .stdout(predicate::str::contains("(1320-1560, 240 min, crosses midnight)"));
}
