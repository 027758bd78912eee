#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use roulement::{JsonStorage, Storage};
use std::fs;
use tempfile::tempdir;

fn cli(schedule: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("roulement-cli").unwrap();
    cmd.arg("--schedule").arg(schedule);
    cmd
}

#[test]
fn init_import_extend_list() {
    let dir = tempdir().unwrap();
    let schedule = dir.path().join("schedule.json");
    let csv = dir.path().join("templates.csv");
    fs::write(
        &csv,
        "location,start_day,start_time,end_day,end_time,default_worker\n\
         accueil,0,08:00,0,16:00,alice\n\
         garde,6,19:00,0,06:00,\n",
    )
    .unwrap();

    cli(&schedule)
        .args(["init", "--rotation-length", "7", "--start", "2025-10-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialised"));

    cli(&schedule)
        .args(["import-templates", "--csv"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 template(s)"));

    cli(&schedule)
        .args(["extend", "--days", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drafted 2 shift(s) up to 2025-10-12"));

    cli(&schedule)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("garde | 2025-10-12T19:00:00+00:00"));

    let stored = JsonStorage::open(&schedule).unwrap().load().unwrap();
    assert_eq!(stored.state.draft_length, 7);
    assert_eq!(stored.version, 2);
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let schedule = dir.path().join("schedule.json");

    cli(&schedule)
        .args(["init", "--rotation-length", "7", "--start", "2025-10-06"])
        .assert()
        .success();
    cli(&schedule)
        .args(["init", "--rotation-length", "7", "--start", "2025-10-06"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn add_template_outside_cycle_fails() {
    let dir = tempdir().unwrap();
    let schedule = dir.path().join("schedule.json");

    cli(&schedule)
        .args(["init", "--rotation-length", "3", "--start", "2025-10-06"])
        .assert()
        .success();
    cli(&schedule)
        .args([
            "add-template",
            "--location",
            "poste",
            "--start-day",
            "5",
            "--start-time",
            "08:00",
            "--end-day",
            "0",
            "--end-time",
            "12:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start_day_offset 5"));
}

#[test]
fn negative_extension_fails() {
    let dir = tempdir().unwrap();
    let schedule = dir.path().join("schedule.json");

    cli(&schedule)
        .args(["init", "--rotation-length", "7", "--start", "2025-10-06"])
        .assert()
        .success();
    cli(&schedule)
        .args(["extend", "--days=-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("length in days"));
}

#[test]
fn draft_listing_exports_the_same_shifts_as_json_and_csv() {
    let dir = tempdir().unwrap();
    let schedule = dir.path().join("schedule.json");
    let out_json = dir.path().join("draft.json");
    let out_csv = dir.path().join("draft.csv");

    cli(&schedule)
        .args(["init", "--rotation-length", "7", "--start", "2025-10-06"])
        .assert()
        .success();
    cli(&schedule)
        .args([
            "add-template",
            "--location",
            "garde",
            "--start-day",
            "6",
            "--start-time",
            "19:00",
            "--end-day",
            "0",
            "--end-time",
            "06:00",
        ])
        .assert()
        .success();
    cli(&schedule)
        .args(["extend", "--days", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drafted 2 shift(s)"));
    cli(&schedule).arg("publish").assert().success();

    cli(&schedule)
        .args(["list", "--draft", "--out-json"])
        .arg(&out_json)
        .arg("--out-csv")
        .arg(&out_csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("(660 min)"));

    let json: serde_json::Value = serde_json::from_slice(&fs::read(&out_json).unwrap()).unwrap();
    let listed = json.as_array().expect("draft export is a shift list");
    let csv_rows = fs::read_to_string(&out_csv).unwrap().lines().count() - 1;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed.len(), csv_rows);
}
